use crate::TimeSource;
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// A [`TimeSource`] that reads [`SystemTime::now`] on every call.
///
/// A clock set before the Unix epoch reads as zero rather than failing, so
/// generation stays total.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn unix_time(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.unix_time().as_secs() > 1_577_836_800);
    }
}

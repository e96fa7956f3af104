use crate::{Diagnostic, Diagnostics, HostnameSource, TimeSource};
use core::{fmt, time::Duration};

/// Tag pattern forced into the first fingerprint byte, shifted by 0..=2 bits.
const TAG_PATTERN: u8 = 0b1001;
/// The first fingerprint byte keeps only its low six bits.
const FIRST_BYTE_MASK: u8 = 0b0011_1111;
/// Bits of the first byte that survive into the low block.
pub(crate) const MACHINE_BITS_MASK: u8 = 0b111;

/// Where a [`Fingerprint`] was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerprintSource {
    /// The first three bytes of the MD5 digest of the host name.
    Hostname,
    /// The low three bytes of the Unix seconds, used when the host name is
    /// unavailable. Not stable across restarts.
    Timestamp,
}

/// A 3-byte machine fingerprint.
///
/// Derived once per generator from the host name (or a timestamp fallback),
/// then tagged: `0b1001 << offset` and `1 << offset` are OR-ed into the first
/// byte, with `offset = unix_nanos % 3`, and the byte is masked to six bits.
/// The tag guarantees the three bits copied into the low block are never all
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 3]);

impl Fingerprint {
    /// Wraps already-tagged bytes, e.g. a fingerprint restored from
    /// configuration.
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }

    /// Fingerprint derived from `md5(hostname)`.
    pub fn from_hostname(hostname: &str, now: Duration) -> Self {
        let digest = md5::compute(hostname.as_bytes());
        Self::tagged([digest[0], digest[1], digest[2]], now)
    }

    /// Fingerprint derived from the Unix seconds in `now`.
    pub fn from_timestamp(now: Duration) -> Self {
        let n = now.as_secs() as u32;
        Self::tagged([n as u8, (n >> 8) as u8, (n >> 16) as u8], now)
    }

    /// Resolves the fingerprint from `host`, falling back to `time` when the
    /// host name is unavailable. Both outcomes are reported to `diagnostics`.
    pub fn resolve<H, T, D>(host: &H, time: &T, diagnostics: &D) -> Self
    where
        H: HostnameSource + ?Sized,
        T: TimeSource + ?Sized,
        D: Diagnostics + ?Sized,
    {
        let now = time.unix_time();
        let (fingerprint, source) = match host.hostname() {
            Ok(name) => (Self::from_hostname(&name, now), FingerprintSource::Hostname),
            Err(error) => {
                diagnostics.report(&Diagnostic::HostnameUnavailable { error: &error });
                (Self::from_timestamp(now), FingerprintSource::Timestamp)
            }
        };
        diagnostics.report(&Diagnostic::FingerprintResolved {
            fingerprint,
            source,
        });
        fingerprint
    }

    fn tagged(mut bytes: [u8; 3], now: Duration) -> Self {
        let offset = (now.as_nanos() % 3) as u32;
        bytes[0] |= TAG_PATTERN << offset;
        bytes[0] |= 1 << offset;
        bytes[0] &= FIRST_BYTE_MASK;
        Self(bytes)
    }

    pub const fn to_bytes(self) -> [u8; 3] {
        self.0
    }

    /// The bytes as they are embedded in a low block: the first byte reduced
    /// to its low three bits.
    pub const fn machine_bits(self) -> [u8; 3] {
        [self.0[0] & MACHINE_BITS_MASK, self.0[1], self.0[2]]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b} {:08b} {:08b}", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Diagnostic, Error, FixedHostname, UnavailableHostname};
    use std::sync::Mutex;

    struct FixedTime(Duration);
    impl TimeSource for FixedTime {
        fn unix_time(&self) -> Duration {
            self.0
        }
    }

    #[test]
    fn hostname_fingerprint_uses_md5_prefix() {
        // md5("host-A") = 513d04...
        let fp = Fingerprint::from_hostname("host-A", Duration::ZERO);
        assert_eq!(fp.to_bytes(), [0x19, 0x3d, 0x04]);
        assert_eq!(fp.machine_bits(), [0x01, 0x3d, 0x04]);
    }

    #[test]
    fn tag_offset_follows_nanoseconds() {
        let one = Fingerprint::from_hostname("host-A", Duration::from_nanos(1));
        let two = Fingerprint::from_hostname("host-A", Duration::from_nanos(2));
        assert_eq!(one.to_bytes()[0], 0x13);
        assert_eq!(two.to_bytes()[0], 0x35);
    }

    #[test]
    fn machine_bits_are_never_zero() {
        for nanos in 0..3 {
            for raw in [0_u8, 0xFF, 0x40, 0x80] {
                let fp = Fingerprint::tagged([raw, 0, 0], Duration::from_nanos(nanos));
                assert_ne!(fp.machine_bits()[0], 0);
                assert_eq!(fp.to_bytes()[0] & !FIRST_BYTE_MASK, 0);
            }
        }
    }

    #[test]
    fn timestamp_fallback_uses_low_bytes_of_seconds() {
        // 1_700_000_000 = 0x6553_F100, and 1.7e18 ns % 3 == 2
        let fp = Fingerprint::from_timestamp(Duration::from_secs(1_700_000_000));
        assert_eq!(fp.to_bytes(), [0x24, 0xF1, 0x53]);
    }

    #[test]
    fn resolve_reports_hostname_source() {
        let events = Mutex::new(Vec::new());
        let sink = |event: &Diagnostic<'_>| {
            if let Diagnostic::FingerprintResolved { source, .. } = event {
                events.lock().unwrap().push(*source);
            }
        };
        let fp = Fingerprint::resolve(
            &FixedHostname::new("host-A"),
            &FixedTime(Duration::ZERO),
            &sink,
        );
        assert_eq!(fp, Fingerprint::from_hostname("host-A", Duration::ZERO));
        assert_eq!(*events.lock().unwrap(), vec![FingerprintSource::Hostname]);
    }

    #[test]
    fn resolve_falls_back_when_hostname_unavailable() {
        let errors = Mutex::new(Vec::new());
        let sink = |event: &Diagnostic<'_>| {
            if let Diagnostic::HostnameUnavailable { error } = event {
                errors.lock().unwrap().push((*error).clone());
            }
        };
        let now = Duration::from_secs(1_700_000_000);
        let fp = Fingerprint::resolve(&UnavailableHostname, &FixedTime(now), &sink);
        assert_eq!(fp, Fingerprint::from_timestamp(now));

        let errors = errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], Error::HostnameUnavailable { .. }));
    }

    #[test]
    fn display_prints_bits() {
        let fp = Fingerprint::from_bytes([0x19, 0x3d, 0x04]);
        assert_eq!(fp.to_string(), "00011001 00111101 00000100");
    }
}

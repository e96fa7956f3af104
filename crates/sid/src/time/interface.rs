use core::time::Duration;

/// A trait for time sources that return wall-clock time since the Unix epoch.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests.
///
/// Generation only consumes whole seconds (truncated to 32 bits) for the
/// timestamp field and the counter seed. The nanosecond component is used
/// once, when the fingerprint tag offset is chosen.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use sid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn unix_time(&self) -> Duration {
///         Duration::from_secs(1234)
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.unix_seconds(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the elapsed time since 1970-01-01 00:00:00 UTC.
    fn unix_time(&self) -> Duration;

    /// Returns the Unix time in seconds, truncated to 32 bits.
    fn unix_seconds(&self) -> u32 {
        self.unix_time().as_secs() as u32
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn unix_time(&self) -> Duration {
        (**self).unix_time()
    }
}

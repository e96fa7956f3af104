/// A trait for random sources that return random integers.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests.
///
/// The random type `T` is generic; the generator draws `u32` jitter.
///
/// # Example
/// ```
/// use sid::RandSource;
///
/// struct FixedRand;
/// impl RandSource<u32> for FixedRand {
///     fn rand(&self) -> u32 {
///         1234
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), 1234);
/// ```
pub trait RandSource<T> {
    /// Returns a random integer.
    fn rand(&self) -> T;
}

impl<T, R: RandSource<T> + ?Sized> RandSource<T> for &R {
    fn rand(&self) -> T {
        (**self).rand()
    }
}

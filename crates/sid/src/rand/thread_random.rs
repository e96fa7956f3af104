use crate::RandSource;
use rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and automatically
/// reseeded periodically.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads are
/// contention-free. This type does **not** store the RNG itself; it accesses
/// the thread-local generator on each call, so it is `Send + Sync` and can be
/// shared by a generator used from many threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u32> for ThreadRandom {
    fn rand(&self) -> u32 {
        rng().random()
    }
}

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}

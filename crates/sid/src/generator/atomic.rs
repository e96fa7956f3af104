use std::sync::OnceLock;

use portable_atomic::{AtomicU32, Ordering};

use crate::{
    Diagnostic, Diagnostics, Fingerprint, HighBlock, HostnameSource, ID_WIDTH, Identifier,
    LowBlock, RandSource, SystemClock, SystemHostname, ThreadRandom, TimeSource,
    TracingDiagnostics,
};

#[cfg(feature = "cache-padded")]
type Counter = crossbeam_utils::CachePadded<AtomicU32>;
#[cfg(not(feature = "cache-padded"))]
type Counter = AtomicU32;

#[cfg(feature = "cache-padded")]
fn counter_from(seed: u32) -> Counter {
    crossbeam_utils::CachePadded::new(AtomicU32::new(seed))
}
#[cfg(not(feature = "cache-padded"))]
fn counter_from(seed: u32) -> Counter {
    AtomicU32::new(seed)
}

/// A lock-free identifier generator suitable for multi-threaded environments.
///
/// The generator owns the only mutable state involved in generation: a 32-bit
/// counter, incremented with a single atomic `fetch_add` per identifier, and a
/// machine [`Fingerprint`] computed once, on first use, behind a [`OnceLock`].
/// Time and jitter are sampled fresh on every call.
///
/// ## Features
/// - ✅ Thread-safe, never blocks after the fingerprint is resolved
/// - ✅ Infallible: degraded paths are reported to [`Diagnostics`]
/// - ❌ No ordering between concurrent callers beyond the counter
///
/// ## Sources
/// - `T`: [`TimeSource`] for the timestamp and counter seed
/// - `R`: [`RandSource<u32>`] for jitter
/// - `H`: [`HostnameSource`] for the fingerprint
/// - `D`: [`Diagnostics`] sink
///
/// ## See Also
/// - [`generate`](crate::generate) for the process-wide default generator
pub struct Generator<T = SystemClock, R = ThreadRandom, H = SystemHostname, D = TracingDiagnostics>
where
    T: TimeSource,
    R: RandSource<u32>,
    H: HostnameSource,
    D: Diagnostics,
{
    counter: Counter,
    fingerprint: OnceLock<Fingerprint>,
    time: T,
    rand: R,
    host: H,
    diagnostics: D,
}

impl Generator {
    /// Creates a generator backed by the system clock, the thread-local RNG,
    /// the OS host name and `tracing` diagnostics.
    ///
    /// # Example
    /// ```
    /// use sid::Generator;
    ///
    /// let generator = Generator::new();
    /// let id = generator.generate("user-");
    /// assert!(id.starts_with("user-"));
    /// ```
    pub fn new() -> Self {
        Self::from_components(SystemClock, ThreadRandom, SystemHostname, TracingDiagnostics)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R, H, D> Generator<T, R, H, D>
where
    T: TimeSource,
    R: RandSource<u32>,
    H: HostnameSource,
    D: Diagnostics,
{
    /// Creates a generator from explicit sources.
    ///
    /// The counter is seeded from `time` (Unix seconds, truncated to 32 bits).
    /// The fingerprint is not resolved until the first identifier is
    /// generated.
    ///
    /// # Example
    /// ```
    /// use sid::{FixedHostname, Generator, NoopDiagnostics, SystemClock, ThreadRandom};
    ///
    /// let generator = Generator::from_components(
    ///     SystemClock,
    ///     ThreadRandom,
    ///     FixedHostname::new("node-7"),
    ///     NoopDiagnostics,
    /// );
    /// assert_eq!(generator.generate("").len(), 20);
    /// ```
    pub fn from_components(time: T, rand: R, host: H, diagnostics: D) -> Self {
        let seed = time.unix_seconds();
        Self {
            counter: counter_from(seed),
            fingerprint: OnceLock::new(),
            time,
            rand,
            host,
            diagnostics,
        }
    }

    /// Replaces the counter seed, e.g. to continue a sequence.
    #[must_use]
    pub fn with_counter(mut self, seed: u32) -> Self {
        self.counter = counter_from(seed);
        self
    }

    /// Pins the fingerprint. The hostname source is never consulted.
    #[must_use]
    pub fn with_fingerprint(mut self, fingerprint: Fingerprint) -> Self {
        self.fingerprint = OnceLock::from(fingerprint);
        self
    }

    /// Returns the machine fingerprint, resolving it on first use.
    ///
    /// Concurrent first callers wait on the same initialization, so every
    /// identifier from this generator embeds the same fingerprint.
    pub fn fingerprint(&self) -> Fingerprint {
        *self
            .fingerprint
            .get_or_init(|| Fingerprint::resolve(&self.host, &self.time, &self.diagnostics))
    }

    /// The value embedded by the most recent identifier (or the seed if none
    /// was generated yet).
    pub fn counter(&self) -> u32 {
        self.counter.load(Ordering::Relaxed)
    }

    /// Generates the next identifier as a typed value.
    ///
    /// Performs exactly one atomic increment and embeds the post-increment
    /// value (mod 2^32).
    pub fn next_id(&self) -> Identifier {
        let fingerprint = self.fingerprint();
        let counter = self.counter.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        let high = HighBlock::new(self.time.unix_seconds(), counter);
        let low = LowBlock::new(fingerprint, self.rand.rand());
        Identifier::from_blocks(high, low)
    }

    /// Generates a token: `prefix` followed by the unpadded base36 rendering
    /// of both blocks.
    ///
    /// The body is 20 characters in practice. If it is not, a
    /// [`Diagnostic::LengthMismatch`] is reported and the token is returned
    /// anyway; use [`Self::generate_padded`] for a guaranteed width.
    pub fn generate(&self, prefix: &str) -> String {
        let id = self.next_id();
        let high = id.high().encode();
        let low = id.low().encode();

        if high.len() + low.len() != ID_WIDTH {
            self.diagnostics.report(&Diagnostic::LengthMismatch {
                prefix,
                high: &high,
                low: &low,
            });
        }

        let mut out = String::with_capacity(prefix.len() + ID_WIDTH);
        out.push_str(prefix);
        out.push_str(&high);
        out.push_str(&low);
        out
    }

    /// Like [`Self::generate`], with each block zero-padded to ten
    /// characters so the body is always exactly 20 characters.
    pub fn generate_padded(&self, prefix: &str) -> String {
        let body = self.next_id().to_padded_string();
        let mut out = String::with_capacity(prefix.len() + body.len());
        out.push_str(prefix);
        out.push_str(&body);
        out
    }
}

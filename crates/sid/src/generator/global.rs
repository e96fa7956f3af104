//! Process-wide default generator.
//!
//! One [`Generator`] per process, built on first use: a single fingerprint and
//! a single counter sequence shared by every caller of these functions.
//!
//! # Example
//! ```rust
//! let id = sid::generate("order-");
//! assert!(id.starts_with("order-"));
//! ```

use crate::{Generator, Identifier};
use std::sync::LazyLock;

static GLOBAL_GENERATOR: LazyLock<Generator> = LazyLock::new(Generator::new);

/// The process-wide generator.
pub fn global() -> &'static Generator {
    &GLOBAL_GENERATOR
}

/// Generates a token with the process-wide generator.
///
/// See [`Generator::generate`].
pub fn generate(prefix: &str) -> String {
    GLOBAL_GENERATOR.generate(prefix)
}

/// Generates a fixed-width token with the process-wide generator.
///
/// See [`Generator::generate_padded`].
pub fn generate_padded(prefix: &str) -> String {
    GLOBAL_GENERATOR.generate_padded(prefix)
}

/// Generates a typed identifier with the process-wide generator.
pub fn next_id() -> Identifier {
    GLOBAL_GENERATOR.next_id()
}

//! Roughly-sortable, process-unique identifiers rendered in base36.
//!
//! A token is an optional prefix followed by two independently rendered
//! 64-bit blocks:
//!
//! - the **high block** carries a fixed tag, the Unix seconds and the low 16
//!   bits of an atomic counter;
//! - the **low block** carries three bytes of machine fingerprint and 32 bits
//!   of random jitter.
//!
//! ```
//! let token = sid::generate("user-");
//! let id = sid::Identifier::parse_with_prefix(&token, "user-").unwrap();
//! assert!(id.is_valid());
//! ```
//!
//! Construct a [`Generator`] directly to control the clock, the random
//! source, the host name used for fingerprinting or where diagnostics go.

mod base36;
mod block;
mod diagnostics;
mod error;
mod fingerprint;
mod generator;
mod host;
mod id;
mod rand;
mod time;

pub use crate::base36::*;
pub use crate::block::*;
pub use crate::diagnostics::*;
pub use crate::error::*;
pub use crate::fingerprint::{Fingerprint, FingerprintSource};
pub use crate::generator::*;
pub use crate::host::*;
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::time::*;

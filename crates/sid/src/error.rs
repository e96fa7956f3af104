/// A result type defaulting to the crate [`Error`].
///
/// Generation is infallible. Only parsing, decoding and hostname resolution
/// return errors, and hostname failures are absorbed by the generator itself.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `sid` can emit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A byte outside the base36 alphabet was found while decoding.
    #[error("invalid base36 byte {byte:#04x} at index {index}")]
    DecodeInvalidAscii {
        /// The offending byte.
        byte: u8,
        /// Its position in the decoded input.
        index: usize,
    },

    /// The decoded value does not fit in a `u64`.
    #[error("base36 value overflows u64")]
    DecodeOverflow,

    /// The input has the wrong length for what was being decoded.
    #[error("invalid length: {len}")]
    DecodeInvalidLen {
        /// Length of the rejected input.
        len: usize,
    },

    /// A token did not start with the expected prefix.
    #[error("token does not start with prefix {prefix:?}")]
    MissingPrefix {
        /// The prefix that was expected.
        prefix: String,
    },

    /// A decoded block violates its fixed layout (reserved or tag bits).
    #[error("{which} block has an invalid layout")]
    InvalidBlock {
        /// Either `"high"` or `"low"`.
        which: &'static str,
    },

    /// The host name could not be obtained for fingerprinting.
    #[error("hostname unavailable: {reason}")]
    HostnameUnavailable {
        /// Human readable cause.
        reason: String,
    },
}

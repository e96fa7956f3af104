use crate::{BLOCK_WIDTH, Error, HighBlock, ID_WIDTH, LowBlock, Result, decode_base36};
use core::{fmt, str::FromStr};

/// A generated identifier, without its prefix.
///
/// The textual form is `base36(high) ++ base36(low)`. Both blocks normally
/// render to [`BLOCK_WIDTH`] digits, so parsing splits the body in half.
///
/// Ordering compares the high block first (timestamp, then counter), which
/// makes identifiers roughly sortable by creation second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    high: HighBlock,
    low: LowBlock,
}

impl Identifier {
    pub const fn from_blocks(high: HighBlock, low: LowBlock) -> Self {
        Self { high, low }
    }

    pub const fn high(&self) -> HighBlock {
        self.high
    }

    pub const fn low(&self) -> LowBlock {
        self.low
    }

    /// Unix seconds (truncated to 32 bits) at generation time.
    pub const fn timestamp(&self) -> u32 {
        self.high.timestamp()
    }

    /// Low 16 bits of the generator counter.
    pub const fn counter(&self) -> u16 {
        self.high.counter()
    }

    /// Fingerprint bytes as embedded in the low block.
    pub const fn machine_bits(&self) -> [u8; 3] {
        self.low.machine_bits()
    }

    pub const fn jitter(&self) -> u32 {
        self.low.jitter()
    }

    /// Returns `true` if both blocks respect their fixed layout.
    pub const fn is_valid(&self) -> bool {
        self.high.is_valid() && self.low.is_valid()
    }

    /// Renders the body with each block padded to [`BLOCK_WIDTH`].
    pub fn to_padded_string(&self) -> String {
        let mut out = String::with_capacity(ID_WIDTH);
        out.push_str(&self.high.encode_padded());
        out.push_str(&self.low.encode_padded());
        out
    }

    /// Parses an identifier body (no prefix).
    ///
    /// # Errors
    ///
    /// - [`Error::DecodeInvalidLen`] unless the body is exactly [`ID_WIDTH`]
    ///   bytes
    /// - decoding errors from [`decode_base36`]
    /// - [`Error::InvalidBlock`] if a block violates its layout
    ///
    /// # Example
    /// ```
    /// use sid::Identifier;
    ///
    /// let id = Identifier::parse("x9altvz9xd3fjzc9105c").unwrap();
    /// assert_eq!(id.counter(), 1);
    /// assert_eq!(id.to_string(), "x9altvz9xd3fjzc9105c");
    /// ```
    pub fn parse(body: &str) -> Result<Self> {
        if body.len() != ID_WIDTH || !body.is_char_boundary(BLOCK_WIDTH) {
            return Err(Error::DecodeInvalidLen { len: body.len() });
        }
        let (high, low) = body.split_at(BLOCK_WIDTH);

        let high = HighBlock::from_u64(decode_base36(high)?);
        if !high.is_valid() {
            return Err(Error::InvalidBlock { which: "high" });
        }
        let low = LowBlock::from_u64(decode_base36(low)?);
        if !low.is_valid() {
            return Err(Error::InvalidBlock { which: "low" });
        }

        Ok(Self { high, low })
    }

    /// Strips `prefix` from `token` and parses the remainder.
    ///
    /// # Errors
    ///
    /// [`Error::MissingPrefix`] if `token` does not start with `prefix`, and
    /// otherwise the errors of [`Identifier::parse`].
    pub fn parse_with_prefix(token: &str, prefix: &str) -> Result<Self> {
        let body = token
            .strip_prefix(prefix)
            .ok_or_else(|| Error::MissingPrefix {
                prefix: prefix.to_owned(),
            })?;
        Self::parse(body)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.high.encode())?;
        f.write_str(&self.low.encode())
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Identifier;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Identifier {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Identifier {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            struct BodyVisitor;

            impl serde::de::Visitor<'_> for BodyVisitor {
                type Value = Identifier;

                fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                    formatter.write_str("a 20 character base36 identifier")
                }

                fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                where
                    E: serde::de::Error,
                {
                    Identifier::parse(v).map_err(serde::de::Error::custom)
                }
            }

            d.deserialize_str(BodyVisitor)
        }
    }
}

use crate::{Error, Result};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const NO_VALUE: u8 = 255;
const RADIX: u64 = 36;

/// Maximum number of base36 digits needed for a `u64` (`u64::MAX` is
/// `3w5e11264sgsf`).
pub const MAX_U64_DIGITS: usize = 13;

/// Lookup table for base36 decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    // Main alphabet, allow upper-case
    while i < 36 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_lowercase() {
            lut[(c - 32) as usize] = i; // uppercase letter
        }
        i += 1;
    }
    lut
};

/// Writes the digits of `value` right-aligned into `buf` and returns the index
/// of the first written digit.
fn write_digits(mut value: u64, buf: &mut [u8; MAX_U64_DIGITS]) -> usize {
    let mut start = MAX_U64_DIGITS;
    loop {
        start -= 1;
        buf[start] = ALPHABET[(value % RADIX) as usize];
        value /= RADIX;
        if value == 0 {
            return start;
        }
    }
}

/// Renders `value` in lowercase base36 without padding.
///
/// Zero renders as `"0"`.
///
/// # Example
/// ```
/// assert_eq!(sid::encode_base36(0), "0");
/// assert_eq!(sid::encode_base36(35), "z");
/// assert_eq!(sid::encode_base36(36), "10");
/// ```
pub fn encode_base36(value: u64) -> String {
    let mut buf = [0_u8; MAX_U64_DIGITS];
    let start = write_digits(value, &mut buf);
    buf[start..].iter().map(|&b| char::from(b)).collect()
}

/// Renders `value` in lowercase base36, left-padded with `'0'` to at least
/// `width` characters.
///
/// Values needing more than `width` digits are rendered in full.
///
/// # Example
/// ```
/// assert_eq!(sid::encode_base36_padded(36, 4), "0010");
/// ```
pub fn encode_base36_padded(value: u64, width: usize) -> String {
    let mut buf = [0_u8; MAX_U64_DIGITS];
    let start = write_digits(value, &mut buf);
    let digits = MAX_U64_DIGITS - start;

    let mut out = String::with_capacity(width.max(digits));
    out.extend(core::iter::repeat_n('0', width.saturating_sub(digits)));
    out.extend(buf[start..].iter().map(|&b| char::from(b)));
    out
}

/// Decodes a base36 string into a `u64`.
///
/// Both lowercase and uppercase digits are accepted. Leading zeros are
/// allowed, so padded and unpadded renderings decode to the same value.
///
/// # Errors
///
/// - [`Error::DecodeInvalidLen`] for empty input
/// - [`Error::DecodeInvalidAscii`] for a byte outside `[0-9a-zA-Z]`
/// - [`Error::DecodeOverflow`] if the value exceeds `u64::MAX`
pub fn decode_base36(encoded: &str) -> Result<u64> {
    if encoded.is_empty() {
        return Err(Error::DecodeInvalidLen { len: 0 });
    }

    let mut acc = 0_u64;
    for (index, byte) in encoded.bytes().enumerate() {
        let val = LOOKUP[byte as usize];
        if val == NO_VALUE {
            return Err(Error::DecodeInvalidAscii { byte, index });
        }
        acc = acc
            .checked_mul(RADIX)
            .and_then(|acc| acc.checked_add(u64::from(val)))
            .ok_or(Error::DecodeOverflow)?;
    }

    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_matches_known_renderings() {
        assert_eq!(encode_base36(0), "0");
        assert_eq!(encode_base36(1), "1");
        assert_eq!(encode_base36(35), "z");
        assert_eq!(encode_base36(36), "10");
        assert_eq!(encode_base36(u64::MAX), "3w5e11264sgsf");
        assert_eq!(encode_base36(36_u64.pow(10) - 1), "zzzzzzzzzz");
    }

    #[test]
    fn padded_encoding_fills_with_zeros() {
        assert_eq!(encode_base36_padded(0, 10), "0000000000");
        assert_eq!(encode_base36_padded(35, 3), "00z");
        // Never truncates.
        assert_eq!(encode_base36_padded(u64::MAX, 10), "3w5e11264sgsf");
    }

    #[test]
    fn encode_decode_preserves_u64_values() {
        for &v in &[
            0,
            1,
            u64::MAX,
            42,
            0xFF00_FF00_FF00_FF00,
            0x0C00_0000_0000_0001,
            0x0001_3D04_0000_0000,
        ] {
            let s = encode_base36(v);
            assert_eq!(decode_base36(&s).unwrap(), v, "roundtrip for {v}: {s}");
            assert_eq!(encode_base36(decode_base36(&s).unwrap()), s);
        }
    }

    #[test]
    fn decode_accepts_uppercase_and_leading_zeros() {
        assert_eq!(decode_base36("ZZ").unwrap(), decode_base36("zz").unwrap());
        assert_eq!(decode_base36("000010").unwrap(), 36);
    }

    #[test]
    fn decode_rejects_invalid_character() {
        assert_eq!(
            decode_base36("abc-d").unwrap_err(),
            Error::DecodeInvalidAscii {
                byte: b'-',
                index: 3
            }
        );
    }

    #[test]
    fn decode_rejects_overflow_and_empty() {
        assert_eq!(decode_base36("3w5e11264sgsg"), Err(Error::DecodeOverflow));
        assert_eq!(decode_base36("zzzzzzzzzzzzzz"), Err(Error::DecodeOverflow));
        assert_eq!(decode_base36(""), Err(Error::DecodeInvalidLen { len: 0 }));
    }
}

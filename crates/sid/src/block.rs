//! Fixed 8-byte halves of an identifier.
//!
//! Both blocks are packed big-endian and read as a `u64` before rendering.
//!
//! ```text
//! HighBlock
//! byte  0      1      2    3    4    5      6    7
//!      +------+------+-------------------+-----------+
//!      | 0x00 | 0x0C | unix seconds (BE) | counter   |
//!      +------+------+-------------------+-----------+
//!                                          low 16 bits
//! LowBlock
//! byte  0      1        2      3      4    5    6    7
//!      +------+--------+------+------+-------------------+
//!      | 0x00 | fp0&7  | fp1  | fp2  | jitter (BE)       |
//!      +------+--------+------+------+-------------------+
//! ```
//!
//! The tag byte keeps a high block in `[36^9, 36^10)` until the 32-bit
//! timestamp reaches 2104, and the fingerprint tag keeps the machine byte of a
//! low block non-zero, so both normally render to exactly ten digits.

use crate::{BLOCK_WIDTH, Fingerprint, encode_base36, encode_base36_padded};
use crate::fingerprint::MACHINE_BITS_MASK;

/// Fixed tag in byte 1 of every high block.
pub const HIGH_TAG: u8 = 0b1100;

/// Timestamp and counter half of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HighBlock([u8; 8]);

impl HighBlock {
    /// Packs a block from the Unix seconds and the post-increment counter.
    /// Only the low 16 bits of `counter` are stored.
    pub const fn new(timestamp: u32, counter: u32) -> Self {
        let ts = timestamp.to_be_bytes();
        let seq = (counter as u16).to_be_bytes();
        Self([0, HIGH_TAG, ts[0], ts[1], ts[2], ts[3], seq[0], seq[1]])
    }

    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0
    }

    pub const fn from_u64(raw: u64) -> Self {
        Self(raw.to_be_bytes())
    }

    pub const fn to_u64(self) -> u64 {
        u64::from_be_bytes(self.0)
    }

    /// Unix seconds (truncated to 32 bits) at generation time.
    pub const fn timestamp(self) -> u32 {
        u32::from_be_bytes([self.0[2], self.0[3], self.0[4], self.0[5]])
    }

    /// Low 16 bits of the counter value used for this block.
    pub const fn counter(self) -> u16 {
        u16::from_be_bytes([self.0[6], self.0[7]])
    }

    /// Returns `true` if the reserved byte is zero and the tag byte matches.
    pub const fn is_valid(self) -> bool {
        self.0[0] == 0 && self.0[1] == HIGH_TAG
    }

    /// Unpadded lowercase base36 rendering.
    pub fn encode(self) -> String {
        encode_base36(self.to_u64())
    }

    /// Rendering left-padded to [`BLOCK_WIDTH`].
    pub fn encode_padded(self) -> String {
        encode_base36_padded(self.to_u64(), BLOCK_WIDTH)
    }
}

/// Fingerprint and jitter half of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LowBlock([u8; 8]);

impl LowBlock {
    pub const fn new(fingerprint: Fingerprint, jitter: u32) -> Self {
        let fp = fingerprint.machine_bits();
        let j = jitter.to_be_bytes();
        Self([0, fp[0], fp[1], fp[2], j[0], j[1], j[2], j[3]])
    }

    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0
    }

    pub const fn from_u64(raw: u64) -> Self {
        Self(raw.to_be_bytes())
    }

    pub const fn to_u64(self) -> u64 {
        u64::from_be_bytes(self.0)
    }

    /// The fingerprint bytes as stored: first byte reduced to three bits.
    pub const fn machine_bits(self) -> [u8; 3] {
        [self.0[1], self.0[2], self.0[3]]
    }

    pub const fn jitter(self) -> u32 {
        u32::from_be_bytes([self.0[4], self.0[5], self.0[6], self.0[7]])
    }

    /// Returns `true` if the reserved byte is zero and the machine byte fits
    /// in three bits.
    pub const fn is_valid(self) -> bool {
        self.0[0] == 0 && self.0[1] & !MACHINE_BITS_MASK == 0
    }

    /// Unpadded lowercase base36 rendering.
    pub fn encode(self) -> String {
        encode_base36(self.to_u64())
    }

    /// Rendering left-padded to [`BLOCK_WIDTH`].
    pub fn encode_padded(self) -> String {
        encode_base36_padded(self.to_u64(), BLOCK_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_block_layout() {
        let block = HighBlock::new(0x6553_F100, 0x1234_ABCD);
        assert_eq!(
            block.to_be_bytes(),
            [0x00, 0x0C, 0x65, 0x53, 0xF1, 0x00, 0xAB, 0xCD]
        );
        assert_eq!(block.timestamp(), 0x6553_F100);
        assert_eq!(block.counter(), 0xABCD);
        assert!(block.is_valid());
        assert_eq!(HighBlock::from_u64(block.to_u64()), block);
    }

    #[test]
    fn low_block_layout() {
        let fp = Fingerprint::from_bytes([0x19, 0x3d, 0x04]);
        let block = LowBlock::new(fp, 0xDEAD_BEEF);
        assert_eq!(
            block.to_be_bytes(),
            [0x00, 0x01, 0x3d, 0x04, 0xDE, 0xAD, 0xBE, 0xEF]
        );
        assert_eq!(block.machine_bits(), fp.machine_bits());
        assert_eq!(block.jitter(), 0xDEAD_BEEF);
        assert!(block.is_valid());
    }

    #[test]
    fn invalid_layouts_are_detected() {
        assert!(!HighBlock::from_u64(u64::MAX).is_valid());
        assert!(!HighBlock::from_be_bytes([0, 0x0D, 0, 0, 0, 0, 0, 0]).is_valid());
        assert!(!LowBlock::from_be_bytes([0, 0x08, 0, 0, 0, 0, 0, 0]).is_valid());
        assert!(!LowBlock::from_be_bytes([1, 0, 0, 0, 0, 0, 0, 0]).is_valid());
    }

    #[test]
    fn blocks_render_ten_digits() {
        let high = HighBlock::new(0, 1);
        assert_eq!(high.encode(), "x9altvz9xd");

        let low = LowBlock::new(Fingerprint::from_bytes([0x19, 0x3d, 0x04]), 0);
        assert_eq!(low.encode(), "3fjzc9105c");

        // A zeroed low block renders short unpadded, full width padded.
        let short = LowBlock::from_u64(35);
        assert_eq!(short.encode(), "z");
        assert_eq!(short.encode_padded(), "000000000z");
    }
}

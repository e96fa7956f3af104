mod codec;

pub use codec::*;

/// Rendered width of one block when it carries no leading zero digits.
pub const BLOCK_WIDTH: usize = 10;

/// Rendered width of a full identifier body (high block + low block).
pub const ID_WIDTH: usize = BLOCK_WIDTH * 2;

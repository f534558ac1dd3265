//! constants.rs
//! Wire constants and decode defaults shared by every OBI rule.

/// Size of the little-endian length/count prefix in front of text, byte
/// buffers and sequences.
pub const LEN_PREFIX_SIZE: usize = 4;

/// Largest payload length (bytes or element count) a prefix can describe.
pub const MAX_PAYLOAD_LEN: usize = u32::MAX as usize;

/// Default nesting bound for dynamic shapes (sequence/record levels).
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default cap on the count of a sequence whose elements encode to zero
/// bytes. Such counts are not backed by input, so they need their own bound.
pub const DEFAULT_MAX_ZERO_WIDTH_COUNT: usize = 1 << 16;

/// Integer width identifiers in bits, as they appear in schema text.
pub mod int_bits {
    pub const W8: u8  = 8;
    pub const W16: u8 = 16;
    pub const W32: u8 = 32;
    pub const W64: u8 = 64;
}

/// Schema keywords for the non-integer leaf shapes.
pub mod keywords {
    pub const TEXT: &str  = "string";
    pub const BYTES: &str = "bytes";
}

//! types.rs
//! Unified codec error and decode configuration.
//!
//! Notes:
//! - One error type covers cursor, rule, schema and dynamic-value failures so
//!   `?` works across every layer.
//! - Messages aim to be stable for logs and CLI output.

use thiserror::Error;

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_ZERO_WIDTH_COUNT};

/// Codec failure, returned at the point of detection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Cursor exhausted before a rule consumed its required bytes.
    #[error("unexpected end of input: need {need} bytes, {have} remaining")]
    UnexpectedEndOfInput { need: usize, have: usize },

    /// Shape kind the codec has no rule for.
    #[error("unsupported shape: {0}")]
    UnsupportedShape(String),

    /// Payload bytes present but invalid for the shape.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Strict top-level decode finished with unread input.
    #[error("not all data was consumed: {remaining} trailing bytes")]
    TrailingBytes { remaining: usize },

    /// Dynamic shape nests deeper than the configured bound.
    #[error("shape depth {depth} exceeds limit {max}")]
    DepthExceeded { depth: usize, max: usize },

    /// Sequence of zero-width elements claims more items than allowed.
    #[error("sequence of {count} zero-width elements exceeds limit {max}")]
    TooManyElements { count: usize, max: usize },

    /// Dynamic value does not fit the shape it is encoded against.
    #[error("value does not match shape: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },

    /// Payload too long for the 4-byte length prefix.
    #[error("length {len} does not fit the 4-byte prefix")]
    LengthOverflow { len: usize },

    /// Malformed schema text.
    #[error("invalid schema at offset {pos}: {reason}")]
    InvalidSchema { pos: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    pub(crate) fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        CodecError::ShapeMismatch { expected: expected.into(), found: found.into() }
    }

    /// True for failures caused by running out of input.
    pub fn is_truncation(&self) -> bool {
        matches!(self, CodecError::UnexpectedEndOfInput { .. })
    }
}

/// Render a byte slice for diagnostics: printable ASCII as a literal,
/// anything else as hex.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Top-level decode configuration.
///
/// - `max_depth` bounds dynamic shapes (typed decoding is bounded by the
///   Rust type itself).
/// - `allow_trailing` accepts input with unread bytes after the value.
/// - `max_zero_width_count` caps dynamic sequences of zero-width elements,
///   whose count consumes no input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub max_depth: usize,
    pub allow_trailing: bool,
    pub max_zero_width_count: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing: false,
            max_zero_width_count: DEFAULT_MAX_ZERO_WIDTH_COUNT,
        }
    }
}

impl DecodeOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_trailing(mut self, allow: bool) -> Self {
        self.allow_trailing = allow;
        self
    }

    pub fn with_max_zero_width_count(mut self, max: usize) -> Self {
        self.max_zero_width_count = max;
        self
    }
}

//! codec/decode.rs
//! Top-level decode entry points.
//!
//! Design notes:
//! - A cursor is created per call and discarded when it returns.
//! - The destination is only written once the whole value decoded, so a
//!   failed decode leaves it untouched.
//! - Unread input after the value is rejected unless
//!   `DecodeOptions::allow_trailing` is set. Nested values never require
//!   full consumption.

use tracing::{debug, trace};

use crate::codec::types::ObiDecode;
use crate::cursor::ReadCursor;
use crate::types::{CodecError, DecodeOptions, Result};

/// Decode into `dest` with explicit options.
pub fn decode_with<T: ObiDecode>(bytes: &[u8], dest: &mut T, opts: &DecodeOptions) -> Result<()> {
    *dest = decode_value_with(bytes, opts)?;
    Ok(())
}

/// Decode into `dest` with default (strict) options.
pub fn decode_into<T: ObiDecode>(bytes: &[u8], dest: &mut T) -> Result<()> {
    decode_with(bytes, dest, &DecodeOptions::default())
}

/// Decode a fresh value with default (strict) options.
pub fn decode<T: ObiDecode>(bytes: &[u8]) -> Result<T> {
    decode_value_with(bytes, &DecodeOptions::default())
}

/// Decode into `dest`, treating malformed input as a programming error.
///
/// # Panics
/// On any decode error.
pub fn must_decode<T: ObiDecode>(bytes: &[u8], dest: &mut T) {
    if let Err(e) = decode_into(bytes, dest) {
        panic!("obi: decode failed: {}", e);
    }
}

fn decode_value_with<T: ObiDecode>(bytes: &[u8], opts: &DecodeOptions) -> Result<T> {
    let mut r = ReadCursor::new(bytes);
    let value = T::decode_from(&mut r).map_err(|e| {
        debug!(error = %e, position = r.position(), len = bytes.len(), "obi: decode failed");
        e
    })?;
    finish(&r, opts)?;
    trace!(len = bytes.len(), "obi: decoded value");
    Ok(value)
}

/// Enforce full consumption at the top level.
pub(crate) fn finish(r: &ReadCursor<'_>, opts: &DecodeOptions) -> Result<()> {
    if !opts.allow_trailing && !r.is_empty() {
        let remaining = r.remaining();
        debug!(remaining, "obi: trailing bytes after value");
        return Err(CodecError::TrailingBytes { remaining });
    }
    Ok(())
}

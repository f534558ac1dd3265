//! codec/encode.rs
//! Top-level encode entry points.
//!
//! Design notes:
//! - Output carries no tags, magic or version; the reader must already know
//!   the shape.
//! - The only failure is a payload longer than the 4-byte prefix allows.

use tracing::trace;

use crate::codec::types::ObiEncode;
use crate::cursor::WriteCursor;
use crate::types::Result;

/// Serialize `value` into a fresh buffer.
pub fn encode<T: ObiEncode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut w = WriteCursor::new();
    value.encode_to(&mut w)?;
    trace!(len = w.len(), "obi: encoded value");
    Ok(w.into_bytes())
}

/// Append the encoding of `value` to an existing cursor.
pub fn encode_into<T: ObiEncode + ?Sized>(value: &T, out: &mut WriteCursor) -> Result<()> {
    value.encode_to(out)
}

/// Like [`encode`], for values known to fit the format.
///
/// # Panics
/// If a text, byte buffer or sequence is longer than `u32::MAX`.
pub fn must_encode<T: ObiEncode + ?Sized>(value: &T) -> Vec<u8> {
    match encode(value) {
        Ok(bytes) => bytes,
        Err(e) => panic!("obi: encode failed: {}", e),
    }
}

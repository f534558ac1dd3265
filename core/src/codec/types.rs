//! codec/types.rs
//! Traits that bind a Rust type to its OBI shape and wire rules.
//!
//! Dispatch is resolved at compile time: each type knows its own rule, and
//! records/aliases get theirs from `impl_obi_record!` / `impl_obi_alias!`.

use crate::cursor::{ReadCursor, WriteCursor};
use crate::shape::Shape;
use crate::types::Result;

/// Reports the shape a type encodes as.
pub trait ObiSchema {
    fn shape() -> Shape;
}

/// Appends the canonical encoding of `self`.
pub trait ObiEncode {
    fn encode_to(&self, w: &mut WriteCursor) -> Result<()>;
}

/// Reconstructs a value from the cursor.
pub trait ObiDecode: Sized {
    /// Fewest bytes any encoding of `Self` occupies. Bounds sequence
    /// pre-allocation against the remaining input.
    const MIN_LEN: usize = 0;

    fn decode_from(r: &mut ReadCursor<'_>) -> Result<Self>;
}

impl<T: ObiEncode + ?Sized> ObiEncode for &T {
    #[inline]
    fn encode_to(&self, w: &mut WriteCursor) -> Result<()> {
        (**self).encode_to(w)
    }
}

impl<T: ObiSchema + ?Sized> ObiSchema for &T {
    fn shape() -> Shape {
        T::shape()
    }
}

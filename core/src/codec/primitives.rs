//! codec/primitives.rs
//! Rules for the built-in types.
//!
//! | Rust type                 | Wire                                   |
//! |---------------------------|----------------------------------------|
//! | `u8..u64`, `i8..i64`      | width/8 bytes, little-endian           |
//! | `String`, `str`           | u32 LE byte length + UTF-8 bytes       |
//! | `bytes::Bytes`            | u32 LE length + raw bytes              |
//! | `Vec<T>`, `[T]`           | u32 LE count + concatenated elements   |
//!
//! `Vec<u8>` goes through the sequence rule, which yields exactly the same
//! bytes as the byte-buffer rule.

use bytes::Bytes;

use crate::codec::types::{ObiDecode, ObiEncode, ObiSchema};
use crate::constants::LEN_PREFIX_SIZE;
use crate::cursor::{ReadCursor, WriteCursor};
use crate::shape::{IntKind, Shape};
use crate::types::{fmt_bytes, CodecError, Result};

macro_rules! impl_int {
    ($($t:ty => $kind:ident, $read:ident, $write:ident;)*) => {$(
        impl ObiSchema for $t {
            fn shape() -> Shape {
                Shape::Int(IntKind::$kind)
            }
        }

        impl ObiEncode for $t {
            #[inline]
            fn encode_to(&self, w: &mut WriteCursor) -> Result<()> {
                w.$write(*self);
                Ok(())
            }
        }

        impl ObiDecode for $t {
            const MIN_LEN: usize = std::mem::size_of::<$t>();

            #[inline]
            fn decode_from(r: &mut ReadCursor<'_>) -> Result<Self> {
                r.$read()
            }
        }
    )*};
}

impl_int! {
    u8  => U8,  read_u8,  write_u8;
    u16 => U16, read_u16, write_u16;
    u32 => U32, read_u32, write_u32;
    u64 => U64, read_u64, write_u64;
    i8  => I8,  read_i8,  write_i8;
    i16 => I16, read_i16, write_i16;
    i32 => I32, read_i32, write_i32;
    i64 => I64, read_i64, write_i64;
}

/// Validate a text payload.
pub(crate) fn text_from_utf8(raw: &[u8]) -> Result<String> {
    match std::str::from_utf8(raw) {
        Ok(s) => Ok(s.to_owned()),
        Err(e) => {
            let start = e.valid_up_to();
            let end = raw.len().min(start + 8);
            Err(CodecError::InvalidEncoding(format!(
                "text is not valid UTF-8 at byte {}: {}",
                start,
                fmt_bytes(&raw[start..end])
            )))
        }
    }
}

// Text

impl ObiSchema for str {
    fn shape() -> Shape {
        Shape::Text
    }
}

impl ObiEncode for str {
    fn encode_to(&self, w: &mut WriteCursor) -> Result<()> {
        w.write_prefixed(self.as_bytes())
    }
}

impl ObiSchema for String {
    fn shape() -> Shape {
        Shape::Text
    }
}

impl ObiEncode for String {
    fn encode_to(&self, w: &mut WriteCursor) -> Result<()> {
        self.as_str().encode_to(w)
    }
}

impl ObiDecode for String {
    const MIN_LEN: usize = LEN_PREFIX_SIZE;

    fn decode_from(r: &mut ReadCursor<'_>) -> Result<Self> {
        text_from_utf8(r.read_prefixed()?)
    }
}

// Byte buffer

impl ObiSchema for Bytes {
    fn shape() -> Shape {
        Shape::Bytes
    }
}

impl ObiEncode for Bytes {
    fn encode_to(&self, w: &mut WriteCursor) -> Result<()> {
        w.write_prefixed(self)
    }
}

impl ObiDecode for Bytes {
    const MIN_LEN: usize = LEN_PREFIX_SIZE;

    fn decode_from(r: &mut ReadCursor<'_>) -> Result<Self> {
        Ok(Bytes::copy_from_slice(r.read_prefixed()?))
    }
}

// Sequences

impl<T: ObiSchema> ObiSchema for [T] {
    fn shape() -> Shape {
        Shape::sequence(T::shape())
    }
}

impl<T: ObiEncode> ObiEncode for [T] {
    fn encode_to(&self, w: &mut WriteCursor) -> Result<()> {
        w.write_len(self.len())?;
        for item in self {
            item.encode_to(w)?;
        }
        Ok(())
    }
}

impl<T: ObiSchema> ObiSchema for Vec<T> {
    fn shape() -> Shape {
        Shape::sequence(T::shape())
    }
}

impl<T: ObiEncode> ObiEncode for Vec<T> {
    fn encode_to(&self, w: &mut WriteCursor) -> Result<()> {
        self.as_slice().encode_to(w)
    }
}

impl<T: ObiDecode> ObiDecode for Vec<T> {
    const MIN_LEN: usize = LEN_PREFIX_SIZE;

    fn decode_from(r: &mut ReadCursor<'_>) -> Result<Self> {
        let count = r.read_len()?;
        let mut out = Vec::with_capacity(r.capacity_hint(count, T::MIN_LEN));
        for _ in 0..count {
            out.push(T::decode_from(r)?);
        }
        Ok(out)
    }
}

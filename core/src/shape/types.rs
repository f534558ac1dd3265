//! shape/types.rs
//! Structural description of an OBI value.
//!
//! Notes:
//! - Closed set of kinds: fixed-width integer, text, bytes, sequence, record.
//! - Records carry their fields in declared order; order is the only
//!   structural information on the wire.
//! - Serializes to JSON as `{"kind": ..}` objects for out-of-band exchange.

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::{int_bits, LEN_PREFIX_SIZE};
use crate::types::{CodecError, Result};

/// Integer width in bits.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum IntWidth {
    W8  = int_bits::W8,
    W16 = int_bits::W16,
    W32 = int_bits::W32,
    W64 = int_bits::W64,
}

impl IntWidth {
    /// Width in bits from a raw number; anything but 8/16/32/64 is an
    /// unsupported shape.
    pub fn from_bits(bits: u32) -> Result<Self> {
        u8::try_from(bits)
            .ok()
            .and_then(|b| IntWidth::try_from_primitive(b).ok())
            .ok_or_else(|| CodecError::UnsupportedShape(format!("{}-bit integer", bits)))
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Encoded size in bytes.
    #[inline]
    pub const fn size(self) -> usize {
        (self as u8 / 8) as usize
    }
}

impl From<IntWidth> for u8 {
    fn from(w: IntWidth) -> u8 {
        w as u8
    }
}

/// Fixed-width integer kind: width plus signedness.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntKind {
    pub width: IntWidth,
    pub signed: bool,
}

impl IntKind {
    pub const U8: IntKind  = IntKind { width: IntWidth::W8,  signed: false };
    pub const U16: IntKind = IntKind { width: IntWidth::W16, signed: false };
    pub const U32: IntKind = IntKind { width: IntWidth::W32, signed: false };
    pub const U64: IntKind = IntKind { width: IntWidth::W64, signed: false };
    pub const I8: IntKind  = IntKind { width: IntWidth::W8,  signed: true };
    pub const I16: IntKind = IntKind { width: IntWidth::W16, signed: true };
    pub const I32: IntKind = IntKind { width: IntWidth::W32, signed: true };
    pub const I64: IntKind = IntKind { width: IntWidth::W64, signed: true };

    /// Schema spelling, e.g. `u8`, `i64`.
    pub fn name(self) -> String {
        format!("{}{}", if self.signed { 'i' } else { 'u' }, self.width.bits())
    }
}

/// Named record field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub shape: Shape,
}

impl Field {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self { name: name.into(), shape }
    }
}

/// What is being encoded or decoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Int(IntKind),
    Text,
    Bytes,
    Sequence { element: Box<Shape> },
    Record { fields: Vec<Field> },
}

impl Shape {
    pub fn int(kind: IntKind) -> Self {
        Shape::Int(kind)
    }

    pub fn sequence(element: Shape) -> Self {
        Shape::Sequence { element: Box::new(element) }
    }

    pub fn record(fields: Vec<Field>) -> Self {
        Shape::Record { fields }
    }

    /// Short kind label used in mismatch errors.
    pub fn kind_name(&self) -> String {
        match self {
            Shape::Int(k) => k.name(),
            Shape::Text => "string".into(),
            Shape::Bytes => "bytes".into(),
            Shape::Sequence { .. } => "sequence".into(),
            Shape::Record { .. } => "record".into(),
        }
    }

    /// Nesting depth: leaves are 0, each sequence/record level adds 1.
    pub fn depth(&self) -> usize {
        match self {
            Shape::Int(_) | Shape::Text | Shape::Bytes => 0,
            Shape::Sequence { element } => 1 + element.depth(),
            Shape::Record { fields } => {
                1 + fields.iter().map(|f| f.shape.depth()).max().unwrap_or(0)
            }
        }
    }

    /// Fails with `DepthExceeded` when the shape nests deeper than `max`.
    pub fn check_depth(&self, max: usize) -> Result<()> {
        let depth = self.depth();
        if depth > max {
            return Err(CodecError::DepthExceeded { depth, max });
        }
        Ok(())
    }

    /// Encoded size when it does not depend on the value.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            Shape::Int(k) => Some(k.width.size()),
            Shape::Text | Shape::Bytes | Shape::Sequence { .. } => None,
            Shape::Record { fields } => fields
                .iter()
                .map(|f| f.shape.fixed_size())
                .sum(),
        }
    }

    /// Smallest number of bytes any value of this shape occupies.
    pub fn min_size(&self) -> usize {
        match self {
            Shape::Int(k) => k.width.size(),
            Shape::Text | Shape::Bytes | Shape::Sequence { .. } => LEN_PREFIX_SIZE,
            Shape::Record { fields } => fields.iter().map(|f| f.shape.min_size()).sum(),
        }
    }
}

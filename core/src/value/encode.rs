//! value/encode.rs
//! Shape-driven encoder for dynamic values.
//!
//! Walks shape and value together; any disagreement between them is a
//! `ShapeMismatch`, including record field names and count.

use crate::constants::DEFAULT_MAX_DEPTH;
use crate::cursor::WriteCursor;
use crate::shape::{IntKind, Shape};
use crate::types::{CodecError, Result};
use crate::value::types::Value;

/// Encode `value` as `shape` into a fresh buffer, with the default depth
/// bound.
pub fn encode_value(value: &Value, shape: &Shape) -> Result<Vec<u8>> {
    encode_value_with(value, shape, DEFAULT_MAX_DEPTH)
}

/// Encode `value` as `shape`, accepting shapes up to `max_depth` levels.
pub fn encode_value_with(value: &Value, shape: &Shape, max_depth: usize) -> Result<Vec<u8>> {
    let mut w = WriteCursor::new();
    encode_value_to(&mut w, value, shape, max_depth)?;
    tracing::trace!(len = w.len(), shape = %shape, "obi: encoded dynamic value");
    Ok(w.into_bytes())
}

/// Append the encoding of `value` as `shape`.
pub fn encode_value_to(w: &mut WriteCursor, value: &Value, shape: &Shape, max_depth: usize) -> Result<()> {
    shape.check_depth(max_depth)?;
    write_value(w, value, shape)
}

fn write_value(w: &mut WriteCursor, value: &Value, shape: &Shape) -> Result<()> {
    match (shape, value) {
        (Shape::Int(kind), v) => write_int(w, *kind, v),
        (Shape::Text, Value::Text(s)) => w.write_prefixed(s.as_bytes()),
        (Shape::Bytes, Value::Bytes(b)) => w.write_prefixed(b),
        (Shape::Sequence { element }, Value::Sequence(items)) => {
            w.write_len(items.len())?;
            for item in items {
                write_value(w, item, element)?;
            }
            Ok(())
        }
        (Shape::Record { fields }, Value::Record(values)) => {
            if fields.len() != values.len() {
                return Err(CodecError::mismatch(
                    format!("{} fields", fields.len()),
                    format!("{} fields", values.len()),
                ));
            }
            for (field, (name, v)) in fields.iter().zip(values) {
                if field.name != *name {
                    return Err(CodecError::mismatch(
                        format!("field '{}'", field.name),
                        format!("field '{}'", name),
                    ));
                }
                write_value(w, v, &field.shape)?;
            }
            Ok(())
        }
        (shape, value) => Err(CodecError::mismatch(shape.kind_name(), value.kind_name())),
    }
}

fn write_int(w: &mut WriteCursor, kind: IntKind, value: &Value) -> Result<()> {
    match (kind, value) {
        (IntKind::U8, Value::U8(v)) => w.write_u8(*v),
        (IntKind::U16, Value::U16(v)) => w.write_u16(*v),
        (IntKind::U32, Value::U32(v)) => w.write_u32(*v),
        (IntKind::U64, Value::U64(v)) => w.write_u64(*v),
        (IntKind::I8, Value::I8(v)) => w.write_i8(*v),
        (IntKind::I16, Value::I16(v)) => w.write_i16(*v),
        (IntKind::I32, Value::I32(v)) => w.write_i32(*v),
        (IntKind::I64, Value::I64(v)) => w.write_i64(*v),
        _ => return Err(CodecError::mismatch(kind.name(), value.kind_name())),
    }
    Ok(())
}

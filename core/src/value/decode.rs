//! value/decode.rs
//! Shape-driven decoder producing dynamic values.
//!
//! Design notes:
//! - The shape is validated before any input is read: depth is bounded by
//!   `DecodeOptions::max_depth`, so recursion is bounded too.
//! - A sequence of zero-width elements decodes one element and repeats it;
//!   a non-zero count above `DecodeOptions::max_zero_width_count` fails.
//! - Sequence pre-allocation is clamped to what the remaining input holds.

use tracing::{debug, trace};

use crate::codec::decode::finish;
use crate::codec::primitives::text_from_utf8;
use crate::cursor::ReadCursor;
use crate::shape::{IntKind, IntWidth, Shape};
use crate::types::{CodecError, DecodeOptions, Result};
use crate::value::types::Value;

/// Decode `bytes` as `shape`.
pub fn decode_value(bytes: &[u8], shape: &Shape, opts: &DecodeOptions) -> Result<Value> {
    shape.check_depth(opts.max_depth)?;

    let mut r = ReadCursor::new(bytes);
    let value = read_value(&mut r, shape, opts).map_err(|e| {
        debug!(error = %e, position = r.position(), shape = %shape, "obi: dynamic decode failed");
        e
    })?;
    finish(&r, opts)?;
    trace!(len = bytes.len(), shape = %shape, "obi: decoded dynamic value");
    Ok(value)
}

/// Decode one value of `shape` from a caller-owned cursor. Does not require
/// the cursor to be exhausted afterwards, whatever `allow_trailing` says.
pub fn decode_value_from(r: &mut ReadCursor<'_>, shape: &Shape, opts: &DecodeOptions) -> Result<Value> {
    shape.check_depth(opts.max_depth)?;
    read_value(r, shape, opts)
}

fn read_value(r: &mut ReadCursor<'_>, shape: &Shape, opts: &DecodeOptions) -> Result<Value> {
    match shape {
        Shape::Int(kind) => read_int(r, *kind),
        Shape::Text => text_from_utf8(r.read_prefixed()?).map(Value::Text),
        Shape::Bytes => Ok(Value::Bytes(r.read_prefixed()?.to_vec())),
        Shape::Sequence { element } => read_sequence(r, element, opts),
        Shape::Record { fields } => {
            let mut values = Vec::with_capacity(fields.len());
            for field in fields {
                values.push((field.name.clone(), read_value(r, &field.shape, opts)?));
            }
            Ok(Value::Record(values))
        }
    }
}

fn read_sequence(r: &mut ReadCursor<'_>, element: &Shape, opts: &DecodeOptions) -> Result<Value> {
    let count = r.read_len()?;
    if count == 0 {
        return Ok(Value::Sequence(Vec::new()));
    }

    let min = element.min_size();
    if min == 0 {
        // Zero-width elements consume nothing, so every item is identical.
        if count > opts.max_zero_width_count {
            return Err(CodecError::TooManyElements { count, max: opts.max_zero_width_count });
        }
        let item = read_value(r, element, opts)?;
        return Ok(Value::Sequence(vec![item; count]));
    }

    let mut items = Vec::with_capacity(r.capacity_hint(count, min));
    for _ in 0..count {
        items.push(read_value(r, element, opts)?);
    }
    Ok(Value::Sequence(items))
}

fn read_int(r: &mut ReadCursor<'_>, kind: IntKind) -> Result<Value> {
    Ok(match (kind.width, kind.signed) {
        (IntWidth::W8, false) => Value::U8(r.read_u8()?),
        (IntWidth::W16, false) => Value::U16(r.read_u16()?),
        (IntWidth::W32, false) => Value::U32(r.read_u32()?),
        (IntWidth::W64, false) => Value::U64(r.read_u64()?),
        (IntWidth::W8, true) => Value::I8(r.read_i8()?),
        (IntWidth::W16, true) => Value::I16(r.read_i16()?),
        (IntWidth::W32, true) => Value::I32(r.read_i32()?),
        (IntWidth::W64, true) => Value::I64(r.read_i64()?),
    })
}

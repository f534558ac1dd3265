//! value/types.rs
//! Dynamic OBI value tree and its JSON bridge.
//!
//! Notes:
//! - One variant per integer kind keeps width and signedness explicit.
//! - Records keep declared order as an ordered list of `(name, value)`.
//! - JSON conversion is shape-directed: JSON carries no widths, so the
//!   target shape decides how each node is read.

use serde_json::{Map, Number, Value as Json};

use crate::constants::DEFAULT_MAX_DEPTH;
use crate::shape::{IntKind, IntWidth, Shape};
use crate::types::{CodecError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Text(String),
    Bytes(Vec<u8>),
    Sequence(Vec<Value>),
    Record(Vec<(String, Value)>),
}

macro_rules! value_from {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::$variant(v)
            }
        }
    )*};
}

value_from! {
    u8 => U8, u16 => U16, u32 => U32, u64 => U64,
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
    String => Text, Vec<u8> => Bytes,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl Value {
    /// Record from `(name, value)` pairs in declared order.
    pub fn record<N: Into<String>>(fields: impl IntoIterator<Item = (N, Value)>) -> Self {
        Value::Record(fields.into_iter().map(|(n, v)| (n.into(), v)).collect())
    }

    /// Label used in mismatch errors.
    pub fn kind_name(&self) -> String {
        match self {
            Value::U8(_) => "u8".into(),
            Value::U16(_) => "u16".into(),
            Value::U32(_) => "u32".into(),
            Value::U64(_) => "u64".into(),
            Value::I8(_) => "i8".into(),
            Value::I16(_) => "i16".into(),
            Value::I32(_) => "i32".into(),
            Value::I64(_) => "i64".into(),
            Value::Text(_) => "string".into(),
            Value::Bytes(_) => "bytes".into(),
            Value::Sequence(_) => "sequence".into(),
            Value::Record(_) => "record".into(),
        }
    }

    /// Record field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Integer payload widened to `i128`, for comparisons across kinds.
    pub fn as_i128(&self) -> Option<i128> {
        Some(match *self {
            Value::U8(v) => v.into(),
            Value::U16(v) => v.into(),
            Value::U32(v) => v.into(),
            Value::U64(v) => v.into(),
            Value::I8(v) => v.into(),
            Value::I16(v) => v.into(),
            Value::I32(v) => v.into(),
            Value::I64(v) => v.into(),
            _ => return None,
        })
    }

    /// JSON view: integers as numbers, bytes as `0x` hex, records as
    /// objects in declared order.
    pub fn to_json(&self) -> Json {
        match self {
            Value::U8(v) => Json::from(*v),
            Value::U16(v) => Json::from(*v),
            Value::U32(v) => Json::from(*v),
            Value::U64(v) => Json::from(*v),
            Value::I8(v) => Json::from(*v),
            Value::I16(v) => Json::from(*v),
            Value::I32(v) => Json::from(*v),
            Value::I64(v) => Json::from(*v),
            Value::Text(s) => Json::String(s.clone()),
            Value::Bytes(b) => Json::String(format!("0x{}", hex::encode(b))),
            Value::Sequence(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Record(fields) => {
                let mut map = Map::with_capacity(fields.len());
                for (name, v) in fields {
                    map.insert(name.clone(), v.to_json());
                }
                Json::Object(map)
            }
        }
    }

    /// Build a value of `shape` from JSON.
    ///
    /// Integers accept JSON numbers or decimal strings; bytes accept hex
    /// strings (with or without `0x`) or arrays of numbers; records need
    /// exactly the shape's field names.
    pub fn from_json(json: &Json, shape: &Shape) -> Result<Value> {
        Self::from_json_with_depth(json, shape, DEFAULT_MAX_DEPTH)
    }

    /// [`Value::from_json`] for shapes up to `max_depth` levels.
    pub fn from_json_with_depth(json: &Json, shape: &Shape, max_depth: usize) -> Result<Value> {
        shape.check_depth(max_depth)?;
        from_json_inner(json, shape)
    }
}

fn json_kind(json: &Json) -> String {
    match json {
        Json::Null => "null".into(),
        Json::Bool(_) => "bool".into(),
        Json::Number(n) => format!("number {}", n),
        Json::String(_) => "string".into(),
        Json::Array(_) => "array".into(),
        Json::Object(_) => "object".into(),
    }
}

fn from_json_inner(json: &Json, shape: &Shape) -> Result<Value> {
    match shape {
        Shape::Int(kind) => int_from_json(json, *kind),
        Shape::Text => match json {
            Json::String(s) => Ok(Value::Text(s.clone())),
            other => Err(CodecError::mismatch("string", json_kind(other))),
        },
        Shape::Bytes => bytes_from_json(json).map(Value::Bytes),
        Shape::Sequence { element } => match json {
            Json::Array(items) => items
                .iter()
                .map(|item| from_json_inner(item, element))
                .collect::<Result<Vec<_>>>()
                .map(Value::Sequence),
            other => Err(CodecError::mismatch(shape.to_string(), json_kind(other))),
        },
        Shape::Record { fields } => {
            let obj = match json {
                Json::Object(obj) => obj,
                other => return Err(CodecError::mismatch(shape.to_string(), json_kind(other))),
            };
            if let Some(extra) = obj.keys().find(|k| !fields.iter().any(|f| &f.name == *k)) {
                return Err(CodecError::mismatch(shape.to_string(), format!("unknown field '{}'", extra)));
            }
            let mut out = Vec::with_capacity(fields.len());
            for field in fields {
                let v = obj.get(&field.name).ok_or_else(|| {
                    CodecError::mismatch(shape.to_string(), format!("missing field '{}'", field.name))
                })?;
                out.push((field.name.clone(), from_json_inner(v, &field.shape)?));
            }
            Ok(Value::Record(out))
        }
    }
}

fn int_from_json(json: &Json, kind: IntKind) -> Result<Value> {
    let out_of_range = || CodecError::mismatch(kind.name(), json_kind(json));

    let wide: i128 = match json {
        Json::Number(n) => number_to_i128(n).ok_or_else(out_of_range)?,
        Json::String(s) => s.trim().parse::<i128>().map_err(|_| out_of_range())?,
        _ => return Err(out_of_range()),
    };

    let v = match (kind.width, kind.signed) {
        (IntWidth::W8, false) => u8::try_from(wide).ok().map(Value::U8),
        (IntWidth::W16, false) => u16::try_from(wide).ok().map(Value::U16),
        (IntWidth::W32, false) => u32::try_from(wide).ok().map(Value::U32),
        (IntWidth::W64, false) => u64::try_from(wide).ok().map(Value::U64),
        (IntWidth::W8, true) => i8::try_from(wide).ok().map(Value::I8),
        (IntWidth::W16, true) => i16::try_from(wide).ok().map(Value::I16),
        (IntWidth::W32, true) => i32::try_from(wide).ok().map(Value::I32),
        (IntWidth::W64, true) => i64::try_from(wide).ok().map(Value::I64),
    };
    v.ok_or_else(out_of_range)
}

fn number_to_i128(n: &Number) -> Option<i128> {
    n.as_u64().map(i128::from).or_else(|| n.as_i64().map(i128::from))
}

fn bytes_from_json(json: &Json) -> Result<Vec<u8>> {
    match json {
        Json::String(s) => {
            let digits = s.strip_prefix("0x").unwrap_or(s);
            hex::decode(digits).map_err(|e| CodecError::InvalidEncoding(format!("bytes are not valid hex: {}", e)))
        }
        Json::Array(items) => items
            .iter()
            .map(|item| {
                item.as_u64()
                    .and_then(|b| u8::try_from(b).ok())
                    .ok_or_else(|| CodecError::mismatch("byte (0..=255)", json_kind(item)))
            })
            .collect(),
        other => Err(CodecError::mismatch("bytes", json_kind(other))),
    }
}

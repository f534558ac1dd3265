//! Subcommand bodies. Each returns the text to print on success.

use anyhow::{Context, Result};
use obi_core::shape::Shape;
use obi_core::value::{decode_value, encode_value_with, Value};
use obi_core::DecodeOptions;
use serde_json::json;
use tracing::debug;

fn parse_schema(text: &str, opts: &DecodeOptions) -> Result<Shape> {
    Shape::parse_with_depth(text, opts.max_depth)
        .with_context(|| format!("invalid schema '{}'", text))
}

pub fn decode(schema: &str, input: &str, opts: &DecodeOptions) -> Result<String> {
    let shape = parse_schema(schema, opts)?;
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let bytes = hex::decode(digits).context("input is not valid hex")?;
    debug!(schema = %shape, len = bytes.len(), "decoding");

    let value = decode_value(&bytes, &shape, opts).context("decode failed")?;
    Ok(serde_json::to_string_pretty(&value.to_json())?)
}

pub fn encode(schema: &str, input: &str, opts: &DecodeOptions) -> Result<String> {
    let shape = parse_schema(schema, opts)?;
    let json: serde_json::Value = serde_json::from_str(input).context("input is not valid JSON")?;
    let value = Value::from_json_with_depth(&json, &shape, opts.max_depth)
        .context("JSON does not fit the schema")?;
    debug!(schema = %shape, kind = %value.kind_name(), "encoding");

    let bytes = encode_value_with(&value, &shape, opts.max_depth).context("encode failed")?;
    Ok(format!("0x{}", hex::encode(bytes)))
}

pub fn shape(schema: &str, opts: &DecodeOptions) -> Result<String> {
    let shape = parse_schema(schema, opts)?;
    let report = json!({
        "canonical": shape.to_string(),
        "depth": shape.depth(),
        "fixed_size": shape.fixed_size(),
        "min_size": shape.min_size(),
        "shape": shape,
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

//! value/mod.rs
//! Dynamic OBI values: shape-driven encode/decode without Rust types,
//! for tooling that only learns the schema at runtime.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::Value;
pub use encode::{encode_value, encode_value_to, encode_value_with};
pub use decode::{decode_value, decode_value_from};

//! codec/mod.rs
//! Typed OBI codec.
//!
//! Responsibilities:
//! - Bind Rust types to their wire rules (`ObiEncode`, `ObiDecode`,
//!   `ObiSchema`)
//! - Top-level `encode` / `decode` / `must_decode` entry points
//!
//! Non-responsibilities:
//! - Schema evolution or self-description
//! - Streaming across discontiguous buffers

pub mod types;
pub mod primitives;
pub mod macros;
pub mod encode;
pub mod decode;

pub use types::{ObiDecode, ObiEncode, ObiSchema};
pub use encode::{encode, encode_into, must_encode};
pub use decode::{decode, decode_into, decode_with, must_decode};

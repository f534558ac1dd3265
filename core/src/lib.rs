//! obi-core
//!
//! Deterministic, schema-driven binary codec (OBI).
//! Pure Rust, no I/O, no shared state.
//!
//! | Shape         | Wire format                                          |
//! |---------------|------------------------------------------------------|
//! | uintN / intN  | N/8 bytes, little-endian, two's complement if signed |
//! | string        | u32 LE byte length `L` + `L` UTF-8 bytes             |
//! | bytes         | u32 LE length `L` + `L` raw bytes                    |
//! | [E]           | u32 LE count `C` + `C` encodings of `E`              |
//! | {f: T, ..}    | field encodings concatenated in declared order       |
//!
//! The stream carries no tags, names, magic or version. Writer and reader
//! must agree out of band on the exact shape: for records that means the
//! same field count, order and per-field shape. A mismatch is not detected;
//! it decodes to wrong values or fails later on truncation/trailing bytes.
//!
//! ```
//! use obi_core::{impl_obi_record, codec::{must_decode, encode}};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Inner { a: i8, b: i8 }
//! impl_obi_record!(Inner { a: i8, b: i8 });
//!
//! let mut inner = Inner::default();
//! must_decode(&[0x01, 0x02], &mut inner);
//! assert_eq!(inner, Inner { a: 1, b: 2 });
//! assert_eq!(encode(&inner).unwrap(), vec![0x01, 0x02]);
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod cursor;

// Shape model and schema text
pub mod shape;

// Typed and dynamic codecs
pub mod codec;
pub mod value;

pub use types::{CodecError, DecodeOptions, Result};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{
        decode, decode_into, decode_with, encode, must_decode, must_encode,
        ObiDecode, ObiEncode, ObiSchema,
    };
    pub use crate::cursor::{ReadCursor, WriteCursor};
    pub use crate::shape::{Field, IntKind, IntWidth, ScriptSchema, Shape};
    pub use crate::value::{decode_value, encode_value, encode_value_with, Value};
    pub use crate::{impl_obi_alias, impl_obi_record};
    pub use crate::{CodecError, DecodeOptions, Result};
}

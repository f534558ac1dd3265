//! shape/mod.rs
//! Shape model shared by the typed and dynamic codecs.
//!
//! - `types`: the closed `Shape` enum and integer kinds.
//! - `parse`: compact schema text (`{symbol:string,px:u64}`) and display.
//! - `schema`: `input/output` schema pairs.

pub mod types;
pub mod parse;
pub mod schema;

pub use types::*;
pub use schema::ScriptSchema;

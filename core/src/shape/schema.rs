//! shape/schema.rs
//! Request/response schema pair of an oracle script: `"<input>/<output>"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_DEPTH;
use crate::shape::types::Shape;
use crate::types::{CodecError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSchema {
    pub input: Shape,
    pub output: Shape,
}

impl ScriptSchema {
    pub fn new(input: Shape, output: Shape) -> Self {
        Self { input, output }
    }

    /// Split at the single top-level `/` and parse both halves.
    pub fn parse(text: &str) -> Result<Self> {
        let (input, output) = text.split_once('/').ok_or_else(|| CodecError::InvalidSchema {
            pos: text.len(),
            reason: "missing '/' between input and output schema".into(),
        })?;
        let split = input.len() + 1;
        if let Some(extra) = output.find('/') {
            return Err(CodecError::InvalidSchema {
                pos: split + extra,
                reason: "more than one '/' in script schema".into(),
            });
        }

        let input = Shape::parse_at(input, DEFAULT_MAX_DEPTH, 0)?;
        let output = Shape::parse_at(output, DEFAULT_MAX_DEPTH, split)?;
        Ok(Self { input, output })
    }
}

impl FromStr for ScriptSchema {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        ScriptSchema::parse(s)
    }
}

impl fmt::Display for ScriptSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.input, self.output)
    }
}

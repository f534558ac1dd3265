//! shape/parse.rs
//! Compact schema text: parsing and canonical display.
//!
//! Grammar:
//!
//! ```text
//! shape  := int | "string" | "bytes" | "[" shape "]" | "{" fields? "}"
//! int    := ("u" | "i") ("8" | "16" | "32" | "64")
//! fields := ident ":" shape ("," ident ":" shape)*
//! ```
//!
//! Whitespace between tokens is ignored. Nesting is bounded by
//! `DEFAULT_MAX_DEPTH` so hostile schema text cannot exhaust the stack.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::constants::{keywords, DEFAULT_MAX_DEPTH};
use crate::shape::types::{Field, IntKind, IntWidth, Shape};
use crate::types::{CodecError, Result};

impl Shape {
    /// Parse schema text such as `{symbol:string,px:u64,arr:[i16]}`.
    pub fn parse(text: &str) -> Result<Shape> {
        Self::parse_with_depth(text, DEFAULT_MAX_DEPTH)
    }

    /// Parse with an explicit nesting bound.
    pub fn parse_with_depth(text: &str, max_depth: usize) -> Result<Shape> {
        Self::parse_at(text, max_depth, 0)
    }

    /// Parse `text` that starts at byte `base` of a larger input, so error
    /// offsets point into that input.
    pub(crate) fn parse_at(text: &str, max_depth: usize, base: usize) -> Result<Shape> {
        let mut p = Parser::new(text, max_depth, base);
        let shape = p.shape(0)?;
        p.skip_ws();
        if !p.at_end() {
            return Err(p.error("unexpected trailing input"));
        }
        Ok(shape)
    }
}

impl FromStr for Shape {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Shape::parse(s)
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Int(k) => write!(f, "{}", k),
            Shape::Text => f.write_str(keywords::TEXT),
            Shape::Bytes => f.write_str(keywords::BYTES),
            Shape::Sequence { element } => write!(f, "[{}]", element),
            Shape::Record { fields } => {
                f.write_str("{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}:{}", field.name, field.shape)?;
                }
                f.write_str("}")
            }
        }
    }
}

struct Parser<'s> {
    src: &'s str,
    pos: usize,
    base: usize,
    max_depth: usize,
}

impl<'s> Parser<'s> {
    fn new(src: &'s str, max_depth: usize, base: usize) -> Self {
        Self { src, pos: 0, base, max_depth }
    }

    /// Offset of the cursor in the caller's input.
    fn offset(&self) -> usize {
        self.base + self.pos
    }

    fn error(&self, reason: impl Into<String>) -> CodecError {
        CodecError::InvalidSchema { pos: self.offset(), reason: reason.into() }
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.src.len() - trimmed.len();
    }

    fn expect(&mut self, c: char) -> Result<()> {
        self.skip_ws();
        match self.peek() {
            Some(found) if found == c => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(found) => Err(self.error(format!("expected '{}', found '{}'", c, found))),
            None => Err(self.error(format!("expected '{}', found end of input", c))),
        }
    }

    fn ident(&mut self) -> Result<&'s str> {
        self.skip_ws();
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(i, c)| !(c == '_' || c.is_ascii_alphabetic() || (i > 0 && c.is_ascii_digit())))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(match self.peek() {
                Some(c) => self.error(format!("expected identifier, found '{}'", c)),
                None => self.error("expected identifier, found end of input"),
            });
        }
        self.pos += len;
        Ok(&rest[..len])
    }

    fn shape(&mut self, depth: usize) -> Result<Shape> {
        self.skip_ws();
        match self.peek() {
            Some('[') => {
                self.enter(depth)?;
                self.pos += 1;
                let element = self.shape(depth + 1)?;
                self.expect(']')?;
                Ok(Shape::sequence(element))
            }
            Some('{') => {
                self.enter(depth)?;
                self.pos += 1;
                self.record_fields(depth + 1).map(Shape::record)
            }
            Some(_) => {
                let start = self.offset();
                let word = self.ident()?;
                leaf(word).map_err(|e| match e {
                    CodecError::UnsupportedShape(msg) => {
                        CodecError::UnsupportedShape(format!("{} at offset {}", msg, start))
                    }
                    other => other,
                })
            }
            None => Err(self.error("expected shape, found end of input")),
        }
    }

    fn enter(&self, depth: usize) -> Result<()> {
        if depth + 1 > self.max_depth {
            return Err(CodecError::DepthExceeded { depth: depth + 1, max: self.max_depth });
        }
        Ok(())
    }

    fn record_fields(&mut self, depth: usize) -> Result<Vec<Field>> {
        let mut fields = Vec::new();
        let mut seen = HashSet::new();

        self.skip_ws();
        if self.peek() == Some('}') {
            self.pos += 1;
            return Ok(fields);
        }

        loop {
            self.skip_ws();
            let name_pos = self.offset();
            let name = self.ident()?;
            if !seen.insert(name) {
                return Err(CodecError::InvalidSchema {
                    pos: name_pos,
                    reason: format!("duplicate field '{}'", name),
                });
            }
            self.expect(':')?;
            let shape = self.shape(depth)?;
            fields.push(Field::new(name, shape));

            self.skip_ws();
            match self.peek() {
                Some(',') => self.pos += 1,
                Some('}') => {
                    self.pos += 1;
                    return Ok(fields);
                }
                Some(c) => return Err(self.error(format!("expected ',' or '}}', found '{}'", c))),
                None => return Err(self.error("unterminated record")),
            }
        }
    }
}

/// Leaf keyword to shape.
fn leaf(word: &str) -> Result<Shape> {
    match word {
        keywords::TEXT => return Ok(Shape::Text),
        keywords::BYTES => return Ok(Shape::Bytes),
        _ => {}
    }

    let unknown = || CodecError::UnsupportedShape(format!("unknown type '{}'", word));
    let signed = match word.as_bytes().first() {
        Some(b'u') => false,
        Some(b'i') => true,
        _ => return Err(unknown()),
    };
    // Exact spellings only: `u08` is not `u8`.
    let width = match &word[1..] {
        "8" => IntWidth::W8,
        "16" => IntWidth::W16,
        "32" => IntWidth::W32,
        "64" => IntWidth::W64,
        _ => return Err(unknown()),
    };
    Ok(Shape::Int(IntKind { width, signed }))
}

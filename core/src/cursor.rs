//! cursor.rs
//! Forward-only byte cursors shared by the encoder and decoder.
//!
//! Design notes:
//! - `ReadCursor` borrows the input; every read is bounds-checked and fails
//!   with `UnexpectedEndOfInput` instead of slicing out of range.
//! - `WriteCursor` owns the output buffer; writes never fail, except the
//!   length prefix which must fit in a `u32`.
//! - All multi-byte integers are little-endian.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::MAX_PAYLOAD_LEN;
use crate::types::{CodecError, Result};

/// Read position over a contiguous input buffer.
#[derive(Debug, Clone)]
pub struct ReadCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ReadCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Next `n` bytes; the cursor only moves when all of them are present.
    #[inline]
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
        let have = self.remaining();
        if n > have {
            return Err(CodecError::UnexpectedEndOfInput { need: n, have });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_exact(1)?[0])
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_exact(2)?))
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_exact(4)?))
    }

    #[inline]
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.read_exact(8)?))
    }

    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    #[inline]
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(self.read_exact(2)?))
    }

    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.read_exact(4)?))
    }

    #[inline]
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(LittleEndian::read_i64(self.read_exact(8)?))
    }

    /// 4-byte length/count prefix.
    #[inline]
    pub fn read_len(&mut self) -> Result<usize> {
        Ok(self.read_u32()? as usize)
    }

    /// Length-prefixed payload, borrowed from the input.
    pub fn read_prefixed(&mut self) -> Result<&'a [u8]> {
        let len = self.read_len()?;
        self.read_exact(len)
    }

    /// Capacity hint for a sequence of `count` elements, each at least
    /// `min_elem_size` bytes, clamped to what the input can still hold.
    pub fn capacity_hint(&self, count: usize, min_elem_size: usize) -> usize {
        count.min(self.remaining() / min_elem_size.max(1))
    }
}

/// Append-only output buffer.
#[derive(Debug, Clone, Default)]
pub struct WriteCursor {
    buf: Vec<u8>,
}

impl WriteCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self { buf: Vec::with_capacity(cap) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    #[inline]
    pub fn write(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    #[inline]
    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    #[inline]
    pub fn write_u16(&mut self, v: u16) {
        let mut b = [0u8; 2];
        LittleEndian::write_u16(&mut b, v);
        self.write(&b);
    }

    #[inline]
    pub fn write_u32(&mut self, v: u32) {
        let mut b = [0u8; 4];
        LittleEndian::write_u32(&mut b, v);
        self.write(&b);
    }

    #[inline]
    pub fn write_u64(&mut self, v: u64) {
        let mut b = [0u8; 8];
        LittleEndian::write_u64(&mut b, v);
        self.write(&b);
    }

    #[inline]
    pub fn write_i8(&mut self, v: i8) {
        self.buf.push(v as u8);
    }

    #[inline]
    pub fn write_i16(&mut self, v: i16) {
        let mut b = [0u8; 2];
        LittleEndian::write_i16(&mut b, v);
        self.write(&b);
    }

    #[inline]
    pub fn write_i32(&mut self, v: i32) {
        let mut b = [0u8; 4];
        LittleEndian::write_i32(&mut b, v);
        self.write(&b);
    }

    #[inline]
    pub fn write_i64(&mut self, v: i64) {
        let mut b = [0u8; 8];
        LittleEndian::write_i64(&mut b, v);
        self.write(&b);
    }

    /// 4-byte length/count prefix.
    pub fn write_len(&mut self, len: usize) -> Result<()> {
        if len > MAX_PAYLOAD_LEN {
            return Err(CodecError::LengthOverflow { len });
        }
        self.write_u32(len as u32);
        Ok(())
    }

    /// Length prefix followed by the raw payload.
    pub fn write_prefixed(&mut self, payload: &[u8]) -> Result<()> {
        self.write_len(payload.len())?;
        self.buf.reserve(payload.len());
        self.write(payload);
        Ok(())
    }
}

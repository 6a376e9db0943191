//! Cursor-relative scanning over an immutable byte buffer
//!
//! Every primitive either succeeds and moves the cursor forward, or fails
//! with [`ParseError::NoMatch`] and leaves the cursor where it was.

use crate::error::ParseError;
use crate::parser::ParseResult;

/// Saved cursor offset, restored when an alternative fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl Checkpoint {
    pub fn offset(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    buf: &'src [u8],
    pos: usize,
}

/// Bytes that end an unquoted token: ASCII whitespace and the four brackets
pub fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || matches!(byte, b'(' | b')' | b'[' | b']')
}

pub fn is_whitespace(byte: u8) -> bool {
    byte.is_ascii_whitespace()
}

impl<'src> Cursor<'src> {
    pub fn new(buf: &'src [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Unconsumed part of the buffer
    pub fn rest(&self) -> &'src [u8] {
        &self.buf[self.pos.min(self.buf.len())..]
    }

    /// Bytes between two offsets already passed by the cursor
    pub fn slice(&self, start: usize, end: usize) -> &'src [u8] {
        &self.buf[start..end]
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }

    /// Advance past `literal` iff the bytes at the cursor equal it exactly
    pub fn advance_if_literal(&mut self, literal: &[u8]) -> ParseResult<()> {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else {
            Err(ParseError::NoMatch)
        }
    }

    /// Move to the first byte not matching `set`. Fails at end of buffer.
    pub fn skip_while(&mut self, set: impl Fn(u8) -> bool) -> ParseResult<()> {
        match self.rest().iter().position(|&b| !set(b)) {
            Some(offset) => {
                self.pos += offset;
                Ok(())
            }
            None => Err(ParseError::NoMatch),
        }
    }

    /// Move to the first byte matching `set`. Fails at end of buffer.
    pub fn skip_until(&mut self, set: impl Fn(u8) -> bool) -> ParseResult<()> {
        match self.rest().iter().position(|&b| set(b)) {
            Some(offset) => {
                self.pos += offset;
                Ok(())
            }
            None => Err(ParseError::NoMatch),
        }
    }

    /// Consume an unquoted token: everything up to the next separator or the
    /// end of the buffer. The returned span may be empty.
    pub fn scan_token(&mut self) -> &'src [u8] {
        let start = self.pos;
        if self.skip_until(is_separator).is_err() {
            self.pos = self.buf.len();
        }
        &self.buf[start..self.pos]
    }

    /// True at end of buffer or in front of a separator
    pub fn at_token_boundary(&self) -> bool {
        self.peek().map_or(true, is_separator)
    }

    /// True when nothing but whitespace is left
    pub fn only_whitespace_left(&self) -> bool {
        self.rest().iter().all(|&b| is_whitespace(b))
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;

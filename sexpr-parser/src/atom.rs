//! Atom grammar: number, boolean, string and symbol, tried in that order

use crate::cursor::is_whitespace;
use crate::error::ParseError;
use crate::parser::{arena_failure, ParseResult, Parser};
use sexpr_core::Atom;

impl<'src, 'a> Parser<'src, 'a> {
    /// Ordered choice over the four atom kinds; the first match wins
    pub(crate) fn atom(&mut self) -> ParseResult<Atom<'a>> {
        if let Some(n) = self.attempt(Self::number)? {
            return Ok(Atom::Number(n));
        }
        if let Some(b) = self.attempt(Self::boolean)? {
            return Ok(Atom::Boolean(b));
        }
        if let Some(s) = self.attempt(Self::string)? {
            return Ok(Atom::String(s));
        }
        if let Some(s) = self.attempt(Self::symbol)? {
            return Ok(Atom::Symbol(s));
        }
        Err(ParseError::NoMatch)
    }

    pub(crate) fn number(&mut self) -> ParseResult<i64> {
        self.cursor.skip_while(is_whitespace)?;
        let token = self.cursor.scan_token();
        parse_integer(token).ok_or(ParseError::NoMatch)
    }

    /// `#t` or `#f`, ending at a token boundary
    pub(crate) fn boolean(&mut self) -> ParseResult<bool> {
        self.cursor.skip_while(is_whitespace)?;
        self.cursor.advance_if_literal(b"#")?;
        let value = if self.cursor.advance_if_literal(b"t").is_ok() {
            true
        } else {
            self.cursor.advance_if_literal(b"f")?;
            false
        };
        if self.cursor.at_token_boundary() {
            Ok(value)
        } else {
            Err(ParseError::NoMatch)
        }
    }

    /// Double-quoted text; no escape sequences, the next `"` always closes
    pub(crate) fn string(&mut self) -> ParseResult<&'a str> {
        self.cursor.skip_while(is_whitespace)?;
        self.cursor.advance_if_literal(b"\"")?;
        if self.cursor.advance_if_literal(b"\"").is_ok() {
            return Ok("");
        }
        let start = self.cursor.position();
        self.cursor.skip_until(|b| b == b'"')?;
        let end = self.cursor.position();
        self.cursor.advance_if_literal(b"\"")?;
        self.copy_text(self.cursor.slice(start, end))
    }

    /// Any non-empty run of non-separator bytes not starting with `#` or `"`
    pub(crate) fn symbol(&mut self) -> ParseResult<&'a str> {
        self.cursor.skip_while(is_whitespace)?;
        if matches!(self.cursor.peek(), Some(b'#' | b'"')) {
            return Err(ParseError::NoMatch);
        }
        let token = self.cursor.scan_token();
        if token.is_empty() {
            return Err(ParseError::NoMatch);
        }
        self.copy_text(token)
    }

    fn copy_text(&self, bytes: &[u8]) -> ParseResult<&'a str> {
        let text = std::str::from_utf8(bytes).map_err(|_| ParseError::NoMatch)?;
        self.arena.alloc_text(text).map_err(arena_failure)
    }
}

/// Parse a signed integer with an optional `0x`, `0o` or `0b` radix prefix
///
/// Returns `None` for anything that is not a complete in-range literal.
pub fn parse_integer(token: &[u8]) -> Option<i64> {
    let (negative, unsigned) = match token.split_first()? {
        (&b'-', rest) => (true, rest),
        (&b'+', rest) => (false, rest),
        _ => (false, token),
    };
    let (radix, digits) = match unsigned {
        [b'0', b'x' | b'X', rest @ ..] => (16, rest),
        [b'0', b'o' | b'O', rest @ ..] => (8, rest),
        [b'0', b'b' | b'B', rest @ ..] => (2, rest),
        _ => (10, unsigned),
    };
    // from_str_radix would accept a second sign here
    if digits.is_empty() || !digits.iter().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    let digits = std::str::from_utf8(digits).ok()?;
    let magnitude = i128::from(u64::from_str_radix(digits, radix).ok()?);
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

#[cfg(test)]
#[path = "atom_tests.rs"]
mod tests;

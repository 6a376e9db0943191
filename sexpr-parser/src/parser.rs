//! Backtracking recursive descent parser
//!
//! Grammar rules are methods returning [`ParseResult`]. Alternatives and
//! optional repetition are expressed with [`Parser::attempt`], which rewinds
//! the cursor on [`ParseError::NoMatch`] and lets every other error through.
//!
//! ```text
//! cons := atom | '(' list? ')' | '[' list? ']'
//! list := cons list?
//! ```

use crate::config::ParserConfig;
use crate::cursor::{is_whitespace, Cursor};
use crate::error::ParseError;
use sexpr_core::{Arena, ArenaVec, Cons, List};
use tracing::{debug, trace, warn};

pub type ParseResult<T> = Result<T, ParseError>;

/// Opening brackets and the closing bracket each one requires
const BRACKETS: [(u8, u8); 2] = [(b'(', b')'), (b'[', b']')];

pub struct Parser<'src, 'a> {
    pub(crate) cursor: Cursor<'src>,
    pub(crate) arena: &'a Arena,
    config: ParserConfig,
    /// Current bracket nesting depth
    depth: usize,
    /// Set once iteration has yielded an error
    halted: bool,
}

impl<'src, 'a> Parser<'src, 'a> {
    pub fn new(source: &'src str, arena: &'a Arena) -> Self {
        Self::from_bytes(source.as_bytes(), arena)
    }

    pub fn from_bytes(source: &'src [u8], arena: &'a Arena) -> Self {
        Self {
            cursor: Cursor::new(source),
            arena,
            config: ParserConfig::default(),
            depth: 0,
            halted: false,
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the maximum bracket nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Parse one top-level form and leave the cursor just after it
    ///
    /// On `NoMatch` the cursor is back where it started.
    pub fn parse_cons(&mut self) -> ParseResult<Cons<'a>> {
        match self.attempt(Self::cons)? {
            Some(cons) => Ok(cons),
            None => Err(ParseError::NoMatch),
        }
    }

    /// Succeed only if nothing but whitespace is left
    pub fn finish(&self) -> ParseResult<()> {
        if self.cursor.only_whitespace_left() {
            Ok(())
        } else {
            debug!(
                position = self.cursor.position(),
                "trailing input after top-level form"
            );
            Err(ParseError::NoMatch)
        }
    }

    /// Parse exactly one form spanning the whole buffer
    pub fn parse_complete(&mut self) -> ParseResult<Cons<'a>> {
        let cons = self.parse_cons()?;
        self.finish()?;
        Ok(cons)
    }

    /// Parse every top-level form into one list, `None` for blank input
    pub fn parse_all(&mut self) -> ParseResult<Option<&'a List<'a>>> {
        let mut forms = self.arena.vec();
        while !self.cursor.only_whitespace_left() {
            let form = self.parse_cons()?;
            forms.try_push(form).map_err(arena_failure)?;
        }
        self.link(&forms)
    }

    /// Run `rule`; on `NoMatch` rewind the cursor and report `None`
    ///
    /// Fatal errors propagate without touching the cursor.
    pub fn attempt<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Option<T>> {
        let checkpoint = self.cursor.checkpoint();
        match rule(self) {
            Ok(value) => Ok(Some(value)),
            Err(ParseError::NoMatch) => {
                trace!(
                    from = self.cursor.position(),
                    to = checkpoint.offset(),
                    "alternative did not match, rewinding"
                );
                self.cursor.restore(checkpoint);
                Ok(None)
            }
            Err(fatal) => Err(fatal),
        }
    }

    /// `cons := atom | bracketed`
    pub(crate) fn cons(&mut self) -> ParseResult<Cons<'a>> {
        if let Some(atom) = self.attempt(Self::atom)? {
            return Ok(Cons::Atom(atom));
        }
        self.bracketed()
    }

    /// `list := cons list?`
    ///
    /// The optional tail is parsed as a loop rather than by recursion, so only
    /// bracket nesting grows the call stack. Heads are gathered in the arena
    /// until the closing bracket is reached.
    pub(crate) fn list(&mut self) -> ParseResult<&'a List<'a>> {
        let mut heads = self.arena.vec();
        let first = self.cons()?;
        heads.try_push(first).map_err(arena_failure)?;
        while let Some(cons) = self.attempt(Self::cons)? {
            heads.try_push(cons).map_err(arena_failure)?;
        }
        match self.link(&heads)? {
            Some(list) => Ok(list),
            None => Err(ParseError::NoMatch),
        }
    }

    fn bracketed(&mut self) -> ParseResult<Cons<'a>> {
        self.cursor.skip_while(is_whitespace)?;
        let close = self.open_bracket()?;

        self.enter_nesting()?;
        let inner = self.attempt(Self::list);
        self.exit_nesting();
        let inner = inner?;

        if self.cursor.skip_while(is_whitespace).is_err() {
            debug!(expected = %char::from(close), "end of input before closing bracket");
            return Err(ParseError::NoMatch);
        }
        if let Err(err) = self.cursor.advance_if_literal(&[close]) {
            match self.cursor.peek() {
                Some(found @ (b')' | b']')) => debug!(
                    position = self.cursor.position(),
                    expected = %char::from(close),
                    found = %char::from(found),
                    "mismatched closing bracket"
                ),
                _ => debug!(
                    position = self.cursor.position(),
                    expected = %char::from(close),
                    "unparsable input before closing bracket"
                ),
            }
            return Err(err);
        }
        Ok(Cons::List(inner))
    }

    /// Consume an opening bracket and return the closing byte it demands
    fn open_bracket(&mut self) -> ParseResult<u8> {
        for (open, close) in BRACKETS {
            if self.cursor.advance_if_literal(&[open]).is_ok() {
                return Ok(close);
            }
        }
        Err(ParseError::NoMatch)
    }

    /// Link `heads` into arena cells, last one first
    fn link(&self, heads: &ArenaVec<'a, Cons<'a>>) -> ParseResult<Option<&'a List<'a>>> {
        let mut tail = None;
        for &head in heads.as_slice().iter().rev() {
            let cell = self.arena.alloc_list(List::new(head, tail));
            tail = Some(cell.map_err(arena_failure)?);
        }
        Ok(tail)
    }

    fn enter_nesting(&mut self) -> ParseResult<()> {
        if self.depth >= self.config.max_depth {
            warn!(
                depth = self.depth,
                max_depth = self.config.max_depth,
                "bracket nesting too deep"
            );
            return Err(ParseError::MaxDepthExceeded {
                depth: self.depth,
                max_depth: self.config.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Log an arena failure once, where it is raised, and make it fatal
pub(crate) fn arena_failure(err: sexpr_core::Error) -> ParseError {
    warn!(%err, "arena allocation failed");
    ParseError::Arena(err)
}

/// Iterates over top-level forms, stopping after the first error
impl<'src, 'a> Iterator for Parser<'src, 'a> {
    type Item = ParseResult<Cons<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted || self.cursor.only_whitespace_left() {
            return None;
        }
        let result = self.parse_cons();
        self.halted = result.is_err();
        Some(result)
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "parser_depth_tests.rs"]
mod depth_tests;

//! Backtracking s-expression parser
//!
//! Turns a flat text buffer into a cons-cell tree allocated in a caller-owned
//! [`Arena`]:
//! - Cursor primitives over an immutable byte buffer
//! - PEG-style ordered choice with checkpoint/restore backtracking
//! - Recoverable `NoMatch` kept apart from fatal resource failures
//!
//! ```
//! use sexpr_core::Arena;
//!
//! let arena = Arena::new();
//! let tree = sexpr_parser::parse("(255 (foo) [bar #t \"hi\"])", &arena).unwrap();
//! assert_eq!(tree.to_string(), "(255 (foo) (bar #t \"hi\"))");
//! ```

pub mod atom;
pub mod config;
pub mod cursor;
pub mod error;
pub mod parser;


pub use config::ParserConfig;
pub use error::{ErrorKind, ParseError};
pub use parser::{ParseResult, Parser};

use sexpr_core::{Arena, Cons, List};
use tracing::debug;

/// Parse exactly one form; anything but whitespace after it is a `NoMatch`
pub fn parse<'a>(source: &str, arena: &'a Arena) -> ParseResult<Cons<'a>> {
    parse_with_config(source, arena, ParserConfig::default())
}

/// Parse exactly one form with custom limits
pub fn parse_with_config<'a>(
    source: &str,
    arena: &'a Arena,
    config: ParserConfig,
) -> ParseResult<Cons<'a>> {
    parse_bytes_with_config(source.as_bytes(), arena, config)
}

/// Parse exactly one form from a raw byte buffer
///
/// Symbol and string payloads must still be valid UTF-8 to match.
pub fn parse_bytes<'a>(source: &[u8], arena: &'a Arena) -> ParseResult<Cons<'a>> {
    parse_bytes_with_config(source, arena, ParserConfig::default())
}

fn parse_bytes_with_config<'a>(
    source: &[u8],
    arena: &'a Arena,
    config: ParserConfig,
) -> ParseResult<Cons<'a>> {
    debug!(bytes = source.len(), max_depth = config.max_depth, "parsing");
    let result = Parser::from_bytes(source, arena)
        .with_config(config)
        .parse_complete();
    debug!(
        ok = result.is_ok(),
        arena_bytes = arena.allocated_bytes(),
        "parse finished"
    );
    result
}

/// Parse every top-level form, in order, into one arena list
///
/// Whitespace-only input gives `Ok(None)`.
pub fn parse_all<'a>(source: &str, arena: &'a Arena) -> ParseResult<Option<&'a List<'a>>> {
    debug!(bytes = source.len(), "parsing all top-level forms");
    Parser::new(source, arena).parse_all()
}

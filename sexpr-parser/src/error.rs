//! Parser error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No grammar alternative matched at the current position.
    /// Backtracking swallows this one; it only reaches the caller once every
    /// alternative at the top level is exhausted.
    #[error("No grammar alternative matched the input")]
    NoMatch,

    #[error(transparent)]
    Arena(#[from] sexpr_core::Error),

    #[error("Maximum parsing depth exceeded: depth {depth} exceeds limit of {max_depth}")]
    MaxDepthExceeded { depth: usize, max_depth: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Recoverable: the input did not match
    ParseFail,
    /// Fatal: a resource ran out, never caught by backtracking
    ResourceFailure,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::NoMatch => ErrorKind::ParseFail,
            ParseError::Arena(_) | ParseError::MaxDepthExceeded { .. } => {
                ErrorKind::ResourceFailure
            }
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.kind() == ErrorKind::ParseFail
    }
}

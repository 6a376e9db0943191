//! Error types for sexpr-core

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Arena exhausted: requested {requested} bytes with {allocated} bytes already allocated")]
    ArenaExhausted { requested: usize, allocated: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

//! Core types for the s-expression parser
//!
//! This crate provides the data model shared by the parser and its callers:
//! - `Atom`, `Cons` and `List`, the classic cons-cell tree
//! - `Arena`, the single region that owns every node of one parse
//! - Error types for arena exhaustion

pub mod arena;
pub mod ast;
pub mod error;

pub use arena::{Arena, ArenaVec};
pub use ast::{Atom, Cons, List, ListIter};
pub use error::{Error, Result};

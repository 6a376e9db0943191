//! Arena owning every node of a parse
//!
//! Backed by a `bumpalo::Bump`. Nodes are never freed one by one: when a
//! sub-parse backtracks, the cells it allocated simply become unreachable and
//! are reclaimed when the arena is dropped or [`reset`](Arena::reset).

use crate::ast::List;
use crate::error::{Error, Result};
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;
use std::alloc::Layout;
use std::fmt;
use std::mem;

pub struct Arena {
    bump: Bump,
}

impl Arena {
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create an arena with `bytes` of capacity reserved up front
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bump: Bump::with_capacity(bytes),
        }
    }

    /// Create an arena that refuses to grow past `limit` bytes
    ///
    /// Allocations that would exceed the limit fail with
    /// [`Error::ArenaExhausted`] instead of aborting the process.
    pub fn with_allocation_limit(limit: usize) -> Self {
        let bump = Bump::new();
        bump.set_allocation_limit(Some(limit));
        Self { bump }
    }

    /// Move a list cell into the arena
    pub fn alloc_list<'a>(&'a self, list: List<'a>) -> Result<&'a List<'a>> {
        match self.bump.try_alloc(list) {
            Ok(cell) => Ok(&*cell),
            Err(_) => Err(self.exhausted(Layout::new::<List<'a>>().size())),
        }
    }

    /// Copy `text` into the arena
    pub fn alloc_text(&self, text: &str) -> Result<&str> {
        match self.bump.try_alloc_str(text) {
            Ok(copy) => Ok(&*copy),
            Err(_) => Err(self.exhausted(text.len())),
        }
    }

    /// Start an empty growable sequence whose buffer lives in this arena
    pub fn vec<T>(&self) -> ArenaVec<'_, T> {
        ArenaVec {
            items: BumpVec::new_in(&self.bump),
            arena: self,
        }
    }

    /// Bytes currently reserved by the arena's chunks
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Release every node at once, keeping the largest chunk for reuse
    ///
    /// Requires `&mut self`, so no tree borrowed from this arena can still be
    /// alive.
    pub fn reset(&mut self) {
        self.bump.reset();
    }

    fn exhausted(&self, requested: usize) -> Error {
        Error::ArenaExhausted {
            requested,
            allocated: self.allocated_bytes(),
        }
    }
}

/// Scratch sequence allocated in an [`Arena`]
///
/// Growth goes through the arena's allocation limit; running out of room is
/// reported as [`Error::ArenaExhausted`] rather than aborting.
pub struct ArenaVec<'a, T> {
    items: BumpVec<'a, T>,
    arena: &'a Arena,
}

impl<'a, T> ArenaVec<'a, T> {
    pub fn try_push(&mut self, value: T) -> Result<()> {
        if self.items.try_reserve(1).is_err() {
            let requested = self.items.capacity().max(1) * mem::size_of::<T>();
            return Err(self.arena.exhausted(requested));
        }
        self.items.push(value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for ArenaVec<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("allocated_bytes", &self.allocated_bytes())
            .field("allocation_limit", &self.bump.allocation_limit())
            .finish()
    }
}

#[cfg(test)]
#[path = "arena_tests.rs"]
mod tests;

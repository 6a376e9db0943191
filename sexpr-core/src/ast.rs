//! Cons-cell tree produced by the parser
//!
//! Every node borrows from the [`Arena`](crate::Arena) it was allocated in, so
//! the whole tree is `Copy` and is released together with its arena.

use std::fmt;

/// An indivisible leaf value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Atom<'a> {
    Number(i64),
    Boolean(bool),
    Symbol(&'a str),
    String(&'a str),
}

impl<'a> Atom<'a> {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Atom::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Atom::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&'a str> {
        match self {
            Atom::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Atom::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Atom<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Number(n) => write!(f, "{n}"),
            Atom::Boolean(true) => write!(f, "#t"),
            Atom::Boolean(false) => write!(f, "#f"),
            Atom::Symbol(s) => write!(f, "{s}"),
            Atom::String(s) => write!(f, "\"{s}\""),
        }
    }
}

/// Either a leaf atom or a bracketed sub-list
///
/// `Cons::List(None)` is the empty list `()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cons<'a> {
    Atom(Atom<'a>),
    List(Option<&'a List<'a>>),
}

impl<'a> Cons<'a> {
    pub fn as_atom(&self) -> Option<&Atom<'a>> {
        match self {
            Cons::Atom(atom) => Some(atom),
            Cons::List(_) => None,
        }
    }

    /// The sub-list of a bracketed form. The outer `Option` is `None` for
    /// atoms, the inner one is `None` for `()`.
    pub fn as_list(&self) -> Option<Option<&'a List<'a>>> {
        match self {
            Cons::Atom(_) => None,
            Cons::List(list) => Some(*list),
        }
    }

    pub fn is_empty_list(&self) -> bool {
        matches!(self, Cons::List(None))
    }
}

impl<'a> From<Atom<'a>> for Cons<'a> {
    fn from(atom: Atom<'a>) -> Self {
        Cons::Atom(atom)
    }
}

impl fmt::Display for Cons<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cons::Atom(atom) => write!(f, "{atom}"),
            Cons::List(Some(list)) => write!(f, "{list}"),
            Cons::List(None) => write!(f, "()"),
        }
    }
}

/// A pair cell: one head and an optional tail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct List<'a> {
    pub head: Cons<'a>,
    pub tail: Option<&'a List<'a>>,
}

impl<'a> List<'a> {
    pub fn new(head: Cons<'a>, tail: Option<&'a List<'a>>) -> Self {
        Self { head, tail }
    }

    /// Iterate over the heads of this list and all of its tails
    pub fn iter(&self) -> ListIter<'_> {
        ListIter { next: Some(self) }
    }

    /// Number of cells in the chain; never zero since a cell always has a head
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        let mut len = 1;
        let mut cell = self.tail;
        while let Some(next) = cell {
            len += 1;
            cell = next.tail;
        }
        len
    }
}

impl<'a> IntoIterator for &'a List<'a> {
    type Item = &'a Cons<'a>;
    type IntoIter = ListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for List<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, cons) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{cons}")?;
        }
        write!(f, ")")
    }
}

/// Borrowing iterator over the heads of a [`List`]
#[derive(Debug, Clone)]
pub struct ListIter<'a> {
    next: Option<&'a List<'a>>,
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a Cons<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.next?;
        self.next = cell.tail;
        Some(&cell.head)
    }
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;

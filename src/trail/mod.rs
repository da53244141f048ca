// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail of deferred square removals.
//!
//! When the engine picks a square that cannot be cut yet (the rows it would
//! cover are not flush), it records an [`Obligation`] and moves on. The
//! obligations form a LIFO chain that must all resolve for a branch to count
//! as a complete tiling.
//!
//! # Memory Model
//!
//! The chain is a persistent singly linked list. Pushing or popping returns a
//! new stack that shares its tail with the old one through `Rc`, so every
//! branch of the search gets its own top of stack without a deep copy, and
//! siblings never observe each other's changes.
//!
//! # Example
//!
//! ```
//! use staircase_tilings::trail::{Obligation, ObligationStack};
//!
//! let empty = ObligationStack::new();
//! let one = empty.push(Obligation::new(2, 0));
//! let two = one.push(Obligation::new(1, 3));
//!
//! assert_eq!(two.top(), Some(&Obligation::new(1, 3)));
//! assert_eq!(two.len(), 2);
//!
//! // Older stacks are untouched.
//! assert_eq!(one.len(), 1);
//! assert!(empty.is_empty());
//! ```

use std::fmt;
use std::rc::Rc;

/// A square of `tile_size` that was chosen at `row` but not cut yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obligation {
    pub tile_size: usize,
    pub row: usize,
}

impl Obligation {
    pub fn new(tile_size: usize, row: usize) -> Self {
        Self { tile_size, row }
    }
}

impl fmt::Display for Obligation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.tile_size, self.row)
    }
}

#[derive(Debug)]
struct Node {
    obligation: Obligation,
    below: Option<Rc<Node>>,
}

/// Persistent LIFO stack of obligations.
///
/// Cloning is O(1): the clone shares every node.
#[derive(Debug, Clone, Default)]
pub struct ObligationStack {
    head: Option<Rc<Node>>,
    len: usize,
}

impl ObligationStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Most recently deferred obligation.
    pub fn top(&self) -> Option<&Obligation> {
        self.head.as_deref().map(|node| &node.obligation)
    }

    /// A new stack with `obligation` on top of this one.
    pub fn push(&self, obligation: Obligation) -> Self {
        Self {
            head: Some(Rc::new(Node {
                obligation,
                below: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Split off the top obligation, returning it with the stack below it.
    pub fn pop(&self) -> Option<(Obligation, Self)> {
        self.head.as_deref().map(|node| {
            let rest = Self {
                head: node.below.clone(),
                len: self.len - 1,
            };
            (node.obligation, rest)
        })
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl fmt::Display for ObligationStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, obligation) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", obligation)?;
        }
        write!(f, "]")
    }
}

// Unwind iteratively so that long chains don't overflow the stack on drop.
impl Drop for ObligationStack {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.below.take(),
                Err(_) => break,
            }
        }
    }
}

/// Top-to-bottom iterator over an [`ObligationStack`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Obligation;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.below.as_deref();
            &node.obligation
        })
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context: memo tables, statistics and options for one run.
//!
//! The SearchContext is passed by `&mut` through the whole recursion. It
//! owns everything that outlives a single search state:
//! - the two memoization tables
//! - the statistics counters
//! - the options the run was started with
//!
//! Separate contexts share nothing, so tests can run searches side by side
//! or reset a context between runs.

use crate::memo::MemoTables;
use crate::state::Statistics;

/// Options for a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Consult and populate the memo tables.
    ///
    /// Turning this off gives the same count through a full walk of the
    /// search tree.
    pub memoize: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { memoize: true }
    }
}

/// Everything the engine carries between search states.
///
/// # Example
///
/// ```
/// use staircase_tilings::context::SearchContext;
/// use staircase_tilings::engine::count_tilings;
/// use staircase_tilings::geometry::Shape;
///
/// let mut ctx = SearchContext::new();
/// assert_eq!(count_tilings(&mut ctx, &Shape::new(vec![3, 3, 3])), 6);
///
/// ctx.reset();
/// assert!(ctx.memo.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct SearchContext {
    pub memo: MemoTables,
    pub statistics: Statistics,
    pub options: SearchOptions,
}

impl SearchContext {
    /// Create a context with default options and empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SearchOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Forget all memoized counts and zero the statistics.
    pub fn reset(&mut self) {
        self.memo.clear();
        self.statistics.reset();
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Count the ways to cut a staircase region into squares.
//!
//! A staircase is a stack of left-aligned rows whose widths never shrink
//! going down. The search always anchors the next square at the exposed
//! end of some row, working from the top.
//!
//! # Architecture
//!
//! ## Search State
//!
//! Owned by each recursive call, copied when the search branches:
//! - Shape - row widths plus the anchor cursor
//! - ObligationStack - squares chosen but not cut yet, shared by `Rc`
//!
//! ## Search Context
//!
//! Shared by the whole run and passed by `&mut`:
//! - MemoTables - fingerprint → count, one table with no obligations
//!   pending and one for states with obligations
//! - Statistics - counters for calls, memo hits, deferrals and stores
//! - SearchOptions - whether to memoize at all
//!
//! # Search Algorithm
//!
//! See [`engine`]. A square whose rows are not yet flush is deferred as an
//! obligation and retried once a later cut has levelled those rows. States
//! are fingerprinted and memoized one level above each lookup.
//!
//! Fingerprints are not checked against the full state, so a collision
//! would silently reuse another state's count.

pub mod context;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod memo;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use context::{SearchContext, SearchOptions};
pub use engine::{count_completions, count_tilings};
pub use geometry::Shape;
pub use input::{InputError, Problem};
pub use trail::{Obligation, ObligationStack};

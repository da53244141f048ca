// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable per-run state that is not part of the search itself.

pub mod statistics;

pub use statistics::{Counters, Statistics};

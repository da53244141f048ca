// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for staircase regions.
//!
//! - Shape: row widths plus the anchor cursor
//! - Width: the signed width of one row

pub mod shape;

// Re-export for convenience
pub use shape::{Shape, Width};

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shape state: the row widths still to be tiled, plus the anchor cursor.
//!
//! Rows are left-aligned and listed top to bottom. A well-formed staircase
//! has non-decreasing widths, so row 0 is the shortest and the last row is
//! the widest. Squares are always cut from the exposed end of the cursor
//! row, extending downward over the next `size - 1` rows.
//!
//! # Examples
//!
//! ```
//! use staircase_tilings::geometry::Shape;
//!
//! let mut shape = Shape::new(vec![2, 2, 3]);
//! assert_eq!(shape.max_tile_size(), 2);
//! assert!(shape.can_remove(2));
//!
//! shape.remove(2);
//! assert_eq!(shape.widths(), &[0, 0, 3]);
//!
//! shape.clean();
//! assert_eq!(shape.widths(), &[3]);
//! ```

use crate::trail::Obligation;
use std::fmt;

/// Width of one row.
///
/// Signed, because shapes that are not staircases can drive intermediate
/// widths below zero while the engine is still exploring them.
pub type Width = i32;

/// The region still to be tiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    widths: Vec<Width>,
    cursor: usize,
}

impl Shape {
    /// Create a shape with the cursor on the top row.
    pub fn new(widths: Vec<Width>) -> Self {
        Self { widths, cursor: 0 }
    }

    /// Row widths, top to bottom.
    pub fn widths(&self) -> &[Width] {
        &self.widths
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Row at which the next square is anchored.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the anchor row. The caller keeps it in range.
    pub fn set_cursor(&mut self, row: usize) {
        self.cursor = row;
    }

    /// True when the remaining region admits exactly one tiling.
    ///
    /// That is a single row, or every row but the last at most one cell
    /// wide (an "L"), which only unit squares can fill.
    pub fn is_unbranchable(&self) -> bool {
        match self.widths.len() {
            0 | 1 => true,
            n => self.widths[n - 2] <= 1,
        }
    }

    /// Largest square that could be anchored at the cursor.
    ///
    /// Bounded by the cursor row's width and by the rows left below it.
    pub fn max_tile_size(&self) -> usize {
        let Some(&width) = self.widths.get(self.cursor) else {
            return 0;
        };
        let rows_left = self.widths.len() - self.cursor;
        usize::try_from(width).unwrap_or(0).min(rows_left)
    }

    /// True when a square of `size` can be cut at the cursor right now.
    ///
    /// The cursor row must stay at least as wide as the row above it, and
    /// the `size` rows the square covers must all end flush.
    pub fn can_remove(&self, size: usize) -> bool {
        let current = self.widths[self.cursor];
        if self.cursor > 0 && self.widths[self.cursor - 1] > current - size as Width {
            return false;
        }
        self.widths[self.cursor + size - 1] == current
    }

    /// Cut a square of `size` at the cursor.
    pub fn remove(&mut self, size: usize) {
        for width in &mut self.widths[self.cursor..self.cursor + size] {
            *width -= size as Width;
        }
    }

    /// True when nothing is left to tile.
    pub fn is_empty(&self) -> bool {
        self.widths.last().map_or(true, |&last| last == 0)
    }

    /// Drop fully consumed rows from the top.
    ///
    /// The cursor and any pending obligations keep their raw row indices.
    pub fn clean(&mut self) {
        let consumed = self.widths.iter().take_while(|&&w| w == 0).count();
        self.widths.drain(..consumed);
    }

    /// True when cutting a square of `size` at the cursor keeps `pending`
    /// satisfiable later.
    ///
    /// The square must not push the obligation's anchor row past the end of
    /// its bottom row, and it must keep the cursor row at least as wide as
    /// the row above.
    pub fn valid_against(&self, pending: &Obligation, size: usize) -> bool {
        let top = self.widths[pending.row];
        let bottom = self.widths[pending.row + pending.tile_size - 1];
        if size as Width + top > bottom {
            return false;
        }
        self.cursor == 0 || self.widths[self.cursor] - size as Width >= self.widths[self.cursor - 1]
    }

    /// First row at or after `from` that is strictly wider than the cursor row.
    pub fn next_step_up(&self, from: usize) -> Option<usize> {
        let current = self.widths[self.cursor];
        (from..self.widths.len()).find(|&row| self.widths[row] > current)
    }

    /// Move the cursor to [`next_step_up`](Self::next_step_up), if there is one.
    pub fn advance_to_step_up(&mut self, from: usize) {
        if let Some(row) = self.next_step_up(from) {
            self.cursor = row;
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, width) in self.widths.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if i == self.cursor {
                write!(f, ">")?;
            }
            write!(f, "{}", width)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbranchable() {
        assert!(Shape::new(vec![]).is_unbranchable());
        assert!(Shape::new(vec![5]).is_unbranchable());
        assert!(Shape::new(vec![1, 7]).is_unbranchable());
        assert!(Shape::new(vec![0, 1, 1, 4]).is_unbranchable());
        assert!(!Shape::new(vec![2, 1]).is_unbranchable());
        assert!(!Shape::new(vec![2, 2]).is_unbranchable());
    }

    #[test]
    fn test_max_tile_size() {
        let mut shape = Shape::new(vec![3, 3, 5, 5]);
        assert_eq!(shape.max_tile_size(), 3);
        shape.set_cursor(2);
        assert_eq!(shape.max_tile_size(), 2);
        shape.set_cursor(4);
        assert_eq!(shape.max_tile_size(), 0);
    }

    #[test]
    fn test_can_remove_requires_flush_rows() {
        let shape = Shape::new(vec![2, 3, 3]);
        assert!(shape.can_remove(1));
        assert!(!shape.can_remove(2));
    }

    #[test]
    fn test_can_remove_keeps_row_above_narrower() {
        let mut shape = Shape::new(vec![2, 3, 3]);
        shape.set_cursor(1);
        // 3 - 1 = 2 still matches the row above, 3 - 2 = 1 would not.
        assert!(shape.can_remove(1));
        assert!(!shape.can_remove(2));
    }

    #[test]
    fn test_remove_keeps_staircase() {
        let mut shape = Shape::new(vec![1, 4, 4, 4]);
        shape.set_cursor(1);
        assert!(shape.can_remove(3));
        shape.remove(3);
        assert_eq!(shape.widths(), &[1, 1, 1, 1]);
        assert!(shape.widths()[0] <= shape.widths()[1]);
    }

    #[test]
    fn test_is_empty() {
        assert!(Shape::new(vec![]).is_empty());
        assert!(Shape::new(vec![0, 0]).is_empty());
        assert!(!Shape::new(vec![0, 3]).is_empty());
    }

    #[test]
    fn test_clean_strips_leading_zero_rows_only() {
        let mut shape = Shape::new(vec![0, 0, 2, 0, 3]);
        shape.clean();
        assert_eq!(shape.widths(), &[2, 0, 3]);

        let mut all_zero = Shape::new(vec![0, 0]);
        all_zero.clean();
        assert_eq!(all_zero.len(), 0);
    }

    #[test]
    fn test_valid_against() {
        // A 2-square deferred from row 0 needs row 0 to stay short enough to
        // become flush with row 1 later.
        let shape = Shape::new(vec![2, 4, 4]);
        let pending = Obligation::new(2, 0);
        assert!(shape.valid_against(&pending, 1));
        assert!(shape.valid_against(&pending, 2));

        let mut lower = Shape::new(vec![2, 4, 4]);
        lower.set_cursor(1);
        assert!(lower.valid_against(&pending, 2));
        assert!(!lower.valid_against(&pending, 3));
    }

    #[test]
    fn test_next_step_up() {
        let mut shape = Shape::new(vec![1, 1, 3, 3, 4]);
        assert_eq!(shape.next_step_up(1), Some(2));
        shape.set_cursor(2);
        assert_eq!(shape.next_step_up(3), Some(4));
        shape.set_cursor(4);
        assert_eq!(shape.next_step_up(0), None);
        shape.advance_to_step_up(0);
        assert_eq!(shape.cursor(), 4);
    }

    #[test]
    fn test_display_marks_cursor() {
        let mut shape = Shape::new(vec![1, 2, 3]);
        shape.set_cursor(1);
        assert_eq!(format!("{}", shape), "[1 >2 3]");
    }
}

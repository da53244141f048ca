// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reading a problem.
//!
//! The input is a whitespace separated list of integers: the row count `n`,
//! the declared column count `m`, then `n` row widths from top to bottom.
//! `m` is kept but not used. Anything after the last width is ignored.
//!
//! # Example
//!
//! ```
//! use staircase_tilings::input::Problem;
//!
//! let problem = Problem::parse("3 3\n1 2 3\n").unwrap();
//! assert_eq!(problem.widths, vec![1, 2, 3]);
//! assert_eq!(problem.shape().len(), 3);
//! ```

pub mod errors;

pub use errors::InputError;

use crate::geometry::{Shape, Width};
use std::io::Read;
use std::str::{FromStr, SplitWhitespace};

/// A parsed problem instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub rows: usize,
    pub columns: usize,
    pub widths: Vec<Width>,
}

fn next_value<T: FromStr>(tokens: &mut SplitWhitespace<'_>, expected: &str) -> Result<T, InputError> {
    let token = tokens.next().ok_or_else(|| InputError::MissingToken {
        expected: expected.to_string(),
    })?;
    token.parse().map_err(|_| InputError::InvalidInteger {
        expected: expected.to_string(),
        token: token.to_string(),
    })
}

impl Problem {
    /// Parse a problem from text.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut tokens = text.split_whitespace();
        let rows: usize = next_value(&mut tokens, "row count")?;
        let columns: usize = next_value(&mut tokens, "column count")?;

        // The row count is untrusted until the widths are actually read.
        let mut widths = Vec::with_capacity(rows.min(1 << 16));
        for row in 0..rows {
            let value: i64 = next_value(&mut tokens, &format!("width of row {}", row))?;
            if value < 0 {
                return Err(InputError::NegativeWidth { row, value });
            }
            let width = Width::try_from(value).map_err(|_| InputError::InvalidInteger {
                expected: format!("width of row {}", row),
                token: value.to_string(),
            })?;
            widths.push(width);
        }

        Ok(Self {
            rows,
            columns,
            widths,
        })
    }

    /// Read all of `reader` and parse it.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// The initial search state, cursor on the top row.
    pub fn shape(&self) -> Shape {
        Shape::new(self.widths.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let problem = Problem::parse("2 4\n2 2\n").unwrap();
        assert_eq!(problem.rows, 2);
        assert_eq!(problem.columns, 4);
        assert_eq!(problem.widths, vec![2, 2]);
    }

    #[test]
    fn test_parse_no_rows() {
        let problem = Problem::parse("0 0").unwrap();
        assert!(problem.widths.is_empty());
        assert!(problem.shape().is_empty());
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        let problem = Problem::parse("1 5 5 9 9").unwrap();
        assert_eq!(problem.widths, vec![5]);
    }

    #[test]
    fn test_missing_width() {
        let err = Problem::parse("3 3 1 2").unwrap_err();
        assert!(matches!(err, InputError::MissingToken { .. }));
        assert_eq!(err.to_string(), "missing width of row 2");
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            Problem::parse("").unwrap_err(),
            InputError::MissingToken { .. }
        ));
        assert!(matches!(
            Problem::parse("4").unwrap_err(),
            InputError::MissingToken { .. }
        ));
    }

    #[test]
    fn test_invalid_integer() {
        let err = Problem::parse("2 2 1 x").unwrap_err();
        assert_eq!(err.to_string(), "invalid width of row 1: \"x\"");
        assert!(matches!(
            Problem::parse("-1 2").unwrap_err(),
            InputError::InvalidInteger { .. }
        ));
    }

    #[test]
    fn test_negative_width() {
        let err = Problem::parse("2 2 1 -3").unwrap_err();
        assert!(matches!(err, InputError::NegativeWidth { row: 1, value: -3 }));
    }

    #[test]
    fn test_read_from() {
        let problem = Problem::read_from("3 3 1 2 3".as_bytes()).unwrap();
        assert_eq!(problem.widths, vec![1, 2, 3]);
    }
}

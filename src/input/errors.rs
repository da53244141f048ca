// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for reading a problem.

use thiserror::Error;

/// Errors that can occur while parsing the input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Input ended before an expected value.
    #[error("missing {expected}")]
    MissingToken { expected: String },

    /// A token was not an integer of the expected kind.
    #[error("invalid {expected}: {token:?}")]
    InvalidInteger { expected: String, token: String },

    /// Row widths cannot be negative.
    #[error("row {row} has negative width {value}")]
    NegativeWidth { row: usize, value: i64 },

    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoization layer.
//!
//! - Fingerprints: 64-bit hashes of a shape, with or without its obligations
//! - MemoTables: two fingerprint → count maps, chosen by whether any
//!   obligation is pending

pub mod fingerprint;
pub mod tables;

pub use fingerprint::{fingerprint, fingerprint_with_obligations};
pub use tables::{MemoTable, MemoTables};

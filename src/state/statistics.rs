// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the engine as it
//! walks the search tree. They never affect the count.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Invocations of the recursive search.
    SolveCalls,
    /// States answered with 1 because they were empty or unbranchable.
    TerminalLeaves,
    /// Lookups answered by the settled table.
    SettledHits,
    /// Lookups answered by the pending table.
    PendingHits,
    /// Squares pushed as new obligations.
    Deferrals,
    /// Obligations popped and applied.
    ResolvedObligations,
    /// New entries written to either table.
    StoredEntries,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for counter in Counters::iter() {
            let name: &'static str = counter.into();
            writeln!(f, "{}: {}", name, self.get(counter))?;
        }
        Ok(())
    }
}

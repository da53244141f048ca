// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fingerprint → count tables.
//!
//! There are two tables: one for states with no pending obligations
//! ([`MemoTable::Settled`]) and one for states with a non-empty obligation
//! stack ([`MemoTable::Pending`]). Entries are written once; a second store
//! under the same fingerprint leaves the first value in place.

use rustc_hash::FxHashMap;

/// Which of the two tables a state belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoTable {
    /// The obligation stack is empty.
    Settled,
    /// At least one obligation is pending.
    Pending,
}

/// Both memoization tables.
///
/// Keys are already well mixed, so the tables use the Fx hasher rather than
/// SipHash.
#[derive(Debug, Default, Clone)]
pub struct MemoTables {
    settled: FxHashMap<u64, u64>,
    pending: FxHashMap<u64, u64>,
}

impl MemoTables {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, which: MemoTable) -> &FxHashMap<u64, u64> {
        match which {
            MemoTable::Settled => &self.settled,
            MemoTable::Pending => &self.pending,
        }
    }

    fn table_mut(&mut self, which: MemoTable) -> &mut FxHashMap<u64, u64> {
        match which {
            MemoTable::Settled => &mut self.settled,
            MemoTable::Pending => &mut self.pending,
        }
    }

    /// Stored count for `key`, if any.
    pub fn lookup(&self, which: MemoTable, key: u64) -> Option<u64> {
        self.table(which).get(&key).copied()
    }

    /// Store `count` under `key` unless the key is already present.
    ///
    /// Returns true if a new entry was written.
    pub fn store(&mut self, which: MemoTable, key: u64, count: u64) -> bool {
        let table = self.table_mut(which);
        if table.contains_key(&key) {
            return false;
        }
        table.insert(key, count);
        true
    }

    /// Number of entries in one table.
    pub fn len(&self, which: MemoTable) -> usize {
        self.table(which).len()
    }

    pub fn is_empty(&self) -> bool {
        self.settled.is_empty() && self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.settled.clear();
        self.pending.clear();
    }
}

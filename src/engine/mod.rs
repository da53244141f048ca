// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration engine.
//!
//! Counts the ways to cut a staircase into squares. Each search state is a
//! [`Shape`] plus an [`ObligationStack`] of squares that were chosen but could
//! not be cut yet.
//!
//! # Algorithm
//!
//! At each state the engine:
//! 1. Strips fully consumed rows from the top
//! 2. Returns 1 if nothing is left or the rest has a single tiling
//! 3. Returns the memoized count if this state was seen before
//! 4. Otherwise tries every square size at the cursor and sums the counts
//!
//! A square that cannot be cut yet (the rows it covers are not flush) is
//! pushed as an obligation, and the cursor moves down to the next row that
//! is wider than the cursor row. When a square is cut while obligations are
//! pending, the engine retries them from the top. Each obligation that now
//! fits is applied and popped. The first one that still does not fit stays
//! on the stack and the search continues below it.
//!
//! Counts are stored by the caller of each recursive step, keyed on the
//! child state, so the lookup in step 3 always finds entries written one
//! level up.
//!
//! # Example
//!
//! ```
//! use staircase_tilings::context::SearchContext;
//! use staircase_tilings::engine::count_tilings;
//! use staircase_tilings::geometry::Shape;
//!
//! let mut ctx = SearchContext::new();
//! assert_eq!(count_tilings(&mut ctx, &Shape::new(vec![4, 4, 4, 4])), 40);
//! ```

use crate::context::SearchContext;
use crate::geometry::Shape;
use crate::memo::{fingerprint, fingerprint_with_obligations, MemoTable};
use crate::state::Counters;
use crate::trail::{Obligation, ObligationStack};

/// Number of square tilings of `shape`.
///
/// An empty shape (no rows, or a zero-width last row) has no tilings and
/// returns 0 without searching.
pub fn count_tilings(ctx: &mut SearchContext, shape: &Shape) -> u64 {
    if shape.is_empty() {
        log::debug!("shape {} is empty, nothing to tile", shape);
        return 0;
    }
    let count = count_completions(ctx, shape, &ObligationStack::new());
    log::debug!(
        "shape {} has {} tilings ({} memo entries)",
        shape,
        count,
        ctx.statistics.get(Counters::StoredEntries)
    );
    count
}

/// Number of ways to finish the search from an arbitrary state.
///
/// Unlike [`count_tilings`], an empty shape counts as one (finished) tiling.
pub fn count_completions(ctx: &mut SearchContext, shape: &Shape, pending: &ObligationStack) -> u64 {
    let mut shape = shape.clone();
    solve(ctx, &mut shape, pending)
}

/// Table and fingerprint for a state.
fn memo_key(shape: &Shape, pending: &ObligationStack) -> (MemoTable, u64) {
    if pending.is_empty() {
        (MemoTable::Settled, fingerprint(shape.widths()))
    } else {
        (
            MemoTable::Pending,
            fingerprint_with_obligations(shape.widths(), pending),
        )
    }
}

fn solve(ctx: &mut SearchContext, shape: &mut Shape, pending: &ObligationStack) -> u64 {
    ctx.statistics.increment(Counters::SolveCalls);
    shape.clean();

    if shape.is_empty() || shape.is_unbranchable() {
        ctx.statistics.increment(Counters::TerminalLeaves);
        return 1;
    }

    if ctx.options.memoize {
        let (table, key) = memo_key(shape, pending);
        if let Some(count) = ctx.memo.lookup(table, key) {
            ctx.statistics.increment(match table {
                MemoTable::Settled => Counters::SettledHits,
                MemoTable::Pending => Counters::PendingHits,
            });
            return count;
        }
    }

    let mut total: u64 = 0;
    for size in 1..=shape.max_tile_size() {
        if let Some(top) = pending.top() {
            if !shape.valid_against(top, size) {
                continue;
            }
        }
        total = total.wrapping_add(try_square(ctx, shape, pending, size));
    }
    total
}

/// Count the branch that cuts (or defers) a square of `size` at the cursor.
fn try_square(ctx: &mut SearchContext, shape: &Shape, pending: &ObligationStack, size: usize) -> u64 {
    let mut child = shape.clone();

    if !shape.can_remove(size) {
        ctx.statistics.increment(Counters::Deferrals);
        let deferred = pending.push(Obligation::new(size, shape.cursor()));
        child.advance_to_step_up(shape.cursor() + 1);
        log::trace!("defer {} in {}, pending {}", size, shape, deferred);
        return solve_and_store(ctx, child, &deferred);
    }

    child.remove(size);
    if pending.is_empty() {
        return solve_and_store(ctx, child, pending);
    }
    resolve_pending(ctx, child, pending)
}

/// Apply pending obligations from the top until one does not fit.
fn resolve_pending(ctx: &mut SearchContext, mut shape: Shape, pending: &ObligationStack) -> u64 {
    let mut rest = pending.clone();
    let mut last_row = shape.cursor();

    while let Some((obligation, below)) = rest.pop() {
        shape.set_cursor(obligation.row);
        if !shape.can_remove(obligation.tile_size) {
            shape.advance_to_step_up(last_row);
            log::trace!("{} still blocked in {}", obligation, shape);
            return solve_and_store(ctx, shape, &rest);
        }
        shape.remove(obligation.tile_size);
        ctx.statistics.increment(Counters::ResolvedObligations);
        log::trace!("resolved {} leaving {}", obligation, shape);
        last_row = obligation.row;
        rest = below;
    }

    solve_and_store(ctx, shape, &rest)
}

/// Recurse into a child state and memoize its count.
fn solve_and_store(ctx: &mut SearchContext, mut shape: Shape, pending: &ObligationStack) -> u64 {
    let count = solve(ctx, &mut shape, pending);
    if ctx.options.memoize {
        // `solve` cleaned the shape, so this is the key the child looks up.
        let (table, key) = memo_key(&shape, pending);
        if ctx.memo.store(table, key, count) {
            ctx.statistics.increment(Counters::StoredEntries);
        }
    }
    count
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use staircase_tilings::{count_tilings, SearchContext, SearchOptions, Shape};

/// Count square tilings by filling an explicit cell grid.
///
/// Always covers the first free cell in row-major order with every square
/// that fits there. Slow, but independent of the engine's bookkeeping.
pub fn brute_force_tilings(widths: &[i32]) -> u64 {
    let mut filled: Vec<Vec<bool>> = widths
        .iter()
        .map(|&w| vec![false; w.max(0) as usize])
        .collect();
    fill(&mut filled)
}

fn fill(filled: &mut [Vec<bool>]) -> u64 {
    let first_free = filled.iter().enumerate().find_map(|(row, cells)| {
        cells.iter().position(|&taken| !taken).map(|col| (row, col))
    });
    let Some((row, col)) = first_free else {
        return 1;
    };

    let mut total = 0;
    let mut size = 1;
    while fits(filled, row, col, size) {
        set_square(filled, row, col, size, true);
        total += fill(filled);
        set_square(filled, row, col, size, false);
        size += 1;
    }
    total
}

fn fits(filled: &[Vec<bool>], row: usize, col: usize, size: usize) -> bool {
    row + size <= filled.len()
        && filled[row..row + size]
            .iter()
            .all(|cells| col + size <= cells.len() && cells[col..col + size].iter().all(|&t| !t))
}

fn set_square(filled: &mut [Vec<bool>], row: usize, col: usize, size: usize, value: bool) {
    for cells in &mut filled[row..row + size] {
        for cell in &mut cells[col..col + size] {
            *cell = value;
        }
    }
}

/// Engine count on a fresh context.
pub fn engine_count(widths: &[i32]) -> u64 {
    let mut ctx = SearchContext::new();
    count_tilings(&mut ctx, &Shape::new(widths.to_vec()))
}

/// Engine count with memoization turned off.
pub fn engine_count_unmemoized(widths: &[i32]) -> u64 {
    let mut ctx = SearchContext::with_options(SearchOptions { memoize: false });
    count_tilings(&mut ctx, &Shape::new(widths.to_vec()))
}

/// `n` rows of width `n`.
pub fn square(n: i32) -> Vec<i32> {
    vec![n; n as usize]
}

/// Rows of width 1, 2, ..., n.
pub fn staircase(n: i32) -> Vec<i32> {
    (1..=n).collect()
}

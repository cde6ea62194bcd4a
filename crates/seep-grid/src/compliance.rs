//! Grid invariant test helpers.
//!
//! These functions verify properties every grid state must satisfy, no
//! matter which sites have been opened in which order. Reused by the unit
//! and property tests in `grid.rs`.

use crate::grid::PercolationGrid;

/// Assert that every full site is open.
pub fn assert_full_implies_open(grid: &mut PercolationGrid) {
    let side = grid.side();
    for row in 1..=side {
        for col in 1..=side {
            if grid.is_full(row, col).unwrap() {
                assert!(
                    grid.is_open(row, col).unwrap(),
                    "site ({row}, {col}) is full but not open"
                );
            }
        }
    }
}

/// Assert that the running open count matches a full bitmap scan.
pub fn assert_open_count_consistent(grid: &mut PercolationGrid) {
    let side = grid.side();
    let mut scanned = 0;
    for row in 1..=side {
        for col in 1..=side {
            if grid.is_open(row, col).unwrap() {
                scanned += 1;
            }
        }
    }
    assert_eq!(
        grid.open_site_count(),
        scanned,
        "open_site_count diverged from the open bitmap"
    );
}

/// Assert that the grid percolates exactly when some bottom-row site is
/// full. This is the definition of percolation stated in terms of the
/// fullness forest, so it fails if backwash ever creeps in.
pub fn assert_percolation_consistent(grid: &mut PercolationGrid) {
    let side = grid.side();
    let mut full_bottom_site = false;
    for col in 1..=side {
        if grid.is_full(side, col).unwrap() {
            full_bottom_site = true;
            break;
        }
    }
    assert_eq!(
        grid.percolates(),
        full_bottom_site,
        "percolates() disagrees with bottom-row fullness"
    );
}

/// Assert that reopening every open site changes nothing.
pub fn assert_reopen_is_noop(grid: &mut PercolationGrid) {
    let side = grid.side();
    let count = grid.open_site_count();
    let percolated = grid.percolates();
    for row in 1..=side {
        for col in 1..=side {
            if grid.is_open(row, col).unwrap() {
                grid.open(row, col).unwrap();
            }
        }
    }
    assert_eq!(grid.open_site_count(), count, "reopen changed the count");
    assert_eq!(grid.percolates(), percolated, "reopen changed percolation");
}

/// Run all four invariant checks on a grid.
pub fn run_full_compliance(grid: &mut PercolationGrid) {
    assert_full_implies_open(grid);
    assert_open_count_consistent(grid);
    assert_percolation_consistent(grid);
    assert_reopen_is_noop(grid);
}

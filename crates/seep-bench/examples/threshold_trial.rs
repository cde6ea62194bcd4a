//! Single Monte-Carlo percolation trial.
//!
//! Opens uniformly random sites of a 32x32 grid until it percolates, then
//! reports the fraction of open sites as the trial's threshold estimate.
//! Repeating this over many seeds and averaging approaches the site
//! percolation threshold (~0.5927 for a square lattice).

use seep_bench::open_sequence;
use seep_grid::PercolationGrid;

fn main() {
    let side = 32u32;
    let mut grid = PercolationGrid::new(side).unwrap();

    for (row, col) in open_sequence(side, 7) {
        grid.open(row, col).unwrap();
        if grid.percolates() {
            break;
        }
    }

    let threshold = grid.open_site_count() as f64 / grid.cell_count() as f64;
    println!("=== Seep Percolation Trial ===");
    println!("side: {side}");
    println!("open sites at percolation: {}", grid.open_site_count());
    println!("threshold estimate: {threshold:.4}");
}

//! Seep: incremental percolation connectivity for n-by-n site lattices.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Seep sub-crates. For most users, adding `seep` as a single
//! dependency is sufficient.
//!
//! A [`grid::PercolationGrid`] models fluid seeping through porous media:
//! sites open one at a time, and the grid answers whether an open site is
//! *full* (connected to the top row through open sites) and whether the
//! whole system *percolates* (an open path spans top to bottom). Both
//! queries cost amortized near-constant time, so a Monte-Carlo driver can
//! run thousands of trials cheaply.
//!
//! # Quick start
//!
//! ```rust
//! use seep::prelude::*;
//!
//! let mut grid = PercolationGrid::new(3).unwrap();
//! assert!(!grid.percolates());
//!
//! for row in 1..=3 {
//!     grid.open(row, 1).unwrap();
//! }
//!
//! assert!(grid.percolates());
//! assert!(grid.is_full(3, 1).unwrap());
//! assert_eq!(grid.open_site_count(), 3);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`dsf`] | `seep-dsf` | Generic disjoint-set forest and its error type |
//! | [`grid`] | `seep-grid` | Percolation grid, grid errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Generic disjoint-set forest (`seep-dsf`).
///
/// [`dsf::DisjointSetForest`] is independent of grid semantics and can be
/// reused for any incremental-connectivity problem over dense labels.
pub use seep_dsf as dsf;

/// Percolation grid over dual forests (`seep-grid`).
///
/// [`grid::PercolationGrid`] is the main entry point; it owns the site
/// bitmap and both forests.
pub use seep_grid as grid;

/// Common imports for typical Seep usage.
///
/// ```rust
/// use seep::prelude::*;
/// ```
pub mod prelude {
    pub use seep_dsf::{DisjointSetForest, ForestError};
    pub use seep_grid::{GridError, PercolationGrid};
}

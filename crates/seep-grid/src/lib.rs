//! Percolation grid over dual disjoint-set forests.
//!
//! [`PercolationGrid`] answers two questions about an n-by-n lattice of
//! sites that open incrementally and never close:
//!
//! - **Fullness**: is a given open site connected to the top row through
//!   a chain of open sites?
//! - **Percolation**: does any open path span the top row to the bottom
//!   row?
//!
//! Both queries run in amortized near-constant time by maintaining two
//! forests from [`seep_dsf`] over the sites plus virtual endpoints. The
//! fullness forest omits the bottom endpoint, which keeps a site from
//! being reported full merely because the grid percolates somewhere else
//! (the "backwash" failure).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::GridError;
pub use grid::PercolationGrid;

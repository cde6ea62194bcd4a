//! Disjoint-set forests for incremental connectivity queries.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! [`DisjointSetForest`], the partition structure the percolation grid
//! builds on, kept free of any lattice semantics so it can be tested
//! and reused in isolation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod forest;

pub use error::ForestError;
pub use forest::DisjointSetForest;

//! Error types for forest operations.

use std::fmt;

/// Errors arising from forest merges and queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForestError {
    /// A label lies outside the forest's fixed universe.
    ElementOutOfBounds {
        /// The offending label.
        element: usize,
        /// Universe size; valid labels are `[0, len)`.
        len: usize,
    },
}

impl fmt::Display for ForestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementOutOfBounds { element, len } => {
                write!(f, "element {element} out of bounds for a forest of {len} elements")
            }
        }
    }
}

impl std::error::Error for ForestError {}

//! Error types for grid construction and site operations.

use seep_dsf::ForestError;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or coordinate-accepting operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero sites.
    EmptyGrid,
    /// The requested side exceeds the supported maximum.
    SideTooLarge {
        /// The requested side.
        value: u32,
        /// The largest supported side.
        max: u32,
    },
    /// A coordinate is outside the grid.
    CoordOutOfBounds {
        /// Which axis is invalid: `"row"` or `"col"`.
        axis: &'static str,
        /// The offending coordinate value.
        value: u32,
        /// The grid side; valid coordinates are `[1, side]`.
        side: u32,
    },
    /// A forest label fell outside its universe.
    Forest {
        /// The underlying forest error.
        reason: ForestError,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one site"),
            Self::SideTooLarge { value, max } => {
                write!(f, "side ({value}) exceeds the largest supported side ({max})")
            }
            Self::CoordOutOfBounds { axis, value, side } => {
                write!(f, "{axis} ({value}) out of bounds: valid range is [1, {side}]")
            }
            Self::Forest { reason } => write!(f, "forest label error: {reason}"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Forest { reason } => Some(reason),
            _ => None,
        }
    }
}

impl From<ForestError> for GridError {
    fn from(reason: ForestError) -> Self {
        Self::Forest { reason }
    }
}

//! The n-by-n percolation lattice and its site operations.

use crate::error::GridError;
use seep_dsf::DisjointSetForest;
use smallvec::SmallVec;

/// Forest label reserved for the top virtual endpoint in both forests.
const TOP: usize = 0;

/// An n-by-n lattice of sites that open incrementally, answering fullness
/// and percolation queries in amortized near-constant time.
///
/// Sites are addressed by 1-based `(row, col)` with row 1 at the top. Each
/// site is blocked until [`open`](Self::open) is called on it; opening is
/// irreversible. Two forests back the queries:
///
/// - the *connectivity* forest spans every site plus a top and a bottom
///   virtual endpoint, and answers [`percolates`](Self::percolates);
/// - the *fullness* forest spans every site plus the top endpoint only,
///   and answers [`is_full`](Self::is_full).
///
/// The fullness forest has no bottom endpoint on purpose. With a single
/// shared forest, once the grid percolates the bottom endpoint joins the
/// top's component, and any open site touching the bottom row would then
/// test as "connected to top" without an actual path (the backwash
/// failure). Keeping a second forest costs twice the union work per open
/// but makes the bug structurally impossible.
///
/// Mutating and path-compressing operations take `&mut self`; one caller
/// owns and drives a grid instance. Independent trials should construct
/// independent instances.
///
/// # Examples
///
/// ```
/// use seep_grid::PercolationGrid;
///
/// let mut grid = PercolationGrid::new(3).unwrap();
/// assert!(!grid.percolates());
///
/// for row in 1..=3 {
///     grid.open(row, 1).unwrap();
/// }
///
/// assert!(grid.percolates());
/// assert!(grid.is_full(3, 1).unwrap());
/// assert_eq!(grid.open_site_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct PercolationGrid {
    side: u32,
    open: Vec<bool>,
    open_count: usize,
    connectivity: DisjointSetForest,
    fullness: DisjointSetForest,
}

impl PercolationGrid {
    /// Maximum grid side: the forest universes hold up to `side² + 2`
    /// labels, which must fit `usize` on 32-bit targets.
    pub const MAX_SIDE: u32 = u16::MAX as u32;

    /// Create a grid of `side * side` blocked sites.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for a zero side, or
    /// `Err(GridError::SideTooLarge)` past [`MAX_SIDE`](Self::MAX_SIDE).
    ///
    /// # Examples
    ///
    /// ```
    /// use seep_grid::PercolationGrid;
    ///
    /// let grid = PercolationGrid::new(16).unwrap();
    /// assert_eq!(grid.side(), 16);
    /// assert_eq!(grid.cell_count(), 256);
    /// assert_eq!(grid.open_site_count(), 0);
    /// ```
    pub fn new(side: u32) -> Result<Self, GridError> {
        if side == 0 {
            return Err(GridError::EmptyGrid);
        }
        if side > Self::MAX_SIDE {
            return Err(GridError::SideTooLarge {
                value: side,
                max: Self::MAX_SIDE,
            });
        }

        let cells = (side as usize) * (side as usize);
        let mut connectivity = DisjointSetForest::new(cells + 2);
        let mut fullness = DisjointSetForest::new(cells + 1);
        let bottom = cells + 1;

        // Attach the endpoints to their rows up front, open or not; row-1
        // labels are 1..=side and row-n labels are cells-side+1..=cells.
        for col in 1..=side as usize {
            let first_row = col;
            let last_row = cells - side as usize + col;
            connectivity.union(TOP, first_row)?;
            connectivity.union(bottom, last_row)?;
            fullness.union(TOP, first_row)?;
        }

        Ok(Self {
            side,
            open: vec![false; cells],
            open_count: 0,
            connectivity,
            fullness,
        })
    }

    /// Grid side length.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Total number of sites.
    pub fn cell_count(&self) -> usize {
        (self.side as usize) * (self.side as usize)
    }

    /// Number of sites opened so far. Reopening a site does not count.
    pub fn open_site_count(&self) -> usize {
        self.open_count
    }

    /// Open the site at `(row, col)`, joining it with every already-open
    /// 4-neighbour in both forests. A no-op if the site is already open.
    ///
    /// Returns `Err(GridError::CoordOutOfBounds)` for a coordinate outside
    /// `[1, side]`, leaving the grid untouched.
    pub fn open(&mut self, row: u32, col: u32) -> Result<(), GridError> {
        self.check_coord(row, col)?;
        let rank = self.site_rank(row, col);
        if self.open[rank] {
            return Ok(());
        }

        let here = self.forest_index(row, col);
        for neighbour in self.open_neighbour_indices(row, col) {
            self.connectivity.union(here, neighbour)?;
            self.fullness.union(here, neighbour)?;
        }

        self.open[rank] = true;
        self.open_count += 1;
        Ok(())
    }

    /// Is the site at `(row, col)` open?
    pub fn is_open(&self, row: u32, col: u32) -> Result<bool, GridError> {
        self.check_coord(row, col)?;
        Ok(self.open[self.site_rank(row, col)])
    }

    /// Is the site at `(row, col)` full, that is, open and connected to
    /// the top row through a chain of open sites?
    ///
    /// Answered from the fullness forest, whose missing bottom endpoint
    /// is what rules out backwash.
    pub fn is_full(&mut self, row: u32, col: u32) -> Result<bool, GridError> {
        if !self.is_open(row, col)? {
            return Ok(false);
        }
        let site = self.forest_index(row, col);
        Ok(self.fullness.connected(TOP, site)?)
    }

    /// Does an open path connect the top row to the bottom row?
    ///
    /// A 1x1 grid is answered from the open bitmap directly: construction
    /// attaches both virtual endpoints to the single site, so the
    /// connectivity forest would report a fully blocked grid as
    /// percolating.
    pub fn percolates(&mut self) -> bool {
        if self.side == 1 {
            return self.open[0];
        }
        let bottom = self.cell_count() + 1;
        self.connectivity
            .connected(TOP, bottom)
            .expect("virtual endpoints are members of the connectivity forest")
    }

    fn check_coord(&self, row: u32, col: u32) -> Result<(), GridError> {
        if row < 1 || row > self.side {
            return Err(GridError::CoordOutOfBounds {
                axis: "row",
                value: row,
                side: self.side,
            });
        }
        if col < 1 || col > self.side {
            return Err(GridError::CoordOutOfBounds {
                axis: "col",
                value: col,
                side: self.side,
            });
        }
        Ok(())
    }

    /// Row-major rank of a validated coordinate in the open bitmap.
    fn site_rank(&self, row: u32, col: u32) -> usize {
        (row as usize - 1) * self.side as usize + (col as usize - 1)
    }

    /// Forest label of a validated coordinate. Slot 0 is the top endpoint,
    /// so site labels are shifted up by one.
    fn forest_index(&self, row: u32, col: u32) -> usize {
        self.site_rank(row, col) + 1
    }

    /// Forest labels of the already-open 4-neighbours of `(row, col)`.
    /// Out-of-bounds directions are omitted.
    fn open_neighbour_indices(&self, row: u32, col: u32) -> SmallVec<[usize; 4]> {
        let offsets: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let mut result = SmallVec::new();
        for (dr, dc) in offsets {
            let nr = row as i32 + dr;
            let nc = col as i32 + dc;
            if nr < 1 || nc < 1 || nr > self.side as i32 || nc > self.side as i32 {
                continue;
            }
            let (nr, nc) = (nr as u32, nc as u32);
            if self.open[self.site_rank(nr, nc)] {
                result.push(self.forest_index(nr, nc));
            }
        }
        result
    }
}

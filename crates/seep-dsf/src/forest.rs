//! Union-find over a fixed universe of dense integer labels.

use crate::error::ForestError;

/// An incremental-connectivity partition of the labels `{0, ..., len-1}`.
///
/// Merges use union-by-size (the smaller tree's root attaches under the
/// larger tree's root, ties broken arbitrarily) and lookups apply path
/// halving, so any sequence of M operations over N elements costs
/// O((N + M) · α(N)), effectively constant per call.
///
/// The universe is fixed at construction and merges cannot be undone,
/// matching monotonic processes where connectivity only ever grows.
/// Queries take `&mut self` because path halving rewrites parent links;
/// a forest is owned and driven by exactly one caller.
///
/// # Examples
///
/// ```
/// use seep_dsf::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4);
/// assert_eq!(forest.components(), 4);
///
/// forest.union(0, 1).unwrap();
/// forest.union(2, 3).unwrap();
/// assert!(forest.connected(0, 1).unwrap());
/// assert!(!forest.connected(1, 2).unwrap());
/// assert_eq!(forest.components(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSetForest {
    /// Create a forest of `len` singleton components.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    /// Number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` for a zero-element universe.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Merge the components containing `a` and `b`.
    ///
    /// A no-op when both labels already share a component. Returns
    /// `Err(ForestError::ElementOutOfBounds)` for a label outside
    /// `[0, len)`, leaving the partition untouched.
    pub fn union(&mut self, a: usize, b: usize) -> Result<(), ForestError> {
        self.check(a)?;
        self.check(b)?;
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return Ok(());
        }
        let (small, large) = if self.size[root_a] < self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.components -= 1;
        Ok(())
    }

    /// Are `a` and `b` currently in the same component?
    ///
    /// Same validation as [`union`](Self::union).
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool, ForestError> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.find(a) == self.find(b))
    }

    /// Representative lookup with path halving: every node on the walk is
    /// re-pointed at its grandparent, so repeated finds flatten the tree.
    /// Callers must have validated `element`.
    fn find(&mut self, mut element: usize) -> usize {
        while self.parent[element] != element {
            self.parent[element] = self.parent[self.parent[element]];
            element = self.parent[element];
        }
        element
    }

    fn check(&self, element: usize) -> Result<(), ForestError> {
        if element >= self.parent.len() {
            return Err(ForestError::ElementOutOfBounds {
                element,
                len: self.parent.len(),
            });
        }
        Ok(())
    }
}

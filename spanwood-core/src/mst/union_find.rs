//! Union-find (disjoint set union) over dense vertex ids.
//!
//! The spanning-forest builder consults this structure for every edge it
//! examines: two endpoints with the same representative would close a cycle.
//! `find` compresses paths fully and `union` merges by rank, so both run in
//! near-constant amortised time.

/// A partition of `0..len` into disjoint sets.
///
/// Ids outside `0..len` are a contract violation and panic.
///
/// # Examples
/// ```
/// use spanwood_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(sets.union(2, 3));
/// assert!(!sets.union(1, 0));
/// assert_eq!(sets.find(1), sets.find(0));
/// assert_ne!(sets.find(1), sets.find(2));
/// assert_eq!(sets.set_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    set_count: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets, each its own representative with rank 0.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            set_count: len,
        }
    }

    /// Number of elements in the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the partition has no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Number of disjoint sets currently in the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn set_count(&self) -> usize { self.set_count }

    /// Returns the representative of `node`'s set, pointing every visited
    /// node directly at it.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The root of lower rank is attached beneath the other. On a rank tie
    /// `right`'s root goes under `left`'s root, whose rank then grows by one.
    /// Returns `false` when both were already in the same set.
    ///
    /// # Panics
    /// Panics when either id is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut parent = self.find(left);
        let mut child = self.find(right);
        if parent == child {
            return false;
        }

        let parent_rank = self.rank[parent];
        let child_rank = self.rank[child];
        if parent_rank < child_rank {
            std::mem::swap(&mut parent, &mut child);
        }
        self.parent[child] = parent;
        if parent_rank == child_rank {
            self.rank[parent] = parent_rank.saturating_add(1);
        }
        self.set_count -= 1;
        true
    }

    /// Returns `true` when `left` and `right` share a representative.
    ///
    /// # Panics
    /// Panics when either id is `>= self.len()`.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }
}

// Union-Find (disjoint sets) over the fixed universe 0..n

use anyhow::anyhow;
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Rule deciding which root survives when two sets are merged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Attach the smaller set under the larger one; weights hold set sizes
    #[default]
    BySize,
    /// Attach the shallower tree under the deeper one; weights hold ranks
    ByRank,
}

impl MergePolicy {
    /// Weight every singleton starts with
    pub fn initial_weight(self) -> usize {
        match self {
            MergePolicy::BySize => 1,
            MergePolicy::ByRank => 0,
        }
    }
}

impl FromStr for MergePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "size" | "by-size" => Ok(MergePolicy::BySize),
            "rank" | "by-rank" => Ok(MergePolicy::ByRank),
            _ => Err(anyhow!(
                "Invalid merge policy '{s}'. Use 'size' (by-size) or 'rank' (by-rank)"
            )),
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergePolicy::BySize => write!(f, "size"),
            MergePolicy::ByRank => write!(f, "rank"),
        }
    }
}

/// Union-Find (disjoint sets) with full path compression.
///
/// Elements are the indices `0..len()`. Every element starts in its own set;
/// [`union`](Self::union) merges sets and nothing ever splits them again.
/// All operations run in amortized O(α(n)).
///
/// `find` rewrites parent pointers, so even queries need `&mut self`. Shared
/// use across threads needs an external lock around every call.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    // Only meaningful at roots: set size or rank depending on `policy`
    weight: Vec<usize>,
    policy: MergePolicy,
    sets: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets merged by size
    pub fn new(n: usize) -> Self {
        Self::with_policy(n, MergePolicy::default())
    }

    /// Create `n` singleton sets merged according to `policy`
    pub fn with_policy(n: usize, policy: MergePolicy) -> Self {
        debug!("Creating disjoint set of {n} elements (union by {policy})");
        DisjointSet {
            parent: (0..n).collect(),
            weight: vec![policy.initial_weight(); n],
            policy,
            sets: n,
        }
    }

    /// Create from a signed size, rejecting negative values
    pub fn try_new(size: i64, policy: MergePolicy) -> Result<Self> {
        let n = usize::try_from(size).map_err(|_| Error::InvalidConstruction { size })?;
        Ok(Self::with_policy(n, policy))
    }

    /// Number of elements in the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Number of disjoint sets currently present
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Find the representative of the set containing `x`.
    ///
    /// Every node on the path from `x` to the root is repointed directly at
    /// the root. The representative only changes when a later `union` merges
    /// this set with another.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.find_root(x))
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `false` when they were already in the same set, in which case
    /// nothing changes.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        // Validate both before touching the forest
        self.check(x)?;
        self.check(y)?;

        let root_x = self.find_root(x);
        let root_y = self.find_root(y);
        if root_x == root_y {
            return Ok(false);
        }

        let (root, child) = match self.policy {
            MergePolicy::BySize => {
                let (root, child) = if self.weight[root_x] < self.weight[root_y] {
                    (root_y, root_x)
                } else {
                    (root_x, root_y)
                };
                self.weight[root] += self.weight[child];
                (root, child)
            }
            MergePolicy::ByRank => match self.weight[root_x].cmp(&self.weight[root_y]) {
                Ordering::Less => (root_y, root_x),
                Ordering::Greater => (root_x, root_y),
                Ordering::Equal => {
                    self.weight[root_x] += 1;
                    (root_x, root_y)
                }
            },
        };

        self.parent[child] = root;
        self.sets -= 1;
        trace!(
            "Merged root {child} into {root} (weight {}, {} sets left)",
            self.weight[root],
            self.sets
        );
        Ok(true)
    }

    /// Check if `x` and `y` are in the same set
    pub fn is_connected(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.find_root(x) == self.find_root(y))
    }

    /// Weight held by the root of `x`'s set: its size, or its rank
    pub fn weight(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.weight[root])
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: x,
                len: self.parent.len(),
            })
        }
    }

    // Two passes: walk up to the root, then repoint the walked chain at it.
    // Iterative so arbitrarily long chains cannot overflow the stack.
    fn find_root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }
}

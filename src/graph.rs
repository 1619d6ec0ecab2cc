// Connectivity helpers over undirected edge lists, built on DisjointSet

use log::debug;

use crate::error::Result;
use crate::union_find::{DisjointSet, MergePolicy};

/// Undirected edge between two vertex indices
pub type Edge = (usize, usize);

/// Index of the first edge that closes a cycle, if any.
///
/// Edges after that one are not looked at.
pub fn first_cycle_edge(n: usize, edges: &[Edge], policy: MergePolicy) -> Result<Option<usize>> {
    let mut ds = DisjointSet::with_policy(n, policy);
    for (i, &(u, v)) in edges.iter().enumerate() {
        if !ds.union(u, v)? {
            debug!("Edge {i} ({u}, {v}) closes a cycle");
            return Ok(Some(i));
        }
    }
    Ok(None)
}

/// Edges that join two previously separate components, in input order.
///
/// With edges pre-sorted by cost this is Kruskal's minimum spanning forest.
/// Every edge is checked, including those after the graph is connected.
pub fn spanning_forest(n: usize, edges: &[Edge], policy: MergePolicy) -> Result<Vec<Edge>> {
    let mut ds = DisjointSet::with_policy(n, policy);
    let mut forest = Vec::with_capacity(n.saturating_sub(1));

    for &(u, v) in edges {
        if ds.union(u, v)? {
            forest.push((u, v));
        }
    }

    debug!(
        "Spanning forest kept {} of {} edges ({} components)",
        forest.len(),
        edges.len(),
        ds.set_count()
    );
    Ok(forest)
}

/// Number of connected components in the graph
pub fn count_components(n: usize, edges: &[Edge], policy: MergePolicy) -> Result<usize> {
    let mut ds = DisjointSet::with_policy(n, policy);
    for &(u, v) in edges {
        ds.union(u, v)?;
    }
    Ok(ds.set_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const POLICIES: [MergePolicy; 2] = [MergePolicy::BySize, MergePolicy::ByRank];

    #[test]
    fn test_first_cycle_edge() {
        for policy in POLICIES {
            let edges = [(0, 1), (1, 2), (2, 0), (3, 4)];
            assert_eq!(first_cycle_edge(5, &edges, policy).unwrap(), Some(2));
            assert_eq!(first_cycle_edge(5, &[(0, 1), (3, 4)], policy).unwrap(), None);
            // Self-loop is a cycle on its own
            assert_eq!(first_cycle_edge(2, &[(1, 1)], policy).unwrap(), Some(0));
        }
    }

    #[test]
    fn test_spanning_forest_skips_redundant_edges() {
        let edges = [(0, 1), (1, 2), (0, 2), (3, 4), (2, 3), (4, 0)];
        for policy in POLICIES {
            let forest = spanning_forest(5, &edges, policy).unwrap();
            assert_eq!(forest, vec![(0, 1), (1, 2), (3, 4), (2, 3)]);
        }
    }

    #[test]
    fn test_count_components() {
        for policy in POLICIES {
            assert_eq!(count_components(0, &[], policy).unwrap(), 0);
            assert_eq!(count_components(6, &[], policy).unwrap(), 6);
            assert_eq!(
                count_components(6, &[(0, 1), (2, 3), (1, 0)], policy).unwrap(),
                4
            );
        }
    }

    #[test]
    fn test_out_of_range_edge() {
        assert_eq!(
            count_components(3, &[(0, 3)], MergePolicy::BySize),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(spanning_forest(3, &[(5, 0)], MergePolicy::ByRank).is_err());
        assert!(first_cycle_edge(3, &[(0, 1), (1, 4)], MergePolicy::BySize).is_err());
    }

    #[test]
    fn test_out_of_range_edge_after_fully_connected() {
        let edges = [(0, 1), (5, 0)];
        for policy in POLICIES {
            assert_eq!(
                spanning_forest(2, &edges, policy),
                Err(Error::IndexOutOfRange { index: 5, len: 2 })
            );
            assert_eq!(
                count_components(2, &edges, policy),
                Err(Error::IndexOutOfRange { index: 5, len: 2 })
            );
        }
    }
}

//! Prim's-algorithm oracle for spanning-forest property verification.
//!
//! Prim's grows each component from a seed vertex and shares no code with
//! the Kruskal builder, so agreement on total weight is meaningful. Every
//! minimum spanning forest has the same multiset of edge weights, and
//! Kruskal's first `k` acceptances are the `k` lightest of them, so a capped
//! run is checked against the sum of the `k` smallest oracle weights.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::WeightedEdge;

use super::helpers::label_ids;

/// Result of the Prim's oracle.
#[derive(Clone, Debug)]
pub(super) struct PrimForest {
    /// Weights of the forest edges in ascending order.
    pub weights: Vec<i64>,
    /// Number of connected components among the labelled vertices.
    pub component_count: usize,
}

impl PrimForest {
    /// Sum of the `limit` lightest forest edges.
    pub(super) fn capped_total(&self, limit: usize) -> i64 {
        self.weights.iter().take(limit).sum()
    }

    /// Number of forest edges a run capped at `limit` selects.
    pub(super) fn capped_len(&self, limit: usize) -> usize {
        self.weights.len().min(limit)
    }
}

/// Computes a minimum spanning forest over the labels of `edges`.
pub(super) fn prim_forest(edges: &[WeightedEdge]) -> PrimForest {
    let ids = label_ids(edges);
    let mut adjacency: Vec<Vec<(usize, i64)>> = vec![Vec::new(); ids.len()];
    for edge in edges {
        let left = ids[edge.u.as_str()];
        let right = ids[edge.v.as_str()];
        if left == right {
            continue;
        }
        adjacency[left].push((right, edge.weight));
        adjacency[right].push((left, edge.weight));
    }

    let mut visited = vec![false; ids.len()];
    let mut weights = Vec::new();
    let mut component_count = 0;

    for seed in 0..ids.len() {
        if visited[seed] {
            continue;
        }
        component_count += 1;
        visited[seed] = true;

        let mut frontier = BinaryHeap::new();
        for &(next, weight) in &adjacency[seed] {
            frontier.push(Reverse((weight, next)));
        }
        while let Some(Reverse((weight, vertex))) = frontier.pop() {
            if visited[vertex] {
                continue;
            }
            visited[vertex] = true;
            weights.push(weight);
            for &(next, next_weight) in &adjacency[vertex] {
                if !visited[next] {
                    frontier.push(Reverse((next_weight, next)));
                }
            }
        }
    }

    weights.sort_unstable();
    PrimForest {
        weights,
        component_count,
    }
}

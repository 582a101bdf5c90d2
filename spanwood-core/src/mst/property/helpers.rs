//! Shared helper functions for spanning-forest property tests.

use std::collections::HashMap;

use crate::WeightedEdge;

/// Path-halving find for independent union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Maps every label in `edges` to a dense id, independent of the builder's
/// own numbering.
pub(super) fn label_ids<'a>(
    edges: impl IntoIterator<Item = &'a WeightedEdge>,
) -> HashMap<&'a str, usize> {
    let mut ids = HashMap::new();
    for edge in edges {
        for label in [edge.u.as_str(), edge.v.as_str()] {
            let next = ids.len();
            ids.entry(label).or_insert(next);
        }
    }
    ids
}

/// Counts the connected components spanned by `edges` over `ids`.
pub(super) fn component_count(ids: &HashMap<&str, usize>, edges: &[WeightedEdge]) -> usize {
    let mut parent: Vec<usize> = (0..ids.len()).collect();
    let mut components = ids.len();
    for edge in edges {
        let left = find_root(&mut parent, ids[edge.u.as_str()]);
        let right = find_root(&mut parent, ids[edge.v.as_str()]);
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}

/// Generates `count` distinct vertex labels.
pub(super) fn labels(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("v{index}")).collect()
}

//! Minimum spanning forest construction.
//!
//! This module implements Kruskal's algorithm over string-labelled vertices.
//! Labels are mapped to dense ids in first-occurrence order, edge positions are
//! stably sorted by weight, and a [`DisjointSet`] rejects every edge whose
//! endpoints are already connected. The result can be projected back onto the
//! stored edge records with [`project_by_key`] or [`project_by_position`].

mod key;
mod projection;
mod union_find;

use std::collections::{BTreeSet, HashMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{error::MstError, graph::WeightedEdge};

pub use self::{
    key::EdgeKey,
    projection::{ProjectionMode, project_by_key, project_by_position},
    union_find::DisjointSet,
};

/// An edge accepted into the forest, with its position in the input list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectedEdge {
    position: usize,
    edge: WeightedEdge,
}

impl SelectedEdge {
    /// Returns the index of the edge in the list passed to the builder.
    #[must_use]
    #[rustfmt::skip]
    pub fn position(&self) -> usize { self.position }

    /// Returns the selected edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge(&self) -> &WeightedEdge { &self.edge }

    /// Returns the canonical key of the selected edge.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        self.edge.key()
    }
}

/// The output of a minimum spanning forest computation.
///
/// When every labelled vertex ends up in one component the forest is a
/// minimum spanning tree. Neither a disconnected graph nor a vertex-count
/// hint that disagrees with the labels is an error; the forest is simply
/// smaller.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SpanningForest {
    edges: Vec<SelectedEdge>,
    total_cost: i64,
    vertex_count: usize,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the accepted edges in acceptance (ascending weight) order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[SelectedEdge] { &self.edges }

    /// Returns the summed weight of the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_cost(&self) -> i64 { self.total_cost }

    /// Returns the number of distinct labels that appeared in the edge list.
    ///
    /// Zero when the computation short-circuited on a hint of at most one.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of components among the labelled vertices once
    /// selection finished.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the labelled vertices form a single component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Collects the canonical keys of the accepted edges.
    #[must_use]
    pub fn included_keys(&self) -> BTreeSet<EdgeKey> {
        self.edges.iter().map(SelectedEdge::key).collect()
    }

    /// Reduces the forest to the key set and cost handed to callers.
    #[must_use]
    pub fn summary(&self) -> ForestSummary {
        ForestSummary {
            included_keys: self.included_keys(),
            total_cost: self.total_cost,
        }
    }
}

/// Keys of the selected edges and their summed weight.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ForestSummary {
    /// Canonical keys of the selected edges.
    pub included_keys: BTreeSet<EdgeKey>,
    /// Summed weight of the selected edges.
    pub total_cost: i64,
}

/// Computes the included edge keys and total cost for `edges`.
///
/// This is the key-based view of [`build_spanning_forest`]; see there for
/// the selection rules.
///
/// # Errors
/// Returns [`MstError::CostOverflow`] when the total cost exceeds `i64`.
///
/// # Examples
/// ```
/// use spanwood_core::{WeightedEdge, compute_spanning_forest};
///
/// let edges = [
///     WeightedEdge::new("A", "B", 5),
///     WeightedEdge::new("B", "C", 3),
///     WeightedEdge::new("A", "C", 1),
/// ];
/// let summary = compute_spanning_forest(&edges, 3)?;
/// let keys: Vec<&str> = summary.included_keys.iter().map(|key| key.as_str()).collect();
/// assert_eq!(keys, ["A-C", "B-C"]);
/// assert_eq!(summary.total_cost, 4);
/// # Ok::<(), spanwood_core::MstError>(())
/// ```
pub fn compute_spanning_forest(
    edges: &[WeightedEdge],
    node_count_hint: i64,
) -> Result<ForestSummary, MstError> {
    build_spanning_forest(edges, node_count_hint).map(|forest| forest.summary())
}

/// Computes a minimum spanning forest using Kruskal's algorithm.
///
/// - A `node_count_hint` of at most one, negative values included, yields an
///   empty forest.
/// - Vertex ids follow first occurrence in `edges`; labels that never appear
///   in an edge are invisible.
/// - Edges are visited in ascending weight; equal weights keep input order.
/// - Selection stops once `node_count_hint - 1` edges were accepted.
/// - Self-loops and edges closing a cycle are skipped.
///
/// # Errors
/// Returns [`MstError::CostOverflow`] when the total cost exceeds `i64`.
///
/// # Examples
/// ```
/// use spanwood_core::{WeightedEdge, build_spanning_forest};
///
/// let edges = [WeightedEdge::new("A", "B", 2), WeightedEdge::new("C", "D", 3)];
/// let forest = build_spanning_forest(&edges, 4)?;
/// assert_eq!(forest.edges().len(), 2);
/// assert_eq!(forest.total_cost(), 5);
/// assert_eq!(forest.component_count(), 2);
/// assert!(!forest.is_tree());
/// # Ok::<(), spanwood_core::MstError>(())
/// ```
#[instrument(level = "debug", skip(edges), fields(edges = edges.len()))]
pub fn build_spanning_forest(
    edges: &[WeightedEdge],
    node_count_hint: i64,
) -> Result<SpanningForest, MstError> {
    let Some(limit) = selection_limit(node_count_hint) else {
        debug!("vertex-count hint admits no edges");
        return Ok(SpanningForest::default());
    };

    let vertex_ids = assign_vertex_ids(edges);
    let order = weight_order(edges);

    let mut sets = DisjointSet::new(vertex_ids.len());
    let mut selected = Vec::with_capacity(limit.min(vertex_ids.len().saturating_sub(1)));
    let mut total_cost: i64 = 0;

    for (position, edge) in order {
        if selected.len() == limit {
            break;
        }

        let left = vertex_id(&vertex_ids, &edge.u, position)?;
        let right = vertex_id(&vertex_ids, &edge.v, position)?;

        if sets.find(left) == sets.find(right) {
            continue;
        }

        sets.union(left, right);
        total_cost = total_cost
            .checked_add(edge.weight)
            .ok_or(MstError::CostOverflow {
                selected: selected.len(),
            })?;
        selected.push(SelectedEdge {
            position,
            edge: edge.clone(),
        });
    }

    debug!(
        selected = selected.len(),
        excluded = edges.len() - selected.len(),
        total_cost,
        components = sets.set_count(),
        "spanning forest built"
    );
    record_metrics(selected.len());

    Ok(SpanningForest {
        edges: selected,
        total_cost,
        vertex_count: vertex_ids.len(),
        component_count: sets.set_count(),
    })
}

/// Number of edges a hint admits, or `None` when it admits none.
///
/// Saturates where `usize` is narrower than `i64`.
fn selection_limit(node_count_hint: i64) -> Option<usize> {
    if node_count_hint <= 1 {
        return None;
    }
    Some(usize::try_from(node_count_hint - 1).unwrap_or(usize::MAX))
}

/// Assigns dense ids to labels in first-occurrence order (`u` before `v`).
fn assign_vertex_ids(edges: &[WeightedEdge]) -> HashMap<&str, usize> {
    let mut ids = HashMap::with_capacity(edges.len().saturating_mul(2));
    for edge in edges {
        for label in [edge.u.as_str(), edge.v.as_str()] {
            let next = ids.len();
            ids.entry(label).or_insert(next);
        }
    }
    ids
}

fn vertex_id(ids: &HashMap<&str, usize>, label: &str, position: usize) -> Result<usize, MstError> {
    ids.get(label).copied().ok_or_else(|| {
        tracing::warn!(label, position, "edge endpoint has no vertex id");
        MstError::InvariantViolation {
            invariant: "every endpoint label has a vertex id",
            index: position,
        }
    })
}

/// Returns the edges with their input positions, ordered by ascending weight.
///
/// `sort_by_key` is stable, so equal weights keep their input order and the
/// selected set is reproducible.
fn weight_order(edges: &[WeightedEdge]) -> Vec<(usize, &WeightedEdge)> {
    let mut order: Vec<(usize, &WeightedEdge)> = edges.iter().enumerate().collect();
    order.sort_by_key(|(_, edge)| edge.weight);
    order
}

#[cfg(feature = "metrics")]
fn record_metrics(selected: usize) {
    metrics::counter!("spanwood_mst_computations").increment(1);
    metrics::counter!("spanwood_mst_edges_selected")
        .increment(u64::try_from(selected).unwrap_or(u64::MAX));
}

#[cfg(not(feature = "metrics"))]
fn record_metrics(_selected: usize) {}

#[cfg(test)]
mod property;

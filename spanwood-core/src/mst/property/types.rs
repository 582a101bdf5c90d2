//! Type definitions for spanning-forest property tests.

use crate::WeightedEdge;

/// Shape of the generated graph and its weights.
///
/// Each variant stresses a different part of the builder: tie handling,
/// early termination, component bookkeeping or the hint cap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge has a distinct weight.
    Unique,
    /// Large groups of edges share identical weights, stressing the stable
    /// tie order.
    ManyIdentical,
    /// A random spanning tree plus a handful of extra edges.
    Sparse,
    /// Close to a complete graph.
    Dense,
    /// Several components with no cross-component edges.
    Disconnected,
    /// Parallel edges and self-loops mixed into a small graph.
    Multigraph,
    /// A hint smaller than the number of labels, so the cap ends selection.
    Truncated,
}

/// Fixture for spanning-forest property tests.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Hint passed to the builder.
    pub node_count_hint: usize,
    /// Number of distinct labels in `edges`.
    pub label_count: usize,
    /// Generated edges in input order.
    pub edges: Vec<WeightedEdge>,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Returns the hint in the signed form the builder takes.
    pub(super) fn hint(&self) -> i64 {
        i64::try_from(self.node_count_hint).unwrap_or(i64::MAX)
    }

    /// Describes the fixture for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, hint={}, labels={}, edges={}",
            self.distribution,
            self.node_count_hint,
            self.label_count,
            self.edges.len(),
        )
    }
}

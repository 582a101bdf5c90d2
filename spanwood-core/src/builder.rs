//! Builder utilities for configuring the graph service.
//!
//! Exposes the validation limits and projection mode applied before
//! constructing [`GraphService`] instances.

use std::ops::{Range, RangeInclusive};

use crate::{
    Result,
    error::GraphError,
    graph::WeightedEdge,
    mst::ProjectionMode,
    service::GraphService,
    store::GraphStore,
};

/// Bounds a submitted graph must respect before it is stored.
///
/// The defaults accept between 1 and 30 vertices and weights in `0..100`.
/// Every graph needs at least one edge regardless of the limits.
///
/// # Examples
/// ```
/// use spanwood_core::GraphLimits;
///
/// let limits = GraphLimits::default();
/// assert_eq!(limits.node_count(), &(1..=30));
/// assert_eq!(limits.weight(), &(0..100));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphLimits {
    node_count: RangeInclusive<i64>,
    weight: Range<i64>,
}

impl Default for GraphLimits {
    fn default() -> Self {
        Self {
            node_count: 1..=30,
            weight: 0..100,
        }
    }
}

impl GraphLimits {
    /// Creates limits from explicit ranges.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidLimits`] when either range is empty or the
    /// node-count range admits fewer than one vertex.
    pub fn new(node_count: RangeInclusive<i64>, weight: Range<i64>) -> Result<Self> {
        if node_count.is_empty() || *node_count.start() < 1 {
            return Err(GraphError::InvalidLimits {
                reason: "node count range must be non-empty and start at one or more",
            }
            .into());
        }
        if weight.is_empty() {
            return Err(GraphError::InvalidLimits {
                reason: "weight range must be non-empty",
            }
            .into());
        }
        Ok(Self { node_count, weight })
    }

    /// Returns the accepted node-count range.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> &RangeInclusive<i64> { &self.node_count }

    /// Returns the accepted weight range.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> &Range<i64> { &self.weight }

    /// Checks a graph definition against these limits.
    ///
    /// # Errors
    /// Returns the first [`GraphError`] found, checking the node count, then
    /// the presence of edges, then each edge in order.
    pub fn validate(
        &self,
        node_count: i64,
        edges: &[WeightedEdge],
    ) -> core::result::Result<(), GraphError> {
        if !self.node_count.contains(&node_count) {
            return Err(GraphError::NodeCountOutOfRange {
                got: node_count,
                min: *self.node_count.start(),
                max: *self.node_count.end(),
            });
        }
        if edges.is_empty() {
            return Err(GraphError::NoEdges);
        }
        for (index, edge) in edges.iter().enumerate() {
            if edge.u.is_empty() || edge.v.is_empty() {
                return Err(GraphError::EmptyLabel { index });
            }
            if !self.weight.contains(&edge.weight) {
                return Err(GraphError::WeightOutOfRange {
                    index,
                    weight: edge.weight,
                    min: self.weight.start,
                    max_exclusive: self.weight.end,
                });
            }
        }
        Ok(())
    }
}

/// Configures and constructs [`GraphService`] instances.
///
/// # Examples
/// ```
/// use spanwood_core::{GraphServiceBuilder, InMemoryGraphStore, ProjectionMode};
///
/// let service = GraphServiceBuilder::new()
///     .with_projection_mode(ProjectionMode::Position)
///     .build(InMemoryGraphStore::new());
/// assert_eq!(service.projection_mode(), ProjectionMode::Position);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphServiceBuilder {
    limits: GraphLimits,
    projection_mode: ProjectionMode,
}

impl GraphServiceBuilder {
    /// Creates a builder populated with default limits and key projection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the validation limits.
    #[must_use]
    pub fn with_limits(mut self, limits: GraphLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the configured validation limits.
    #[must_use]
    pub fn limits(&self) -> &GraphLimits {
        &self.limits
    }

    /// Selects how computed forests are marked on stored edges.
    #[must_use]
    pub fn with_projection_mode(mut self, mode: ProjectionMode) -> Self {
        self.projection_mode = mode;
        self
    }

    /// Returns the configured projection mode.
    #[must_use]
    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    /// Constructs a service over `store`.
    #[must_use]
    pub fn build<S: GraphStore>(self, store: S) -> GraphService<S> {
        GraphService::new(store, self.limits, self.projection_mode)
    }
}

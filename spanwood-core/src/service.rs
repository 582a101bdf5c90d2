//! Graph service orchestrating validation, storage and MST computation.
//!
//! Provides the [`GraphService`] entry point. Each operation opens a tracing
//! span carrying the graph id where one exists.

use tracing::{info, instrument};

use crate::{
    Result,
    builder::GraphLimits,
    error::SpanwoodError,
    graph::{GraphId, GraphRecord, NewGraph, WeightedEdge},
    mst::{ProjectionMode, build_spanning_forest},
    store::GraphStore,
};

/// Stores graphs and computes their minimum spanning forests.
///
/// # Examples
/// ```
/// use spanwood_core::{GraphServiceBuilder, InMemoryGraphStore, WeightedEdge};
///
/// let service = GraphServiceBuilder::new().build(InMemoryGraphStore::new());
/// let saved = service.save_graph(
///     3,
///     vec![
///         WeightedEdge::new("A", "B", 5),
///         WeightedEdge::new("B", "C", 3),
///         WeightedEdge::new("A", "C", 1),
///     ],
/// )?;
/// let computed = service.compute_mst(saved.id)?;
/// assert_eq!(computed.total_cost, 4);
/// assert_eq!(computed.included_edges().count(), 2);
/// # Ok::<(), spanwood_core::SpanwoodError>(())
/// ```
#[derive(Debug)]
pub struct GraphService<S> {
    store: S,
    limits: GraphLimits,
    projection_mode: ProjectionMode,
}

impl<S: GraphStore> GraphService<S> {
    pub(crate) fn new(store: S, limits: GraphLimits, projection_mode: ProjectionMode) -> Self {
        Self {
            store,
            limits,
            projection_mode,
        }
    }

    /// Returns the underlying store.
    #[must_use]
    #[rustfmt::skip]
    pub fn store(&self) -> &S { &self.store }

    /// Returns the validation limits applied by [`Self::save_graph`].
    #[must_use]
    #[rustfmt::skip]
    pub fn limits(&self) -> &GraphLimits { &self.limits }

    /// Returns the projection mode applied by [`Self::compute_mst`].
    #[must_use]
    #[rustfmt::skip]
    pub fn projection_mode(&self) -> ProjectionMode { self.projection_mode }

    /// Validates and stores a graph. Every edge starts excluded and the total
    /// cost starts at zero.
    ///
    /// # Errors
    /// Returns [`SpanwoodError::Validation`] when the graph breaks the
    /// configured limits, or [`SpanwoodError::Store`] when it cannot be
    /// persisted.
    #[instrument(
        name = "service.save_graph",
        err,
        skip(self, edges),
        fields(edges = edges.len()),
    )]
    pub fn save_graph(&self, node_count: i64, edges: Vec<WeightedEdge>) -> Result<GraphRecord> {
        self.limits.validate(node_count, &edges)?;
        let record = self.store.insert(NewGraph { node_count, edges })?;
        info!(graph_id = %record.id, "graph saved");
        Ok(record)
    }

    /// Computes the minimum spanning forest of a stored graph and persists
    /// the inclusion flags and total cost.
    ///
    /// The stored node count is the vertex-count hint. The whole
    /// compute-and-save sequence runs inside one store update, so concurrent
    /// computations of the same graph cannot interleave.
    ///
    /// # Errors
    /// Returns [`SpanwoodError::Store`] when the graph does not exist, or
    /// [`SpanwoodError::Mst`] when the computation fails; the stored record
    /// is unchanged in both cases.
    #[instrument(name = "service.compute_mst", err, skip(self, id), fields(graph_id = %id))]
    pub fn compute_mst(&self, id: GraphId) -> Result<GraphRecord> {
        let mode = self.projection_mode;
        self.store.update(id, |record| {
            let forest = build_spanning_forest(&record.weighted_edges(), record.node_count)?;
            let marked = mode.apply(&mut record.edges, &forest)?;
            record.total_cost = forest.total_cost();
            info!(
                total_cost = record.total_cost,
                marked,
                is_tree = forest.is_tree(),
                "spanning forest stored"
            );
            Ok::<_, SpanwoodError>(record.clone())
        })
    }

    /// Lists every stored graph, newest first.
    ///
    /// # Errors
    /// Returns [`SpanwoodError::Store`] when the store cannot be read.
    #[instrument(name = "service.list_graphs", err, skip(self))]
    pub fn list_graphs(&self) -> Result<Vec<GraphRecord>> {
        Ok(self.store.list()?)
    }

    /// Fetches a stored graph.
    ///
    /// # Errors
    /// Returns [`SpanwoodError::Store`] when the graph does not exist.
    #[instrument(name = "service.find_graph", err, skip(self, id), fields(graph_id = %id))]
    pub fn find_graph(&self, id: GraphId) -> Result<GraphRecord> {
        Ok(self.store.get(id)?)
    }

    /// Deletes a stored graph and its edges, returning the removed record.
    ///
    /// # Errors
    /// Returns [`SpanwoodError::Store`] when the graph does not exist.
    #[instrument(name = "service.delete_graph", err, skip(self, id), fields(graph_id = %id))]
    pub fn delete_graph(&self, id: GraphId) -> Result<GraphRecord> {
        let removed = self.store.remove(id)?;
        info!("graph deleted");
        Ok(removed)
    }
}

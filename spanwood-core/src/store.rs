//! Graph persistence abstractions.
//!
//! [`GraphStore`] is the seam between the service and whatever keeps graphs
//! around. [`InMemoryGraphStore`] is the reference implementation and the
//! building block for file-backed stores.

use std::collections::BTreeMap;
use std::num::NonZeroU64;
use std::sync::RwLock;

use tracing::debug;

use crate::error::StoreError;
use crate::graph::{EdgeId, EdgeRecord, GraphId, GraphRecord, NewGraph};

/// Storage for graph records.
///
/// Implementations assign graph and edge identifiers on insert and must apply
/// [`GraphStore::update`] atomically: no other mutation of the same record
/// may interleave with the closure.
pub trait GraphStore: Send + Sync {
    /// Persists a new graph with every edge excluded and a zero total cost.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend cannot accept the graph.
    fn insert(&self, graph: NewGraph) -> Result<GraphRecord, StoreError>;

    /// Fetches a graph by id.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no graph has the id.
    fn get(&self, id: GraphId) -> Result<GraphRecord, StoreError>;

    /// Lists every stored graph, newest first.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend cannot be read.
    fn list(&self) -> Result<Vec<GraphRecord>, StoreError>;

    /// Runs `apply` against the stored record and commits the change only
    /// when it succeeds.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] (converted into `E`) when no graph has
    /// the id, or the error produced by `apply`.
    fn update<T, E, F>(&self, id: GraphId, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut GraphRecord) -> Result<T, E>,
        E: From<StoreError>;

    /// Removes a graph together with its edges.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no graph has the id.
    fn remove(&self, id: GraphId) -> Result<GraphRecord, StoreError>;
}

#[derive(Clone, Debug, Default)]
struct Inner {
    graphs: BTreeMap<GraphId, GraphRecord>,
    last_graph_id: u64,
    last_edge_id: u64,
}

impl Inner {
    fn next_graph_id(&mut self) -> GraphId {
        let id = NonZeroU64::MIN.saturating_add(self.last_graph_id);
        self.last_graph_id = id.get();
        GraphId::from(id)
    }

    fn next_edge_id(&mut self) -> EdgeId {
        let id = NonZeroU64::MIN.saturating_add(self.last_edge_id);
        self.last_edge_id = id.get();
        EdgeId::from(id)
    }
}

/// A [`GraphStore`] holding every record in memory behind a single lock.
///
/// # Examples
/// ```
/// use spanwood_core::{GraphStore, InMemoryGraphStore, NewGraph, WeightedEdge};
///
/// let store = InMemoryGraphStore::new();
/// let record = store.insert(NewGraph {
///     node_count: 2,
///     edges: vec![WeightedEdge::new("A", "B", 4)],
/// })?;
/// assert_eq!(record.id.get(), 1);
/// assert!(!record.edges[0].included);
/// assert_eq!(store.list()?.len(), 1);
/// # Ok::<(), spanwood_core::StoreError>(())
/// ```
#[derive(Debug, Default)]
pub struct InMemoryGraphStore {
    inner: RwLock<Inner>,
}

impl InMemoryGraphStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with previously persisted records.
    ///
    /// New identifiers continue after the largest graph and edge ids seen.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = GraphRecord>) -> Self {
        let mut inner = Inner::default();
        for record in records {
            inner.last_graph_id = inner.last_graph_id.max(record.id.get());
            for edge in &record.edges {
                inner.last_edge_id = inner.last_edge_id.max(edge.id.get());
            }
            inner.graphs.insert(record.id, record);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Returns every stored record in ascending id order.
    ///
    /// # Errors
    /// Returns [`StoreError::LockPoisoned`] when the lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<GraphRecord>, StoreError> {
        let inner = self.read()?;
        Ok(inner.graphs.values().cloned().collect())
    }

    /// Copies the records and identifier counters into an independent store.
    ///
    /// Together with [`InMemoryGraphStore::replace`] this lets a caller
    /// stage mutations on a draft and publish them only once they succeed.
    ///
    /// # Errors
    /// Returns [`StoreError::LockPoisoned`] when the lock is poisoned.
    pub fn try_clone(&self) -> Result<Self, StoreError> {
        Ok(Self {
            inner: RwLock::new(self.read()?.clone()),
        })
    }

    /// Replaces the records and identifier counters with those of `draft`.
    ///
    /// # Errors
    /// Returns [`StoreError::LockPoisoned`] when either lock is poisoned.
    pub fn replace(&self, draft: Self) -> Result<(), StoreError> {
        let next = draft
            .inner
            .into_inner()
            .map_err(|_| StoreError::LockPoisoned {
                resource: "graph store",
            })?;
        *self.write()? = next;
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned {
            resource: "graph store",
        })
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned {
            resource: "graph store",
        })
    }
}

impl GraphStore for InMemoryGraphStore {
    fn insert(&self, graph: NewGraph) -> Result<GraphRecord, StoreError> {
        let mut inner = self.write()?;
        let id = inner.next_graph_id();
        let edges = graph
            .edges
            .into_iter()
            .map(|edge| EdgeRecord {
                id: inner.next_edge_id(),
                edge,
                included: false,
            })
            .collect();
        let record = GraphRecord {
            id,
            node_count: graph.node_count,
            edges,
            total_cost: 0,
        };
        inner.graphs.insert(id, record.clone());
        debug!(graph_id = %id, edges = record.edges.len(), "graph stored");
        Ok(record)
    }

    fn get(&self, id: GraphId) -> Result<GraphRecord, StoreError> {
        self.read()?
            .graphs
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn list(&self) -> Result<Vec<GraphRecord>, StoreError> {
        Ok(self.read()?.graphs.values().rev().cloned().collect())
    }

    fn update<T, E, F>(&self, id: GraphId, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut GraphRecord) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut inner = self.write()?;
        let stored = inner
            .graphs
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;
        let mut draft = stored.clone();
        let value = apply(&mut draft)?;
        *stored = draft;
        Ok(value)
    }

    fn remove(&self, id: GraphId) -> Result<GraphRecord, StoreError> {
        let removed = self
            .write()?
            .graphs
            .remove(&id)
            .ok_or(StoreError::NotFound { id })?;
        debug!(graph_id = %id, "graph removed");
        Ok(removed)
    }
}

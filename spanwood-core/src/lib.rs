//! Spanwood core library.
//!
//! Minimum spanning forests over string-labelled weighted graphs, computed
//! with Kruskal's algorithm, plus the store and service layers that persist
//! graphs and the inclusion flags of their selected edges.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod graph;
mod mst;
mod service;
mod store;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{GraphLimits, GraphServiceBuilder},
    error::{
        GraphError, GraphErrorCode, MstError, MstErrorCode, Result, SpanwoodError,
        SpanwoodErrorCode, StoreError, StoreErrorCode,
    },
    graph::{EdgeId, EdgeRecord, GraphId, GraphRecord, NewGraph, WeightedEdge},
    mst::{
        DisjointSet, EdgeKey, ForestSummary, ProjectionMode, SelectedEdge, SpanningForest,
        build_spanning_forest, compute_spanning_forest, project_by_key, project_by_position,
    },
    service::GraphService,
    store::{GraphStore, InMemoryGraphStore},
};

//! Graph records exchanged between the store, the service and callers.
//!
//! A [`WeightedEdge`] is the algorithmic unit: two opaque vertex labels and an
//! integer weight. [`EdgeRecord`] and [`GraphRecord`] wrap edges with the
//! identifiers and inclusion flags that are persisted.

use std::fmt;
use std::num::NonZeroU64;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::mst::EdgeKey;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(NonZeroU64);

        impl $name {
            /// Wraps a raw identifier, returning `None` for zero.
            #[must_use]
            pub const fn new(raw: u64) -> Option<Self> {
                match NonZeroU64::new(raw) {
                    Some(value) => Some(Self(value)),
                    None => None,
                }
            }

            /// Returns the raw identifier.
            #[must_use]
            #[rustfmt::skip]
            pub const fn get(self) -> u64 { self.0.get() }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<NonZeroU64> for $name {
            fn from(value: NonZeroU64) -> Self {
                Self(value)
            }
        }
    };
}

define_id! {
    /// Durable identifier assigned to a stored graph.
    GraphId
}

define_id! {
    /// Durable identifier assigned to a stored edge.
    EdgeId
}

/// An undirected edge between two labelled vertices.
///
/// # Examples
/// ```
/// use spanwood_core::WeightedEdge;
///
/// let edge = WeightedEdge::new("B", "A", 4);
/// assert_eq!(edge.key().as_str(), "A-B");
/// assert!(!edge.is_self_loop());
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightedEdge {
    /// First endpoint label.
    pub u: String,
    /// Second endpoint label.
    pub v: String,
    /// Edge weight.
    pub weight: i64,
}

impl WeightedEdge {
    /// Creates an edge from any pair of label-like values.
    #[must_use]
    pub fn new(u: impl Into<String>, v: impl Into<String>, weight: i64) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
            weight,
        }
    }

    /// Returns the canonical key of the endpoint pair.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.u, &self.v)
    }

    /// Returns `true` when both endpoints carry the same label.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} ({})", self.u, self.v, self.weight)
    }
}

/// A stored edge together with its spanning-forest membership.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeRecord {
    /// Identifier assigned by the store.
    pub id: EdgeId,
    /// The edge itself.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub edge: WeightedEdge,
    /// Whether the most recent computation selected this edge.
    pub included: bool,
}

/// A graph definition awaiting an identifier from the store.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NewGraph {
    /// Declared number of vertices; bounds the forest size. Values of at
    /// most one admit no edges.
    pub node_count: i64,
    /// Edges in submission order.
    pub edges: Vec<WeightedEdge>,
}

/// A persisted graph and the outcome of its latest computation.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GraphRecord {
    /// Identifier assigned by the store.
    pub id: GraphId,
    /// Declared number of vertices.
    pub node_count: i64,
    /// Stored edges in submission order.
    pub edges: Vec<EdgeRecord>,
    /// Summed weight of the included edges; zero until computed.
    pub total_cost: i64,
}

impl GraphRecord {
    /// Clones the plain edges out of the records, preserving order.
    #[must_use]
    pub fn weighted_edges(&self) -> Vec<WeightedEdge> {
        self.edges.iter().map(|record| record.edge.clone()).collect()
    }

    /// Iterates over the records currently marked as included.
    pub fn included_edges(&self) -> impl Iterator<Item = &EdgeRecord> {
        self.edges.iter().filter(|record| record.included)
    }
}

//! Error types for the spanwood core library.
//!
//! Every public error enum carries a stable machine-readable code so the CLI
//! and any outer transport can report failures without matching on messages.

use std::fmt;

use thiserror::Error;

use crate::graph::GraphId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident
                    $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(
                        Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )?
                            => $CodeTy::$CodeVariant,
                    )+
                }
            }
        }
    };
}

/// Errors raised by the spanning-forest computation itself.
///
/// Disconnected graphs, parallel edges, self-loops and a vertex-count hint
/// that disagrees with the edges are not errors; they only shrink the result.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// An internal invariant was violated, indicating a logic error.
    #[error("spanning forest invariant violated: {invariant} (index {index})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// Position of the edge or record that exposed the violation.
        index: usize,
    },
    /// The summed weight of the selected edges does not fit in an `i64`.
    #[error("total cost overflowed after {selected} selected edges")]
    CostOverflow {
        /// Number of edges accepted before the overflow.
        selected: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "MST_INVARIANT_VIOLATION",
        /// The total cost overflowed.
        CostOverflow => CostOverflow { .. } => "MST_COST_OVERFLOW",
    }
}

/// Validation failures for a graph submitted for storage.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The declared node count fell outside the configured limits.
    #[error("node count {got} is outside the accepted range {min}..={max}")]
    NodeCountOutOfRange {
        /// Node count supplied by the caller.
        got: i64,
        /// Smallest accepted node count.
        min: i64,
        /// Largest accepted node count.
        max: i64,
    },
    /// The graph did not contain any edges.
    #[error("a graph requires at least one edge")]
    NoEdges,
    /// An edge weight fell outside the configured limits.
    #[error("edge {index} has weight {weight}, expected {min}..{max_exclusive}")]
    WeightOutOfRange {
        /// Position of the offending edge.
        index: usize,
        /// The rejected weight.
        weight: i64,
        /// Smallest accepted weight.
        min: i64,
        /// Exclusive upper bound for weights.
        max_exclusive: i64,
    },
    /// An edge endpoint label was empty.
    #[error("edge {index} has an empty endpoint label")]
    EmptyLabel {
        /// Position of the offending edge.
        index: usize,
    },
    /// Configured validation limits cannot accept any graph.
    #[error("invalid graph limits: {reason}")]
    InvalidLimits {
        /// Why the limits were rejected.
        reason: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Node count outside limits.
        NodeCountOutOfRange => NodeCountOutOfRange { .. } => "GRAPH_NODE_COUNT_OUT_OF_RANGE",
        /// No edges supplied.
        NoEdges => NoEdges => "GRAPH_NO_EDGES",
        /// Edge weight outside limits.
        WeightOutOfRange => WeightOutOfRange { .. } => "GRAPH_WEIGHT_OUT_OF_RANGE",
        /// Empty endpoint label.
        EmptyLabel => EmptyLabel { .. } => "GRAPH_EMPTY_LABEL",
        /// Unusable limits.
        InvalidLimits => InvalidLimits { .. } => "GRAPH_INVALID_LIMITS",
    }
}

/// Failures reported by a [`crate::GraphStore`] implementation.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// No graph is stored under the requested id.
    #[error("graph {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: GraphId,
    },
    /// A synchronisation primitive became poisoned after a panic.
    #[error("lock for {resource} is poisoned")]
    LockPoisoned {
        /// Name of the locked resource that was poisoned.
        resource: &'static str,
    },
    /// The backing storage failed.
    #[error("storage backend `{backend}` failed: {source}")]
    Backend {
        /// Short name of the failing backend.
        backend: &'static str,
        /// Underlying backend failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

define_error_codes! {
    /// Stable codes describing [`StoreError`] variants.
    enum StoreErrorCode for StoreError {
        /// Missing graph.
        NotFound => NotFound { .. } => "STORE_NOT_FOUND",
        /// Poisoned lock.
        LockPoisoned => LockPoisoned { .. } => "STORE_LOCK_POISONED",
        /// Backend failure.
        Backend => Backend { .. } => "STORE_BACKEND_FAILURE",
    }
}

/// Error type produced by [`crate::GraphService`] operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SpanwoodError {
    /// The submitted graph failed validation.
    #[error(transparent)]
    Validation(#[from] GraphError),
    /// The graph store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The spanning-forest computation failed.
    #[error(transparent)]
    Mst(#[from] MstError),
}

define_error_codes! {
    /// Stable codes describing [`SpanwoodError`] variants.
    enum SpanwoodErrorCode for SpanwoodError {
        /// Validation failure.
        Validation => Validation(_) => "SPANWOOD_VALIDATION",
        /// Store failure.
        Store => Store(_) => "SPANWOOD_STORE",
        /// Computation failure.
        Mst => Mst(_) => "SPANWOOD_MST",
    }
}

impl SpanwoodError {
    /// Returns `true` when the error means the requested graph does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(StoreError::NotFound { .. }))
    }

    /// Retrieve the code of the wrapped error as a string.
    #[must_use]
    pub const fn detail_code(&self) -> &'static str {
        match self {
            Self::Validation(error) => error.code().as_str(),
            Self::Store(error) => error.code().as_str(),
            Self::Mst(error) => error.code().as_str(),
        }
    }
}

/// Convenient alias for results returned by the service API.
pub type Result<T> = core::result::Result<T, SpanwoodError>;

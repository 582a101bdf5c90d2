//! Benchmark setup error type.
//!
//! Aggregates the failures that may arise while preparing benchmark inputs
//! so setup functions can propagate them with `?` instead of `.expect()`.

use spanwood_core::MstError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Spanning-forest computation failed while preparing inputs.
    #[error("spanning forest computation failed: {0}")]
    Mst(#[from] MstError),
}

//! Benchmark parameter types.

use std::fmt;

/// Parameters identifying one spanning-forest benchmark input.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of labelled vertices.
    pub vertex_count: usize,
    /// Number of edges in the input list.
    pub edge_count: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}

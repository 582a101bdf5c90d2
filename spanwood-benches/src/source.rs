//! Seeded synthetic graphs for spanning-forest benchmarks.
//!
//! Every generated graph is connected: a random spanning tree links all
//! vertices, then extra edges between random pairs are appended and the edge
//! list is shuffled so the builder cannot rely on input order.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanwood_core::WeightedEdge;

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of labelled vertices.
    pub vertex_count: usize,
    /// Extra edges added per vertex on top of the spanning tree.
    pub extra_edges_per_vertex: usize,
    /// Exclusive upper bound on weights; small values produce many ties.
    pub max_weight: i64,
    /// RNG seed.
    pub seed: u64,
}

/// Errors raised while generating synthetic graphs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// Fewer than two vertices were requested.
    #[error("a synthetic graph needs at least two vertices, got {vertex_count}")]
    TooFewVertices {
        /// Requested vertex count.
        vertex_count: usize,
    },
    /// The weight range `0..max_weight` is empty.
    #[error("weight bound must be positive, got {max_weight}")]
    EmptyWeightRange {
        /// Requested exclusive upper bound.
        max_weight: i64,
    },
}

/// A generated edge list together with its vertex count.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<WeightedEdge>,
}

impl SyntheticGraph {
    /// Generates a connected graph as described by `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] for fewer than two vertices or a
    /// non-positive weight bound.
    ///
    /// # Examples
    /// ```
    /// use spanwood_benches::source::{SyntheticGraph, SyntheticGraphConfig};
    ///
    /// let graph = SyntheticGraph::generate(&SyntheticGraphConfig {
    ///     vertex_count: 10,
    ///     extra_edges_per_vertex: 2,
    ///     max_weight: 50,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(graph.vertex_count(), 10);
    /// assert_eq!(graph.edges().len(), 9 + 20);
    /// # Ok::<(), spanwood_benches::source::SyntheticError>(())
    /// ```
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        if config.vertex_count < 2 {
            return Err(SyntheticError::TooFewVertices {
                vertex_count: config.vertex_count,
            });
        }
        if config.max_weight <= 0 {
            return Err(SyntheticError::EmptyWeightRange {
                max_weight: config.max_weight,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let labels: Vec<String> = (0..config.vertex_count)
            .map(|index| format!("v{index}"))
            .collect();
        let extra = config
            .vertex_count
            .saturating_mul(config.extra_edges_per_vertex);
        let mut edges =
            Vec::with_capacity(config.vertex_count.saturating_sub(1).saturating_add(extra));

        for (index, label) in labels.iter().enumerate().skip(1) {
            let parent = rng.gen_range(0..index);
            if let Some(parent_label) = labels.get(parent) {
                edges.push(WeightedEdge::new(
                    parent_label.as_str(),
                    label.as_str(),
                    rng.gen_range(0..config.max_weight),
                ));
            }
        }

        for _ in 0..extra {
            let left = rng.gen_range(0..config.vertex_count);
            let right = rng.gen_range(0..config.vertex_count);
            if let (Some(u), Some(v)) = (labels.get(left), labels.get(right)) {
                edges.push(WeightedEdge::new(
                    u.as_str(),
                    v.as_str(),
                    rng.gen_range(0..config.max_weight),
                ));
            }
        }

        for index in (1..edges.len()).rev() {
            let other = rng.gen_range(0..=index);
            edges.swap(index, other);
        }

        Ok(Self {
            vertex_count: config.vertex_count,
            edges,
        })
    }

    /// Returns the number of labelled vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the vertex count as the builder's signed node-count hint.
    #[must_use]
    pub fn node_count_hint(&self) -> i64 {
        i64::try_from(self.vertex_count).unwrap_or(i64::MAX)
    }

    /// Returns the generated edges in shuffled order.
    #[must_use]
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }
}

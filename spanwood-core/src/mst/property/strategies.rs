//! Strategy builders for spanning-forest property tests.
//!
//! Each generator draws labelled edges from a seeded [`SmallRng`] so rstest
//! cases can pin a distribution and seed while proptest samples both.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::WeightedEdge;

use super::helpers::{label_ids, labels};
use super::types::{MstFixture, WeightDistribution};

const MIN_NODES: usize = 4;
const MAX_NODES: usize = 30;
/// Weights stay inside the range the graph service accepts.
const MAX_WEIGHT: i64 = 100;

/// Generates fixtures across every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates an arbitrary edge list paired with a hint of at most one,
/// negative hints included.
pub(super) fn trivial_hint_strategy() -> impl Strategy<Value = (Vec<WeightedEdge>, i64)> {
    let edge = ("[a-e]", "[a-e]", -MAX_WEIGHT..MAX_WEIGHT)
        .prop_map(|(u, v, weight)| WeightedEdge::new(u, v, weight));
    let hint = prop_oneof![-3_i64..=1, i64::MIN..-3, Just(i64::MIN)];
    (prop::collection::vec(edge, 1..24), hint)
}

/// Generates a fixture for a specific distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (edges, node_count_hint) = match distribution {
        WeightDistribution::Unique => generate_unique(rng),
        WeightDistribution::ManyIdentical => generate_identical(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Multigraph => generate_multigraph(rng),
        WeightDistribution::Truncated => generate_truncated(rng),
    };
    let label_count = label_ids(&edges).len();
    MstFixture {
        node_count_hint,
        label_count,
        edges,
        distribution,
    }
}

/// Adds each vertex pair with the given probability, then guarantees at
/// least one edge. The hint equals the number of generated vertices.
fn probabilistic_graph(
    rng: &mut SmallRng,
    node_count: usize,
    edge_probability: f64,
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> (Vec<WeightedEdge>, usize) {
    let names = labels(node_count);
    let mut edges = Vec::new();
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(edge_probability) {
                let edge_weight = weight(rng);
                edges.push(oriented_edge(rng, &names[i], &names[j], edge_weight));
            }
        }
    }
    if edges.is_empty() {
        edges.push(WeightedEdge::new(&names[0], &names[1], weight(rng)));
    }
    (edges, node_count)
}

fn generate_unique(rng: &mut SmallRng) -> (Vec<WeightedEdge>, usize) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let edge_probability = rng.gen_range(0.2..=0.6);
    let mut next_weight = 0;
    probabilistic_graph(rng, node_count, edge_probability, |_| {
        next_weight += 1;
        next_weight
    })
}

fn generate_identical(rng: &mut SmallRng) -> (Vec<WeightedEdge>, usize) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let pool: Vec<i64> = (0..rng.gen_range(1..=3))
        .map(|_| rng.gen_range(0..10))
        .collect();
    let edge_probability = rng.gen_range(0.3..=0.7);
    probabilistic_graph(rng, node_count, edge_probability, move |r| {
        pool[r.gen_range(0..pool.len())]
    })
}

fn generate_dense(rng: &mut SmallRng) -> (Vec<WeightedEdge>, usize) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let edge_probability = rng.gen_range(0.7..=0.95);
    probabilistic_graph(rng, node_count, edge_probability, |r| {
        r.gen_range(0..MAX_WEIGHT)
    })
}

/// A random spanning path plus roughly `n / 2` extra edges.
fn generate_sparse(rng: &mut SmallRng) -> (Vec<WeightedEdge>, usize) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut names = labels(node_count);
    shuffle(&mut names, rng);

    let mut edges: Vec<WeightedEdge> = names
        .windows(2)
        .map(|pair| WeightedEdge::new(&pair[0], &pair[1], rng.gen_range(0..MAX_WEIGHT)))
        .collect();
    for _ in 0..node_count / 2 {
        let left = rng.gen_range(0..node_count);
        let right = rng.gen_range(0..node_count);
        if left != right {
            edges.push(WeightedEdge::new(
                &names[left],
                &names[right],
                rng.gen_range(0..MAX_WEIGHT),
            ));
        }
    }
    shuffle(&mut edges, rng);
    (edges, node_count)
}

/// Two to five components with no cross-component edges. The hint counts
/// every vertex, so selection can never reach it.
fn generate_disconnected(rng: &mut SmallRng) -> (Vec<WeightedEdge>, usize) {
    let mut edges = Vec::new();
    let mut offset = 0;
    for _ in 0..rng.gen_range(2..=5) {
        let size = rng.gen_range(2..=8);
        let names: Vec<String> = (offset..offset + size).map(|index| format!("v{index}")).collect();
        let start = edges.len();
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(0.5) {
                    let weight = rng.gen_range(0..MAX_WEIGHT);
                    edges.push(WeightedEdge::new(&names[i], &names[j], weight));
                }
            }
        }
        if edges.len() == start {
            edges.push(WeightedEdge::new(&names[0], &names[1], rng.gen_range(0..MAX_WEIGHT)));
        }
        offset += size;
    }
    shuffle(&mut edges, rng);
    (edges, offset)
}

/// Few labels, many edges: parallel edges, reversed duplicates and
/// self-loops are all likely.
fn generate_multigraph(rng: &mut SmallRng) -> (Vec<WeightedEdge>, usize) {
    let node_count = rng.gen_range(2..=6);
    let names = labels(node_count);
    let edges = (0..rng.gen_range(1..=24))
        .map(|_| {
            let left = &names[rng.gen_range(0..node_count)];
            let right = &names[rng.gen_range(0..node_count)];
            WeightedEdge::new(left, right, rng.gen_range(0..5))
        })
        .collect();
    (edges, node_count)
}

/// A connected graph whose hint is below its label count.
fn generate_truncated(rng: &mut SmallRng) -> (Vec<WeightedEdge>, usize) {
    let (edges, node_count) = generate_sparse(rng);
    let hint = rng.gen_range(2..node_count);
    (edges, hint)
}

/// Randomly swaps the endpoints so key canonicalisation is exercised.
fn oriented_edge(rng: &mut SmallRng, left: &str, right: &str, weight: i64) -> WeightedEdge {
    if rng.gen_bool(0.5) {
        WeightedEdge::new(left, right, weight)
    } else {
        WeightedEdge::new(right, left, weight)
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::sample::Select<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(vec![
            Self::Unique,
            Self::ManyIdentical,
            Self::ManyIdentical,
            Self::Sparse,
            Self::Dense,
            Self::Disconnected,
            Self::Multigraph,
            Self::Truncated,
        ])
    }
}

use spanwood_core::{GraphService, GraphServiceBuilder, InMemoryGraphStore, WeightedEdge};

/// Builds edges from `(u, v, weight)` triples.
#[must_use]
pub fn edges(triples: &[(&str, &str, i64)]) -> Vec<WeightedEdge> {
    triples
        .iter()
        .map(|&(u, v, weight)| WeightedEdge::new(u, v, weight))
        .collect()
}

/// A service over an empty in-memory store with default settings.
#[must_use]
pub fn service() -> GraphService<InMemoryGraphStore> {
    GraphServiceBuilder::new().build(InMemoryGraphStore::new())
}

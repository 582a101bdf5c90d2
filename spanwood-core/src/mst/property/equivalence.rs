//! Equivalence with the Prim's oracle.
//!
//! For any generated graph the builder must select as many edges, at the same
//! total weight, as the `hint - 1` lightest edges of a minimum spanning forest
//! computed by Prim's algorithm.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::build_spanning_forest;

use super::oracle::prim_forest;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = build_spanning_forest(&fixture.edges, fixture.hint()).map_err(|err| {
        TestCaseError::fail(format!(
            "build_spanning_forest failed: {err} ({})",
            fixture.describe()
        ))
    })?;

    let oracle = prim_forest(&fixture.edges);
    let limit = fixture.node_count_hint.saturating_sub(1);

    let expected_cost = oracle.capped_total(limit);
    if forest.total_cost() != expected_cost {
        return Err(TestCaseError::fail(format!(
            "total cost mismatch: kruskal={}, oracle={expected_cost} ({})",
            forest.total_cost(),
            fixture.describe(),
        )));
    }

    let expected_len = oracle.capped_len(limit);
    if forest.edges().len() != expected_len {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, oracle={expected_len} ({})",
            forest.edges().len(),
            fixture.describe(),
        )));
    }

    if limit >= oracle.weights.len() && forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={}, oracle={} ({})",
            forest.component_count(),
            oracle.component_count,
            fixture.describe(),
        )));
    }

    Ok(())
}

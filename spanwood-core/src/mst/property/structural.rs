//! Structural invariant verification.
//!
//! For any forest produced by the builder, verifies:
//!
//! - **Size bound**: at most `hint - 1` edges, and none for a hint below two.
//! - **Acyclicity**: no accepted edge joins two already connected vertices.
//! - **Edge count**: `V - C` edges when the hint did not cap selection.
//! - **Key agreement**: the included keys are exactly the selected edges'.
//! - **Acceptance order**: weights ascend, equal weights in input order.
//! - **Determinism**: a second run selects the same positions.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{SpanningForest, build_spanning_forest};

use super::helpers::{component_count, find_root, label_ids};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = build(fixture)?;

    validate_size_bound(fixture, &forest)?;
    validate_acyclicity(fixture, &forest)?;
    validate_edge_count(fixture, &forest)?;
    validate_keys(fixture, &forest)?;
    validate_acceptance_order(fixture, &forest)?;
    validate_determinism(fixture, &forest)?;

    Ok(())
}

fn build(fixture: &MstFixture) -> Result<SpanningForest, TestCaseError> {
    build_spanning_forest(&fixture.edges, fixture.hint()).map_err(|err| {
        TestCaseError::fail(format!(
            "build_spanning_forest failed: {err} ({})",
            fixture.describe()
        ))
    })
}

fn validate_size_bound(fixture: &MstFixture, forest: &SpanningForest) -> TestCaseResult {
    let limit = fixture.node_count_hint.saturating_sub(1);
    if forest.edges().len() > limit {
        return Err(TestCaseError::fail(format!(
            "selected {} edges with a limit of {limit} ({})",
            forest.edges().len(),
            fixture.describe(),
        )));
    }
    Ok(())
}

/// Replays the selection through an independent union-find.
fn validate_acyclicity(fixture: &MstFixture, forest: &SpanningForest) -> TestCaseResult {
    let ids = label_ids(&fixture.edges);
    let mut parent: Vec<usize> = (0..ids.len()).collect();
    for (index, selected) in forest.edges().iter().enumerate() {
        let edge = selected.edge();
        let left = find_root(&mut parent, ids[edge.u.as_str()]);
        let right = find_root(&mut parent, ids[edge.v.as_str()]);
        if left == right {
            return Err(TestCaseError::fail(format!(
                "cycle detected at accepted edge {index} ({edge}) ({})",
                fixture.describe()
            )));
        }
        parent[right] = left;
    }
    Ok(())
}

fn validate_edge_count(fixture: &MstFixture, forest: &SpanningForest) -> TestCaseResult {
    let ids = label_ids(&fixture.edges);
    let components = component_count(&ids, &fixture.edges);
    let full = fixture.label_count - components;
    let limit = fixture.node_count_hint.saturating_sub(1);
    let expected = full.min(limit);

    if forest.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {} != min(V - C = {full}, limit = {limit}) ({})",
            forest.edges().len(),
            fixture.describe(),
        )));
    }
    if limit >= full && forest.component_count() != components {
        return Err(TestCaseError::fail(format!(
            "component count {} != {components} ({})",
            forest.component_count(),
            fixture.describe(),
        )));
    }
    Ok(())
}

fn validate_keys(fixture: &MstFixture, forest: &SpanningForest) -> TestCaseResult {
    let from_edges: std::collections::BTreeSet<_> = forest
        .edges()
        .iter()
        .map(|selected| fixture.edges[selected.position()].key())
        .collect();
    if from_edges != forest.included_keys() {
        return Err(TestCaseError::fail(format!(
            "included keys disagree with the selected positions ({})",
            fixture.describe()
        )));
    }
    Ok(())
}

fn validate_acceptance_order(fixture: &MstFixture, forest: &SpanningForest) -> TestCaseResult {
    for pair in forest.edges().windows(2) {
        let (earlier, later) = (&pair[0], &pair[1]);
        let ordered = match earlier.edge().weight.cmp(&later.edge().weight) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Equal => earlier.position() < later.position(),
            std::cmp::Ordering::Greater => false,
        };
        if !ordered {
            return Err(TestCaseError::fail(format!(
                "edge at position {} accepted before position {} ({})",
                earlier.position(),
                later.position(),
                fixture.describe(),
            )));
        }
    }
    Ok(())
}

fn validate_determinism(fixture: &MstFixture, forest: &SpanningForest) -> TestCaseResult {
    let rerun = build(fixture)?;
    if &rerun != forest {
        return Err(TestCaseError::fail(format!(
            "repeated build selected a different forest ({})",
            fixture.describe()
        )));
    }
    Ok(())
}

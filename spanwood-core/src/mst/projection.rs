//! Projection of a computed forest back onto stored edge records.
//!
//! Both projections validate the whole selection before touching any record,
//! then clear every `included` flag and set the flags of the selected edges,
//! so a recomputation never leaves stale marks behind.

use std::collections::{BTreeSet, HashMap};

use crate::{error::MstError, graph::EdgeRecord};

use super::{EdgeKey, SpanningForest};

/// How a computed forest is matched back to stored edges.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ProjectionMode {
    /// Match on the canonical endpoint key. Parallel edges sharing a key are
    /// all marked once any of them is selected.
    #[default]
    EdgeKey,
    /// Match on the input position carried through the computation, which
    /// keeps parallel edges distinct.
    Position,
}

impl ProjectionMode {
    /// Applies this projection to `records`, which must be the edge list the
    /// forest was computed from. Returns the number of records marked.
    ///
    /// # Errors
    /// Returns [`MstError::InvariantViolation`] when the forest references an
    /// edge that is not among `records`.
    pub fn apply(
        self,
        records: &mut [EdgeRecord],
        forest: &SpanningForest,
    ) -> Result<usize, MstError> {
        match self {
            Self::EdgeKey => project_by_key(records, &forest.included_keys()),
            Self::Position => project_by_position(records, forest),
        }
    }
}

/// Marks every record whose canonical key is in `included` and clears the
/// rest. Returns the number of records marked.
///
/// # Errors
/// Returns [`MstError::InvariantViolation`] when a key in `included` matches
/// no record; `records` is left untouched in that case.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
///
/// use spanwood_core::{EdgeId, EdgeKey, EdgeRecord, WeightedEdge, project_by_key};
///
/// let record = |id, u, v, weight| EdgeRecord {
///     id: EdgeId::new(id).expect("non-zero id"),
///     edge: WeightedEdge::new(u, v, weight),
///     included: true,
/// };
/// let mut records = vec![record(1, "A", "B", 5), record(2, "C", "B", 3)];
/// let included = BTreeSet::from([EdgeKey::new("B", "C")]);
///
/// assert_eq!(project_by_key(&mut records, &included)?, 1);
/// assert!(!records[0].included);
/// assert!(records[1].included);
/// # Ok::<(), spanwood_core::MstError>(())
/// ```
pub fn project_by_key(
    records: &mut [EdgeRecord],
    included: &BTreeSet<EdgeKey>,
) -> Result<usize, MstError> {
    let mut by_key: HashMap<EdgeKey, Vec<usize>> = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        by_key.entry(record.edge.key()).or_default().push(position);
    }

    let mut marked = Vec::with_capacity(included.len());
    for (index, key) in included.iter().enumerate() {
        let positions = by_key.get(key).ok_or(MstError::InvariantViolation {
            invariant: "every selected key matches a stored edge",
            index,
        })?;
        marked.extend_from_slice(positions);
    }

    Ok(mark(records, &marked))
}

/// Marks exactly the records at the positions accepted into `forest` and
/// clears the rest. Returns the number of records marked.
///
/// # Errors
/// Returns [`MstError::InvariantViolation`] when a selected position lies
/// outside `records`; `records` is left untouched in that case.
pub fn project_by_position(
    records: &mut [EdgeRecord],
    forest: &SpanningForest,
) -> Result<usize, MstError> {
    let positions: Vec<usize> = forest.edges().iter().map(|edge| edge.position()).collect();
    if let Some(&index) = positions.iter().find(|&&position| position >= records.len()) {
        return Err(MstError::InvariantViolation {
            invariant: "every selected position indexes a stored edge",
            index,
        });
    }

    Ok(mark(records, &positions))
}

fn mark(records: &mut [EdgeRecord], positions: &[usize]) -> usize {
    for record in records.iter_mut() {
        record.included = false;
    }
    let mut marked = 0;
    for &position in positions {
        if let Some(record) = records.get_mut(position) {
            record.included = true;
            marked += 1;
        }
    }
    marked
}

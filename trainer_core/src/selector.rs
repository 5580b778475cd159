//! Random exercise selection.
//!
//! Draws a uniform subset of a muscle group's exercises, honouring an
//! exclusion set. The RNG is injected so callers (and tests) control
//! determinism.

use crate::{ExerciseCatalog, MuscleGroup};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;

/// Select up to `count` distinct exercises for a muscle group
///
/// Samples uniformly without replacement from the group's catalog
/// entries minus `excluded`. Returns fewer than `count` names when the
/// pool is small, and an empty vec when nothing remains - exhaustion
/// is not an error.
pub fn select_exercises<R: Rng>(
    catalog: &ExerciseCatalog,
    group: MuscleGroup,
    count: usize,
    excluded: &HashSet<String>,
    rng: &mut R,
) -> Vec<String> {
    let candidates: Vec<&String> = catalog
        .exercises_for(group)
        .iter()
        .filter(|name| !excluded.contains(*name))
        .collect();

    if candidates.is_empty() {
        tracing::debug!(
            "No candidates left for {:?} after {} exclusions",
            group,
            excluded.len()
        );
        return Vec::new();
    }

    candidates
        .choose_multiple(rng, count)
        .map(|name| (*name).clone())
        .collect()
}

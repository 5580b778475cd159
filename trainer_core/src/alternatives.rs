//! Substitute suggestions for disliked exercises.

use crate::{select_exercises, ExerciseCatalog, MuscleGroup};
use rand::Rng;
use std::collections::HashSet;

/// Propose substitutes for a disliked exercise
///
/// Draws up to two other exercises from the same muscle group and
/// formats a suggestion sentence; an exhausted group produces a
/// "no alternative" message instead of an error.
pub fn alternative_exercises<R: Rng>(
    catalog: &ExerciseCatalog,
    disliked_name: &str,
    group: MuscleGroup,
    rng: &mut R,
) -> String {
    let mut excluded = HashSet::new();
    excluded.insert(disliked_name.to_string());

    let alternatives = select_exercises(catalog, group, 2, &excluded, rng);

    if alternatives.is_empty() {
        format!(
            "No direct alternative found for {} in the same muscle group. Consider other exercises for {} or a different movement pattern.",
            disliked_name,
            group.as_str()
        )
    } else {
        format!(
            "Instead of {}, you could try: {}.",
            disliked_name,
            alternatives.join(", ")
        )
    }
}

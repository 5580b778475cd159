//! Default exercise catalog.
//!
//! This module provides the built-in muscle-group → exercise mapping
//! used by the selector and program builder.

use crate::config::CustomExercise;
use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<ExerciseCatalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
///
/// This function returns a reference to the pre-built catalog, avoiding
/// the overhead of rebuilding it on every operation.
pub fn get_default_catalog() -> &'static ExerciseCatalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog with the built-in exercise lists
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom catalog creation.
pub fn build_default_catalog() -> ExerciseCatalog {
    build_default_catalog_internal()
}

/// Internal function that actually builds the catalog
fn build_default_catalog_internal() -> ExerciseCatalog {
    let mut groups = HashMap::new();

    groups.insert(
        MuscleGroup::Chest,
        vec![
            "Bench Press".into(),
            "Incline Dumbbell Press".into(),
            "Dumbbell Flyes".into(),
            "Push-ups".into(),
            "Cable Crossovers".into(),
        ],
    );

    groups.insert(
        MuscleGroup::Back,
        vec![
            "Pull-ups".into(),
            "Bent-over Rows".into(),
            "Seated Cable Rows".into(),
            "Lat Pulldowns".into(),
            "Deadlifts (Conventional/Sumo)".into(),
        ],
    );

    groups.insert(
        MuscleGroup::Legs,
        vec![
            "Squats".into(),
            "Leg Press".into(),
            "Romanian Deadlifts".into(),
            "Lunges".into(),
            "Hamstring Curls".into(),
            "Calf Raises".into(),
        ],
    );

    groups.insert(
        MuscleGroup::Shoulders,
        vec![
            "Overhead Press".into(),
            "Lateral Raises".into(),
            "Front Raises".into(),
            "Reverse Pec Deck".into(),
            "Arnold Press".into(),
        ],
    );

    groups.insert(
        MuscleGroup::Biceps,
        vec![
            "Barbell Curls".into(),
            "Dumbbell Curls".into(),
            "Hammer Curls".into(),
            "Concentration Curls".into(),
        ],
    );

    groups.insert(
        MuscleGroup::Triceps,
        vec![
            "Close-grip Bench Press".into(),
            "Overhead Dumbbell Extension".into(),
            "Tricep Pushdowns".into(),
            "Skullcrushers".into(),
        ],
    );

    groups.insert(
        MuscleGroup::Core,
        vec![
            "Plank".into(),
            "Crunches".into(),
            "Leg Raises".into(),
            "Russian Twists".into(),
            "Cable Woodchoppers".into(),
        ],
    );

    ExerciseCatalog { groups }
}

impl ExerciseCatalog {
    /// Merge user-supplied exercises from the config into the catalog
    ///
    /// Appends each custom exercise to its group, skipping names the
    /// group already contains.
    pub fn with_custom(mut self, custom: &[CustomExercise]) -> Self {
        for extra in custom {
            let names = self.groups.entry(extra.group).or_default();
            if names.iter().any(|n| n == &extra.name) {
                tracing::debug!(
                    "Custom exercise '{}' already in {:?}, skipping",
                    extra.name,
                    extra.group
                );
                continue;
            }
            names.push(extra.name.clone());
        }
        self
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (group, names) in &self.groups {
            if names.is_empty() {
                errors.push(format!("Muscle group '{}' has no exercises", group.as_str()));
            }

            let mut seen = std::collections::HashSet::new();
            for name in names {
                if name.is_empty() {
                    errors.push(format!(
                        "Muscle group '{}' has an exercise with an empty name",
                        group.as_str()
                    ));
                }
                if !seen.insert(name) {
                    errors.push(format!(
                        "Muscle group '{}' lists '{}' more than once",
                        group.as_str(),
                        name
                    ));
                }
            }
        }

        // Every known group must be covered
        for group in MuscleGroup::ALL {
            if !self.groups.contains_key(&group) {
                errors.push(format!("Catalog has no '{}' group", group.as_str()));
            }
        }

        errors
    }
}

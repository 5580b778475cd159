//! Weekly split planning.
//!
//! Maps a requested training-day count onto a fixed table of expert
//! default splits. The table is deliberately hardcoded; day counts
//! above six reuse the five/six-day list truncated to the request.

use crate::{DayTemplate, Error, MuscleGroup, Result};

use MuscleGroup::*;

/// Plan the weekly split for a given number of training days
///
/// Returns one `DayTemplate` per training day, at most six. A
/// non-positive day count is the planner's only failure.
pub fn plan_split(days_per_week: i32) -> Result<Vec<DayTemplate>> {
    if days_per_week <= 0 {
        return Err(Error::Validation("invalid training day count".into()));
    }

    let table: Vec<(&str, Vec<MuscleGroup>)> = match days_per_week {
        // Full body
        1 => vec![("Full Body", vec![Chest, Back, Legs, Shoulders, Core])],
        // Upper/Lower
        2 => vec![
            ("Upper Body A", vec![Chest, Back, Shoulders, Biceps, Triceps]),
            ("Lower Body A", vec![Legs, Core]),
        ],
        // Full body with rotating focus
        3 => vec![
            ("Full Body A", vec![Chest, Back, Legs]),
            (
                "Full Body B (Focus Shoulders/Arms)",
                vec![Shoulders, Biceps, Triceps, Core],
            ),
            ("Full Body C (Focus Legs/Back)", vec![Legs, Back, Chest]),
        ],
        // Upper/Lower twice over
        4 => vec![
            ("Upper Body A", vec![Chest, Back, Shoulders]),
            ("Lower Body A", vec![Legs, Core]),
            ("Upper Body B", vec![Shoulders, Biceps, Triceps]),
            ("Lower Body B", vec![Legs, Back]),
        ],
        // Push/Pull/Legs; a sixth day adds a second leg day
        _ => {
            let mut ppl = vec![
                (
                    "Push Day (Chest, Shoulders, Triceps)",
                    vec![Chest, Shoulders, Triceps],
                ),
                ("Pull Day (Back, Biceps)", vec![Back, Biceps]),
                ("Leg Day", vec![Legs, Core]),
                (
                    "Push Day 2 (Variation)",
                    vec![Chest, Shoulders, Triceps],
                ),
                ("Pull Day 2 (Variation)", vec![Back, Biceps]),
            ];
            if days_per_week == 6 {
                ppl.push(("Leg Day 2 or Accessory", vec![Legs, Core]));
            }
            ppl
        }
    };

    let templates: Vec<DayTemplate> = table
        .into_iter()
        .take(days_per_week as usize)
        .map(|(name, muscle_groups)| DayTemplate {
            day_name: name.to_string(),
            muscle_groups,
        })
        .collect();

    tracing::debug!(
        "Planned {} day templates for {} requested days",
        templates.len(),
        days_per_week
    );

    Ok(templates)
}

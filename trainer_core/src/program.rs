//! Weekly program assembly.
//!
//! Orchestrates the split planner, exercise selector, and scheme
//! advisor into a full program for a profile:
//! - Plan the day templates for the requested frequency
//! - Pick exercises per muscle group, skipping dislikes
//! - Attach a set/rep scheme and notes to every pick

use crate::{
    plan_split, prescribe, select_exercises, ExerciseCatalog, ExperienceLevel, Goal,
    MuscleGroup, PrescribedExercise, Profile, Program, Result, WorkoutDay,
};
use rand::Rng;

/// Build a weekly workout program for a profile
///
/// Fails only when the split planner rejects the day count; an empty
/// candidate pool for a muscle group simply yields fewer exercises.
pub fn build_program<R: Rng>(
    catalog: &ExerciseCatalog,
    profile: &Profile,
    rng: &mut R,
) -> Result<Program> {
    let split = plan_split(profile.days_per_week)?;

    tracing::info!(
        "Building {}-day {} program ({})",
        split.len(),
        profile.goal.as_str(),
        profile.experience.as_str()
    );

    let mut days = Vec::with_capacity(split.len());

    for template in split {
        let mut exercises = Vec::new();

        for group in &template.muscle_groups {
            let count = exercise_count_for(*group, profile.goal, profile.experience);
            let selected =
                select_exercises(catalog, *group, count, &profile.disliked_exercises, rng);

            if selected.is_empty() {
                tracing::warn!(
                    "No exercises available for {:?} on '{}'",
                    group,
                    template.day_name
                );
            }

            for name in selected {
                let scheme = prescribe(&name, profile.goal, profile.experience, rng);
                exercises.push(PrescribedExercise {
                    name,
                    sets: scheme.sets,
                    reps: scheme.reps,
                    rir: scheme.rir,
                    rest_seconds: scheme.rest_seconds,
                    note: Some(format!(
                        "Focus on {}. Maintain good form.",
                        profile.goal.as_str()
                    )),
                    technique_note: scheme.technique_note,
                });
            }
        }

        days.push(WorkoutDay {
            day_name: template.day_name,
            exercises,
        });
    }

    Ok(Program { days })
}

/// How many exercises to draw for a muscle group
///
/// Larger groups (legs/back/chest) get an extra pick past beginner;
/// core is fixed at 1 (beginner) or 2 regardless.
fn exercise_count_for(group: MuscleGroup, goal: Goal, experience: ExperienceLevel) -> usize {
    let base = match experience {
        ExperienceLevel::Intermediate | ExperienceLevel::Advanced => 2,
        ExperienceLevel::Beginner => 1,
    };
    // Strength work narrows to the key compounds
    let base = if goal == Goal::Strength { 1 } else { base };

    let mut count = base;
    if matches!(group, MuscleGroup::Legs | MuscleGroup::Back | MuscleGroup::Chest)
        && experience != ExperienceLevel::Beginner
    {
        count = (base + 1).min(3);
    }
    if group == MuscleGroup::Core {
        count = if experience == ExperienceLevel::Beginner { 1 } else { 2 };
    }
    count
}

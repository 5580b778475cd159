//! Core domain types for the Liftplan system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Muscle groups, training goals, and experience levels
//! - Generation profiles and day templates
//! - Prescribed exercises, workout days, and programs
//! - Logged performance records and stored user settings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

// ============================================================================
// Classification Types
// ============================================================================

/// Coarse body-region category used to bucket exercises
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Biceps,
    Triceps,
    Core,
}

impl MuscleGroup {
    /// All muscle groups, in catalog order
    pub const ALL: [MuscleGroup; 7] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Core,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Core => "core",
        }
    }

    /// Parse a muscle group name, case-insensitively
    pub fn parse(s: &str) -> Option<MuscleGroup> {
        match s.to_lowercase().as_str() {
            "chest" => Some(MuscleGroup::Chest),
            "back" => Some(MuscleGroup::Back),
            "legs" => Some(MuscleGroup::Legs),
            "shoulders" => Some(MuscleGroup::Shoulders),
            "biceps" => Some(MuscleGroup::Biceps),
            "triceps" => Some(MuscleGroup::Triceps),
            "core" => Some(MuscleGroup::Core),
            _ => None,
        }
    }
}

/// Training goal driving scheme selection
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    MuscleGain,
    Strength,
    Endurance,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::MuscleGain => "muscle_gain",
            Goal::Strength => "strength",
            Goal::Endurance => "endurance",
        }
    }

    /// Parse a goal name, case-insensitively
    pub fn parse(s: &str) -> Option<Goal> {
        match s.to_lowercase().as_str() {
            "muscle_gain" | "hypertrophy" => Some(Goal::MuscleGain),
            "strength" => Some(Goal::Strength),
            "endurance" => Some(Goal::Endurance),
            _ => None,
        }
    }
}

/// Lifter experience tier
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    /// Parse an experience level name, case-insensitively
    pub fn parse(s: &str) -> Option<ExperienceLevel> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(ExperienceLevel::Beginner),
            "intermediate" => Some(ExperienceLevel::Intermediate),
            "advanced" => Some(ExperienceLevel::Advanced),
            _ => None,
        }
    }
}

// ============================================================================
// Generation Types
// ============================================================================

/// Per-request generation profile
///
/// Assembled by the caller from stored settings plus overrides;
/// never persisted by the generator itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Profile {
    pub goal: Goal,
    pub experience: ExperienceLevel,
    pub days_per_week: i32,
    pub disliked_exercises: HashSet<String>,
}

/// One day in a weekly split: a name plus the muscle groups trained
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayTemplate {
    pub day_name: String,
    pub muscle_groups: Vec<MuscleGroup>,
}

/// A single exercise with its full training prescription
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrescribedExercise {
    pub name: String,
    pub sets: u32,
    /// Single number, "low-high" range, or "N+" open-ended
    pub reps: String,
    pub rir: u32,
    pub rest_seconds: u32,
    pub note: Option<String>,
    pub technique_note: Option<String>,
}

/// One generated training day
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day_name: String,
    pub exercises: Vec<PrescribedExercise>,
}

/// A complete weekly program, the generator's terminal output
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Program {
    pub days: Vec<WorkoutDay>,
}

// ============================================================================
// Logged Performance Types
// ============================================================================

/// One logged performance record for an exercise
///
/// Optional fields default individually when absent (sets 3, reps "8",
/// weight 50, RIR 2) so partial logs still produce advice.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PerformanceLog {
    pub id: Uuid,
    pub exercise_name: String,
    pub logged_at: DateTime<Utc>,
    pub sets_completed: Option<u32>,
    /// Single number, hyphen range, or hyphen-joined per-set figures
    pub reps_achieved: Option<String>,
    pub weight_lifted: Option<f64>,
    pub rir_achieved: Option<i32>,
    pub notes: Option<String>,
}

// ============================================================================
// Stored Settings Type
// ============================================================================

/// User's persisted training preferences
///
/// The baseline a generation profile is assembled from; per-request
/// flags override these.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserSettings {
    pub goal: Goal,
    pub experience: ExperienceLevel,
    pub days_per_week: i32,
    pub disliked_exercises: HashSet<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            goal: Goal::MuscleGain,
            experience: ExperienceLevel::Beginner,
            days_per_week: 3,
            disliked_exercises: HashSet::new(),
        }
    }
}

// ============================================================================
// Catalog Type
// ============================================================================

/// The complete catalog of exercises, bucketed by muscle group
#[derive(Clone, Debug)]
pub struct ExerciseCatalog {
    pub groups: HashMap<MuscleGroup, Vec<String>>,
}

impl ExerciseCatalog {
    /// Ordered exercise names for a muscle group
    ///
    /// Returns an empty slice for a group with no entry; callers treat
    /// empty as "no candidates".
    pub fn exercises_for(&self, group: MuscleGroup) -> &[String] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any group contains an exercise with this exact name
    pub fn contains(&self, name: &str) -> bool {
        self.groups.values().any(|names| names.iter().any(|n| n == name))
    }
}

#![forbid(unsafe_code)]

//! Core domain model and business logic for the Liftplan workout
//! programming system.
//!
//! This crate provides:
//! - Domain types (muscle groups, goals, profiles, programs, logs)
//! - Exercise catalog management
//! - Weekly split planning and program generation
//! - Set/rep scheme assignment and progression advice
//! - Persistence (journal WAL, CSV, stored settings)

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod journal;
pub mod csv_rollup;
pub mod state;
pub mod history;
pub mod split;
pub mod selector;
pub mod scheme;
pub mod program;
pub mod progression;
pub mod alternatives;
pub mod summary;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::build_default_catalog;
pub use config::Config;
pub use journal::{JsonlSink, LogSink};
pub use history::{find_last_log_for_exercise, load_recent_logs};
pub use split::plan_split;
pub use selector::select_exercises;
pub use scheme::{prescribe, SetRepScheme};
pub use program::build_program;
pub use progression::suggest_progression;
pub use alternatives::alternative_exercises;
pub use summary::{summarize, WorkoutSummary};

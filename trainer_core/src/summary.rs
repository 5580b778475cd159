//! Training summary over logged history.
//!
//! Aggregates performance records into the headline numbers a lifter
//! checks between sessions: how often they trained, how much they
//! moved, and what the last few logs looked like.

use crate::PerformanceLog;
use std::collections::HashSet;

/// Number of recent log lines included in a summary
const RECENT_LINES: usize = 10;

/// One rendered line for a recent logged set
#[derive(Clone, Debug, PartialEq)]
pub struct RecentLogLine {
    pub exercise_name: String,
    pub date: String,
    pub details: String,
}

/// Aggregated training summary
#[derive(Clone, Debug)]
pub struct WorkoutSummary {
    /// Distinct days on which anything was logged
    pub total_sessions: usize,
    /// Sum of weight x reps x sets over parseable entries
    pub total_volume: f64,
    pub recent: Vec<RecentLogLine>,
}

/// Summarize logged history (expected newest first)
pub fn summarize(logs: &[PerformanceLog]) -> WorkoutSummary {
    let days: HashSet<_> = logs.iter().map(|l| l.logged_at.date_naive()).collect();

    let mut total_volume = 0.0;
    for log in logs {
        // Volume counts the first rep figure of a range/per-set string
        let reps_value = log
            .reps_achieved
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.split('-').next())
            .and_then(|first| first.trim().parse::<i64>().ok());

        match (reps_value, log.weight_lifted, log.sets_completed) {
            (Some(reps), Some(weight), Some(sets)) => {
                total_volume += weight * reps as f64 * sets as f64;
            }
            _ => {
                tracing::debug!(
                    "Skipping volume for log {} (unparseable or incomplete)",
                    log.id
                );
            }
        }
    }

    let recent = logs
        .iter()
        .take(RECENT_LINES)
        .map(|log| {
            let sets = log
                .sets_completed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            let reps = log.reps_achieved.clone().unwrap_or_else(|| "N/A".to_string());
            let mut details = format!("{} sets, {} reps", sets, reps);
            if let Some(weight) = log.weight_lifted {
                details.push_str(&format!(" @ {}kg", weight));
            }
            RecentLogLine {
                exercise_name: log.exercise_name.clone(),
                date: log.logged_at.format("%Y-%m-%d %H:%M").to_string(),
                details,
            }
        })
        .collect();

    WorkoutSummary {
        total_sessions: days.len(),
        total_volume: (total_volume * 100.0).round() / 100.0,
        recent,
    }
}

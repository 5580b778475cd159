//! Training history loading.
//!
//! This module loads recent performance records from both the journal
//! and the CSV archive to feed the progression advisor and summary.

use crate::{PerformanceLog, Result};
use chrono::{DateTime, Duration, Utc};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use uuid::Uuid;

/// CSV row format for reading archived entries
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    exercise_name: String,
    logged_at: String,
    sets_completed: Option<u32>,
    reps_achieved: Option<String>,
    weight_lifted: Option<f64>,
    rir_achieved: Option<i32>,
    notes: Option<String>,
}

impl TryFrom<CsvRow> for PerformanceLog {
    type Error = crate::Error;

    fn try_from(row: CsvRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| crate::Error::Other(format!("Invalid UUID: {}", e)))?;

        let logged_at = DateTime::parse_from_rfc3339(&row.logged_at)
            .map_err(|e| crate::Error::Other(format!("Invalid date: {}", e)))?
            .with_timezone(&Utc);

        Ok(PerformanceLog {
            id,
            exercise_name: row.exercise_name,
            logged_at,
            sets_completed: row.sets_completed,
            reps_achieved: row.reps_achieved,
            weight_lifted: row.weight_lifted,
            rir_achieved: row.rir_achieved,
            notes: row.notes,
        })
    }
}

/// Load entries from the last N days from both journal and CSV
///
/// Returns entries sorted by logged_at (newest first).
/// Automatically deduplicates entries that appear in both files.
pub fn load_recent_logs(
    journal_path: &Path,
    csv_path: &Path,
    days: i64,
) -> Result<Vec<PerformanceLog>> {
    let cutoff = Utc::now() - Duration::days(days);
    let mut logs = Vec::new();
    let mut seen_ids = HashSet::new();

    // Load from the journal first (most recent)
    if journal_path.exists() {
        let journal_entries = crate::journal::read_entries(journal_path)?;
        for entry in journal_entries {
            if entry.logged_at >= cutoff {
                seen_ids.insert(entry.id);
                logs.push(entry);
            }
        }
        tracing::debug!("Loaded {} entries from journal", logs.len());
    }

    // Load from CSV (archived)
    if csv_path.exists() {
        let csv_entries = load_logs_from_csv(csv_path)?;
        let mut csv_count = 0;
        for entry in csv_entries {
            if entry.logged_at >= cutoff && !seen_ids.contains(&entry.id) {
                seen_ids.insert(entry.id);
                logs.push(entry);
                csv_count += 1;
            }
        }
        tracing::debug!("Loaded {} entries from CSV", csv_count);
    }

    // Sort by logged_at, newest first
    logs.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));

    tracing::info!("Loaded {} total entries from last {} days", logs.len(), days);

    Ok(logs)
}

/// Load all entries from a CSV file
fn load_logs_from_csv(path: &Path) -> Result<Vec<PerformanceLog>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut logs = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        match result {
            Ok(row) => match PerformanceLog::try_from(row) {
                Ok(entry) => logs.push(entry),
                Err(e) => {
                    tracing::warn!("Failed to parse CSV row: {}", e);
                    // Continue processing other rows
                }
            },
            Err(e) => {
                tracing::warn!("Failed to deserialize CSV row: {}", e);
            }
        }
    }

    Ok(logs)
}

/// Find the most recent logged set for a given exercise
pub fn find_last_log_for_exercise<'a>(
    logs: &'a [PerformanceLog],
    exercise_name: &str,
) -> Option<&'a PerformanceLog> {
    // Logs should already be sorted newest first
    logs.iter().find(|l| l.exercise_name == exercise_name)
}

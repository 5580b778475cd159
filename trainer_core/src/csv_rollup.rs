//! CSV rollup functionality for archiving journal entries.
//!
//! This module implements atomic journal-to-CSV conversion with proper
//! error handling to prevent data loss.

use crate::{PerformanceLog, Result};
use std::fs::OpenOptions;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
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

impl From<&PerformanceLog> for CsvRow {
    fn from(entry: &PerformanceLog) -> Self {
        CsvRow {
            id: entry.id.to_string(),
            exercise_name: entry.exercise_name.clone(),
            logged_at: entry.logged_at.to_rfc3339(),
            sets_completed: entry.sets_completed,
            reps_achieved: entry.reps_achieved.clone(),
            weight_lifted: entry.weight_lifted,
            rir_achieved: entry.rir_achieved,
            notes: entry.notes.clone(),
        }
    }
}

/// Roll up journal entries into CSV and archive the journal atomically
///
/// This function:
/// 1. Reads all entries from the journal
/// 2. Appends them to the CSV file (creates with headers if needed)
/// 3. Syncs the CSV to disk
/// 4. Renames the journal to .processed
/// 5. Returns the number of entries processed
///
/// # Safety
/// - CSV is fsynced before the journal is renamed
/// - The journal is renamed (not deleted) to allow manual recovery if needed
/// - Processed journal files can be cleaned up manually
pub fn journal_to_csv_and_archive(journal_path: &Path, csv_path: &Path) -> Result<usize> {
    // Read all entries from the journal
    let entries = crate::journal::read_entries(journal_path)?;

    if entries.is_empty() {
        tracing::info!("No entries in journal to roll up");
        return Ok(0);
    }

    // Ensure parent directory exists
    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Open CSV file for appending
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(csv_path)?;

    // Headers only when the file is new/empty
    let needs_headers = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_headers)
        .from_writer(file);

    // Write all entries to CSV
    for entry in &entries {
        let row = CsvRow::from(entry);
        writer.serialize(row)?;
    }

    // Flush and sync to disk
    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Wrote {} entries to CSV", entries.len());

    // Atomically archive the journal by renaming it
    let processed_path = journal_path.with_extension("wal.processed");
    std::fs::rename(journal_path, &processed_path)?;

    tracing::info!("Archived journal to {:?}", processed_path);

    Ok(entries.len())
}

/// Clean up old processed journal files
///
/// This removes all .wal.processed files in the given directory.
pub fn cleanup_processed_journals(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if let Some(extension) = path.extension() {
            if extension == "processed" {
                std::fs::remove_file(&path)?;
                tracing::debug!("Removed processed journal: {:?}", path);
                count += 1;
            }
        }
    }

    if count > 0 {
        tracing::info!("Cleaned up {} processed journal files", count);
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{JsonlSink, LogSink};
    use chrono::Utc;
    use std::fs::File;
    use uuid::Uuid;

    fn create_test_entry(exercise: &str) -> PerformanceLog {
        PerformanceLog {
            id: Uuid::new_v4(),
            exercise_name: exercise.into(),
            logged_at: Utc::now(),
            sets_completed: Some(3),
            reps_achieved: Some("10".into()),
            weight_lifted: Some(60.0),
            rir_achieved: Some(2),
            notes: None,
        }
    }

    #[test]
    fn test_journal_to_csv_creates_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let journal_path = temp_dir.path().join("sets.wal");
        let csv_path = temp_dir.path().join("sets.csv");

        // Write entries to the journal
        let mut sink = JsonlSink::new(&journal_path);
        for i in 0..3 {
            let entry = create_test_entry(&format!("Exercise {}", i));
            sink.append(&entry).unwrap();
        }

        // Roll up to CSV
        let count = journal_to_csv_and_archive(&journal_path, &csv_path).unwrap();
        assert_eq!(count, 3);

        // Verify CSV exists
        assert!(csv_path.exists());

        // Verify the journal was archived
        assert!(!journal_path.exists());
        assert!(journal_path.with_extension("wal.processed").exists());
    }

    #[test]
    fn test_journal_to_csv_appends() {
        let temp_dir = tempfile::tempdir().unwrap();
        let journal_path = temp_dir.path().join("sets.wal");
        let csv_path = temp_dir.path().join("sets.csv");

        // First rollup
        let mut sink = JsonlSink::new(&journal_path);
        sink.append(&create_test_entry("Squats")).unwrap();
        let count1 = journal_to_csv_and_archive(&journal_path, &csv_path).unwrap();
        assert_eq!(count1, 1);

        // Second rollup (appends)
        let mut sink = JsonlSink::new(&journal_path);
        sink.append(&create_test_entry("Lunges")).unwrap();
        let count2 = journal_to_csv_and_archive(&journal_path, &csv_path).unwrap();
        assert_eq!(count2, 1);

        // Verify CSV has both entries
        let reader = csv::Reader::from_path(&csv_path).unwrap();
        let record_count = reader.into_records().count();
        assert_eq!(record_count, 2);
    }

    #[test]
    fn test_empty_journal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let journal_path = temp_dir.path().join("empty.wal");
        let csv_path = temp_dir.path().join("sets.csv");

        // Create empty journal
        File::create(&journal_path).unwrap();

        let count = journal_to_csv_and_archive(&journal_path, &csv_path).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_cleanup_processed_journals() {
        let temp_dir = tempfile::tempdir().unwrap();

        // Create some processed journal files
        File::create(temp_dir.path().join("s1.wal.processed")).unwrap();
        File::create(temp_dir.path().join("s2.wal.processed")).unwrap();
        File::create(temp_dir.path().join("keep.wal")).unwrap();

        let count = cleanup_processed_journals(temp_dir.path()).unwrap();
        assert_eq!(count, 2);

        // Verify only .processed files were removed
        assert!(!temp_dir.path().join("s1.wal.processed").exists());
        assert!(!temp_dir.path().join("s2.wal.processed").exists());
        assert!(temp_dir.path().join("keep.wal").exists());
    }
}

//! Append-only training journal.
//!
//! Logged sets are appended to a JSONL (JSON Lines) file with file
//! locking to ensure safe concurrent access.

use crate::{PerformanceLog, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Log sink trait for persisting performance records
pub trait LogSink {
    fn append(&mut self, entry: &PerformanceLog) -> Result<()>;
}

/// JSONL-based log sink with file locking
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    /// Create a new JSONL sink for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl LogSink for JsonlSink {
    fn append(&mut self, entry: &PerformanceLog) -> Result<()> {
        self.ensure_parent_dir()?;

        // Open file for appending
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // Acquire exclusive lock
        file.lock_exclusive()?;

        // Write entry as JSON line
        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(entry)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        // Lock is automatically released when file is dropped
        file.unlock()?;

        tracing::debug!("Appended log entry {} to journal", entry.id);
        Ok(())
    }
}

/// Read all entries from a journal file
pub fn read_entries(path: &Path) -> Result<Vec<PerformanceLog>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    // Acquire shared lock for reading
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut entries = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<PerformanceLog>(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!("Failed to parse journal entry at line {}: {}", line_num + 1, e);
                // Continue reading, don't fail completely
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} entries from journal", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn create_test_entry() -> PerformanceLog {
        PerformanceLog {
            id: Uuid::new_v4(),
            exercise_name: "Bench Press".into(),
            logged_at: Utc::now(),
            sets_completed: Some(3),
            reps_achieved: Some("8-8-7".into()),
            weight_lifted: Some(80.0),
            rir_achieved: Some(2),
            notes: None,
        }
    }

    #[test]
    fn test_append_and_read_single_entry() {
        let temp_dir = tempfile::tempdir().unwrap();
        let journal_path = temp_dir.path().join("test.wal");

        let entry = create_test_entry();
        let entry_id = entry.id;

        // Append entry
        let mut sink = JsonlSink::new(&journal_path);
        sink.append(&entry).unwrap();

        // Read back
        let entries = read_entries(&journal_path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, entry_id);
        assert_eq!(entries[0].reps_achieved.as_deref(), Some("8-8-7"));
    }

    #[test]
    fn test_append_multiple_entries() {
        let temp_dir = tempfile::tempdir().unwrap();
        let journal_path = temp_dir.path().join("test.wal");

        let mut sink = JsonlSink::new(&journal_path);

        // Append multiple entries
        for _ in 0..5 {
            let entry = create_test_entry();
            sink.append(&entry).unwrap();
        }

        // Read back
        let entries = read_entries(&journal_path).unwrap();
        assert_eq!(entries.len(), 5);
    }

    #[test]
    fn test_read_empty_journal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let journal_path = temp_dir.path().join("nonexistent.wal");

        let entries = read_entries(&journal_path).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_corrupt_lines_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let journal_path = temp_dir.path().join("test.wal");

        let mut sink = JsonlSink::new(&journal_path);
        sink.append(&create_test_entry()).unwrap();

        // Inject garbage between valid lines
        {
            let mut file = OpenOptions::new().append(true).open(&journal_path).unwrap();
            file.write_all(b"{ not json }\n").unwrap();
        }
        sink.append(&create_test_entry()).unwrap();

        let entries = read_entries(&journal_path).unwrap();
        assert_eq!(entries.len(), 2);
    }
}

//! Completion journal for meditation sessions.
//!
//! Completed sessions are appended to a JSONL (JSON Lines) file with file
//! locking, giving the history listing a durable record without any
//! database.

use crate::Result;
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A meditation session the user finished
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompletedSession {
    pub id: Uuid,
    pub def_id: String,
    pub completed_at: DateTime<Utc>,
    pub duration_seconds: u32,
}

impl CompletedSession {
    pub fn new(def_id: &str, duration_seconds: u32, completed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            def_id: def_id.into(),
            completed_at,
            duration_seconds,
        }
    }
}

/// JSONL-based completion journal with file locking
pub struct CompletionJournal {
    path: PathBuf,
}

impl CompletionJournal {
    /// Create a journal for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append a completed session as one JSON line
    pub fn append(&mut self, session: &CompletedSession) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(session)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        file.unlock()?;

        tracing::debug!("Journaled completion of '{}'", session.def_id);
        Ok(())
    }
}

/// Read all completions from a journal file.
///
/// Malformed lines are skipped with a warning rather than failing the
/// whole read.
pub fn read_completions(path: &Path) -> Result<Vec<CompletedSession>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut completions = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<CompletedSession>(&line) {
            Ok(session) => completions.push(session),
            Err(e) => {
                tracing::warn!("Failed to parse completion at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} completions from journal", completions.len());
    Ok(completions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_read_single_completion() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("completions.jsonl");

        let session = CompletedSession::new("deep_breathing", 300, Utc::now());
        let session_id = session.id;

        let mut journal = CompletionJournal::new(&path);
        journal.append(&session).unwrap();

        let completions = read_completions(&path).unwrap();
        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].id, session_id);
        assert_eq!(completions[0].def_id, "deep_breathing");
    }

    #[test]
    fn test_append_preserves_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("completions.jsonl");

        let mut journal = CompletionJournal::new(&path);
        for def_id in ["body_scan", "stress_relief", "sleep_meditation"] {
            journal
                .append(&CompletedSession::new(def_id, 300, Utc::now()))
                .unwrap();
        }

        let ids: Vec<_> = read_completions(&path)
            .unwrap()
            .into_iter()
            .map(|c| c.def_id)
            .collect();
        assert_eq!(ids, vec!["body_scan", "stress_relief", "sleep_meditation"]);
    }

    #[test]
    fn test_read_missing_journal_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let completions =
            read_completions(&temp_dir.path().join("nonexistent.jsonl")).unwrap();
        assert!(completions.is_empty());
    }

    #[test]
    fn test_bad_lines_are_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("completions.jsonl");

        let mut journal = CompletionJournal::new(&path);
        journal
            .append(&CompletedSession::new("deep_breathing", 300, Utc::now()))
            .unwrap();

        // Corrupt the middle of the file, then append a valid line
        {
            let mut f = OpenOptions::new().append(true).open(&path).unwrap();
            writeln!(f, "not json at all").unwrap();
        }
        journal
            .append(&CompletedSession::new("body_scan", 600, Utc::now()))
            .unwrap();

        let completions = read_completions(&path).unwrap();
        assert_eq!(completions.len(), 2);
    }
}

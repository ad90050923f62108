//! Practice history log and aggregate statistics.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use lexdrill_core::session::{ActivityType, SessionObserver};

/// One completed practice run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub activity: ActivityType,
    pub score: usize,
    pub total: usize,
    pub completed_at: DateTime<Utc>,
}

/// Append-only JSON log of completed practice runs.
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries. A missing file is an empty history, not an error.
    pub fn load(&self) -> Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read history from {}", self.path.display()))?;
        serde_json::from_str(&content).context("failed to parse history JSON")
    }

    /// Append entries and persist the whole log.
    pub fn append(&self, entries: &[HistoryEntry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        let mut all = self.load()?;
        all.extend(entries.iter().cloned());
        let json = serde_json::to_string_pretty(&all).context("failed to serialize history")?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write history to {}", self.path.display()))?;
        debug!(path = %self.path.display(), added = entries.len(), total = all.len(), "history appended");
        Ok(())
    }
}

/// Aggregate statistics over a history slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeStats {
    pub total_sessions: usize,
    pub total_questions: usize,
    pub total_correct: usize,
    pub accuracy_percent: f64,
    /// Session counts keyed by activity label.
    pub sessions_by_activity: BTreeMap<String, usize>,
}

impl PracticeStats {
    pub fn compute(entries: &[HistoryEntry]) -> Self {
        let total_questions: usize = entries.iter().map(|e| e.total).sum();
        let total_correct: usize = entries.iter().map(|e| e.score).sum();
        let accuracy_percent = if total_questions > 0 {
            total_correct as f64 / total_questions as f64 * 100.0
        } else {
            0.0
        };

        let mut sessions_by_activity = BTreeMap::new();
        for entry in entries {
            *sessions_by_activity
                .entry(entry.activity.to_string())
                .or_insert(0) += 1;
        }

        Self {
            total_sessions: entries.len(),
            total_questions,
            total_correct,
            accuracy_percent,
            sessions_by_activity,
        }
    }
}

/// Session observer that buffers completion events for the host to drain and
/// persist after the run.
pub struct HistoryRecorder {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Take the buffered entries, leaving the recorder empty.
    pub fn drain(&self) -> Vec<HistoryEntry> {
        std::mem::take(&mut *self.entries.lock().unwrap())
    }
}

impl Default for HistoryRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for HistoryRecorder {
    fn on_complete(&self, activity: ActivityType, score: usize, total: usize) {
        self.entries.lock().unwrap().push(HistoryEntry {
            id: Uuid::new_v4(),
            activity,
            score,
            total,
            completed_at: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(activity: ActivityType, score: usize, total: usize) -> HistoryEntry {
        HistoryEntry {
            id: Uuid::new_v4(),
            activity,
            score,
            total,
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn append_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let log = HistoryLog::new(dir.path().join("history.json"));

        assert!(log.load().unwrap().is_empty());
        log.append(&[entry(ActivityType::Assessment, 4, 5)]).unwrap();
        log.append(&[entry(ActivityType::Quiz, 9, 10)]).unwrap();

        let entries = log.load().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].activity, ActivityType::Assessment);
        assert_eq!(entries[1].total, 10);
    }

    #[test]
    fn stats_aggregate_accuracy() {
        let entries = vec![
            entry(ActivityType::Assessment, 4, 5),
            entry(ActivityType::Assessment, 8, 10),
            entry(ActivityType::Quiz, 3, 5),
        ];
        let stats = PracticeStats::compute(&entries);
        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.total_questions, 20);
        assert_eq!(stats.total_correct, 15);
        assert!((stats.accuracy_percent - 75.0).abs() < f64::EPSILON);
        assert_eq!(stats.sessions_by_activity["assessment"], 2);
        assert_eq!(stats.sessions_by_activity["quiz"], 1);
    }

    #[test]
    fn stats_on_empty_history() {
        let stats = PracticeStats::compute(&[]);
        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.accuracy_percent, 0.0);
    }

    #[test]
    fn recorder_buffers_and_drains() {
        let recorder = HistoryRecorder::new();
        recorder.on_complete(ActivityType::Assessment, 3, 4);
        recorder.on_complete(ActivityType::Quiz, 5, 5);

        let drained = recorder.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].score, 3);
        assert!(recorder.drain().is_empty());
    }
}

//! High-score persistence.
//!
//! The only state that outlives a session is one non-negative integer. It is
//! kept in a small JSON file so the record survives hand-editing and stays
//! inspectable. The core never touches this module: callers load the value
//! at session start and feed `record` whenever a `ScoreChanged` event
//! reports a new score.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// File-backed store for the single persisted high-score scalar
#[derive(Debug, Clone)]
pub struct HighScores {
    path: PathBuf,
}

impl HighScores {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored high score. A missing file reads as zero; a file that
    /// exists but does not parse is an error rather than a silent reset.
    pub fn load(&self) -> Result<u32> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(anyhow!(
                    "high scores: read {} failed: {}",
                    self.path.display(),
                    e
                ))
            }
        };
        let record: HighScoreRecord = serde_json::from_str(&raw)
            .with_context(|| format!("high scores: parse {}", self.path.display()))?;
        Ok(record.high_score)
    }

    /// Persist `score` if it beats the stored value. Returns the value on
    /// disk after the call, so callers can treat this as "load max".
    pub fn record(&self, score: u32) -> Result<u32> {
        let current = self.load()?;
        if score <= current {
            return Ok(current);
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("high scores: create {}", parent.display())
                })?;
            }
        }
        let raw = serde_json::to_string(&HighScoreRecord { high_score: score })?;
        fs::write(&self.path, raw)
            .with_context(|| format!("high scores: write {}", self.path.display()))?;
        Ok(score)
    }
}

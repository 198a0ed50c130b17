//! High-score table persisted as a JSON array of `{ "score", "date" }`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use log::{debug, warn};

use crate::engine::HighScoreStore;
use crate::types::{HighScoreEntry, MAX_HIGH_SCORES};

/// Top scores kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonScoreFile {
    path: PathBuf,
}

impl JsonScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the table. A missing file is an empty table; anything else that
    /// goes wrong is an error.
    pub fn read(&self) -> Result<Vec<HighScoreEntry>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(anyhow!("high scores: read {} failed: {}", self.path.display(), e)),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let mut entries: Vec<HighScoreEntry> = serde_json::from_str(&text)
            .map_err(|e| anyhow!("high scores: parse {} failed: {}", self.path.display(), e))?;
        rank(&mut entries);
        Ok(entries)
    }

    /// Insert `score` dated `date` if it makes the table, and persist.
    ///
    /// Returns whether the table changed. A score that does not beat the
    /// lowest entry of a full table leaves the file untouched.
    pub fn record(&self, score: u32, date: &str) -> Result<bool> {
        let mut entries = self.read()?;
        if !qualifies(&entries, score) {
            debug!("score {score} does not make the high-score table");
            return Ok(false);
        }
        entries.push(HighScoreEntry {
            score,
            date: date.to_string(),
        });
        rank(&mut entries);
        self.write(&entries)?;
        Ok(true)
    }

    fn write(&self, entries: &[HighScoreEntry]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|e| anyhow!("high scores: create {} failed: {}", dir.display(), e))?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)
            .map_err(|e| anyhow!("high scores: write {} failed: {}", self.path.display(), e))
    }
}

impl HighScoreStore for JsonScoreFile {
    fn load(&self) -> Vec<HighScoreEntry> {
        self.read().unwrap_or_else(|e| {
            warn!("{e:#}");
            Vec::new()
        })
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.record(score, &today()).map(|_| ())
    }
}

/// Whether `score` would enter a table currently holding `entries`.
pub fn qualifies(entries: &[HighScoreEntry], score: u32) -> bool {
    entries.len() < MAX_HIGH_SCORES || entries.iter().any(|e| score > e.score)
}

/// Best first, at most [`MAX_HIGH_SCORES`]. Ties keep their earlier order.
fn rank(entries: &mut Vec<HighScoreEntry>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_HIGH_SCORES);
}

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (y, m, d) = civil_from_days((secs / 86_400) as i64);
    format!("{y:04}-{m:02}-{d:02}")
}

/// Proleptic Gregorian date for a count of days since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y, m, d)
}

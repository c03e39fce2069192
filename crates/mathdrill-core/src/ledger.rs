//! The append-only progress ledger.
//!
//! A row-oriented CSV store with header `Timestamp,Quiz,Score,TotalQuestions`,
//! one row appended per completed session. The ledger owns its backing file
//! exclusively and is the sole writer.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::warn;

/// Timestamp format shared by the store, analysis, and the chart.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const HEADER: [&str; 4] = ["Timestamp", "Quiz", "Score", "TotalQuestions"];

/// One persisted quiz result. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProgressRecord {
    pub timestamp: String,
    pub quiz: String,
    pub score: u32,
    pub total: u32,
}

impl ProgressRecord {
    /// Parse the record timestamp under the fixed format.
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }

    /// Percentage correct for this single record; `None` when the session
    /// had no questions.
    pub fn percentage(&self) -> Option<f64> {
        (self.total > 0).then(|| self.score as f64 / self.total as f64 * 100.0)
    }
}

/// Owns the CSV results store.
pub struct ProgressLedger {
    path: PathBuf,
}

impl ProgressLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the store with its header if absent. Never touches an
    /// existing store; creation is exclusive.
    pub fn ensure_store(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .with_context(|| format!("failed to create results store {}", self.path.display()))?;
        let mut writer = csv::Writer::from_writer(file);
        writer
            .write_record(HEADER)
            .context("failed to write results header")?;
        writer.flush().context("failed to flush results store")?;
        Ok(())
    }

    /// Append one result row stamped with the current local time.
    pub fn append(&self, quiz: &str, score: u32, total: u32) -> Result<()> {
        self.ensure_store()?;
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open results store {}", self.path.display()))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record([
                timestamp.as_str(),
                quiz,
                &score.to_string(),
                &total.to_string(),
            ])
            .context("failed to append result row")?;
        writer.flush().context("failed to flush results store")?;
        Ok(())
    }

    /// Read every row after the header.
    ///
    /// Rows with the wrong column count or non-integer score/total are
    /// skipped with a warning; one bad row never invalidates the rest. A
    /// missing store yields no records.
    pub fn load_all(&self) -> Vec<ProgressRecord> {
        let mut reader = match csv::ReaderBuilder::new().flexible(true).from_path(&self.path) {
            Ok(reader) => reader,
            Err(e) => {
                warn!("results store {} not readable: {e}", self.path.display());
                return Vec::new();
            }
        };

        let mut records = Vec::new();
        for row in reader.records() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!("skipping unreadable results row: {e}");
                    continue;
                }
            };
            if row.len() != 4 {
                warn!("skipping results row with {} columns (expected 4)", row.len());
                continue;
            }
            let (score, total) = match (row[2].trim().parse::<u32>(), row[3].trim().parse::<u32>())
            {
                (Ok(score), Ok(total)) => (score, total),
                _ => {
                    warn!("skipping results row with non-integer score/total: {row:?}");
                    continue;
                }
            };
            records.push(ProgressRecord {
                timestamp: row[0].to_string(),
                quiz: row[1].to_string(),
                score,
                total,
            });
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_in(dir: &tempfile::TempDir) -> ProgressLedger {
        ProgressLedger::new(dir.path().join("results.csv"))
    }

    #[test]
    fn ensure_store_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger_in(&dir);

        ledger.ensure_store().unwrap();
        let content = std::fs::read_to_string(ledger.path()).unwrap();
        assert!(content.starts_with("Timestamp,Quiz,Score,TotalQuestions"));
    }

    #[test]
    fn ensure_store_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger_in(&dir);

        ledger.ensure_store().unwrap();
        ledger.append("Powers", 3, 5).unwrap();
        ledger.ensure_store().unwrap();

        assert_eq!(ledger.load_all().len(), 1);
    }

    #[test]
    fn append_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger_in(&dir);

        ledger.ensure_store().unwrap();
        ledger.append("Powers", 4, 5).unwrap();

        let records = ledger.load_all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].quiz, "Powers");
        assert_eq!(records[0].score, 4);
        assert_eq!(records[0].total, 5);
        assert!(
            records[0].parsed_timestamp().is_some(),
            "timestamp must parse under the fixed format: {}",
            records[0].timestamp
        );
    }

    #[test]
    fn load_missing_store_yields_no_records() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ledger_in(&dir).load_all().is_empty());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger_in(&dir);
        std::fs::write(
            ledger.path(),
            "Timestamp,Quiz,Score,TotalQuestions\n\
             2026-03-01 10:00:00,Quiz A,5,10\n\
             this row is broken\n\
             2026-03-02 11:30:00,Quiz B,8,10\n",
        )
        .unwrap();

        let records = ledger.load_all();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].quiz, "Quiz A");
        assert_eq!(records[1].quiz, "Quiz B");
    }

    #[test]
    fn non_integer_scores_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger_in(&dir);
        std::fs::write(
            ledger.path(),
            "Timestamp,Quiz,Score,TotalQuestions\n\
             2026-03-01 10:00:00,Quiz A,five,10\n\
             2026-03-02 11:30:00,Quiz B,8,10\n",
        )
        .unwrap();

        let records = ledger.load_all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].quiz, "Quiz B");
    }

    #[test]
    fn record_percentage_guards_zero_totals() {
        let record = ProgressRecord {
            timestamp: "2026-03-01 10:00:00".into(),
            quiz: "Quiz A".into(),
            score: 0,
            total: 0,
        };
        assert_eq!(record.percentage(), None);
    }
}

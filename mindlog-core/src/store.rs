//! The append-only mood log, persisted as a single JSON array.
//!
//! Every write is read-all / write-all: the current log is loaded, the new
//! record pushed, and the whole array written to a temporary file that then
//! replaces the log. A single writer is assumed.

use crate::config::Policy;
use crate::dates::{format_timestamp, now_timestamp};
use crate::error::{StoreError, StoreResult};
use crate::record::JournalRecord;
use chrono::NaiveDateTime;
use serde_json::Value;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct MoodLog {
    path: PathBuf,
    policy: Policy,
}

impl MoodLog {
    pub fn new(path: impl Into<PathBuf>, policy: Policy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the full log in append order.
    ///
    /// "No history yet" is a normal state: a missing, empty, unreadable or
    /// corrupt file all read as an empty log.
    pub fn load(&self) -> Vec<JournalRecord> {
        match self.read_existing() {
            Ok(log) => {
                tracing::debug!(path = %self.path.display(), records = log.len(), "loaded mood log");
                log
            }
            Err(error) => {
                tracing::warn!("treating mood log as empty: {error}");
                Vec::new()
            }
        }
    }

    /// Appends a record stamped with the current local time and returns the full log.
    pub fn append(&self, entry: &str, score: i64) -> StoreResult<Vec<JournalRecord>> {
        self.push(entry, score, now_timestamp())
    }

    /// Same as [`append`](Self::append) with an explicit timestamp.
    pub fn append_at(
        &self,
        entry: &str,
        score: i64,
        at: NaiveDateTime,
    ) -> StoreResult<Vec<JournalRecord>> {
        self.push(entry, score, format_timestamp(at))
    }

    fn push(&self, entry: &str, score: i64, timestamp: String) -> StoreResult<Vec<JournalRecord>> {
        if !self.policy.contains(score) {
            return Err(StoreError::ScoreOutOfRange {
                score,
                min: self.policy.min_score,
                max: self.policy.max_score,
            });
        }

        // Unlike `load`, a broken log is an error here: writing would replace it.
        let mut log = self.read_existing()?;
        log.push(JournalRecord::new(entry, score, timestamp));
        self.save(&log)?;

        tracing::debug!(path = %self.path.display(), records = log.len(), "appended to mood log");
        Ok(log)
    }

    /// Missing or blank file → empty log.
    fn read_existing(&self) -> StoreResult<Vec<JournalRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(StoreError::io(&self.path, error)),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        decode_log(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, log: &[JournalRecord]) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|error| StoreError::io(dir, error))?;

        let mut file = NamedTempFile::new_in(dir).map_err(|error| StoreError::io(dir, error))?;
        serde_json::to_writer_pretty(&mut file, log)?;
        file.write_all(b"\n")
            .and_then(|_| file.as_file().sync_all())
            .map_err(|error| StoreError::io(file.path(), error))?;

        file.persist(&self.path)
            .map_err(|source| StoreError::Persist {
                path: self.path.clone(),
                source,
            })?;
        Ok(())
    }
}

/// Decodes a JSON array of records.
///
/// Elements that aren't objects are skipped; object fields are decoded
/// leniently (see [`JournalRecord`]).
pub fn decode_log(content: &str) -> serde_json::Result<Vec<JournalRecord>> {
    let elements: Vec<Value> = serde_json::from_str(content)?;
    Ok(elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| {
            if !element.is_object() {
                tracing::warn!(index, "skipping mood log element that is not an object");
                return None;
            }
            serde_json::from_value(element)
                .map_err(|error| tracing::warn!(index, %error, "skipping undecodable record"))
                .ok()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_timestamp;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn mk_log() -> (MoodLog, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let log = MoodLog::new(tmp.path().join("journal_log.json"), Policy::default());
        (log, tmp)
    }

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn load_missing_file_is_empty() {
        let (log, _tmp) = mk_log();
        assert!(log.load().is_empty());
    }

    #[test]
    fn load_blank_file_is_empty() {
        let (log, _tmp) = mk_log();
        fs::write(log.path(), "  \n").unwrap();
        assert!(log.load().is_empty());
    }

    #[test]
    fn load_corrupt_file_is_empty() {
        let (log, _tmp) = mk_log();
        fs::write(log.path(), "{ this is not json").unwrap();
        assert!(log.load().is_empty());
        fs::write(log.path(), r#"{"entry": "an object, not an array"}"#).unwrap();
        assert!(log.load().is_empty());
    }

    #[test]
    fn load_skips_non_object_elements() {
        let (log, _tmp) = mk_log();
        fs::write(
            log.path(),
            r#"[{"entry": "first", "score": 4}, 17, "text", {"score": 2}]"#,
        )
        .unwrap();
        let records = log.load();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text(), "first");
        assert_eq!(records[1].entry, None);
        assert_eq!(records[1].score, Some(2));
    }

    #[test]
    fn append_creates_file_and_returns_full_log() {
        let (log, _tmp) = mk_log();
        let records = log.append("had a great walk", 5).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text(), "had a great walk");
        assert_eq!(records[0].score, Some(5));
        let ts = records[0].timestamp.as_deref().unwrap();
        assert!(parse_timestamp(ts).is_some());
        assert_eq!(log.load(), records);
    }

    #[test]
    fn append_preserves_order() {
        let (log, _tmp) = mk_log();
        log.append_at("one", 1, at(8)).unwrap();
        log.append_at("two", 2, at(9)).unwrap();
        let records = log.append_at("three", 3, at(10)).unwrap();
        let texts: Vec<&str> = records.iter().map(JournalRecord::text).collect();
        assert_eq!(texts, ["one", "two", "three"]);
        assert_eq!(records[2].timestamp.as_deref(), Some("2025-08-15 10:00:00"));
        assert_eq!(log.load().len(), 3);
    }

    #[test]
    fn append_keeps_legacy_records() {
        let (log, _tmp) = mk_log();
        fs::write(log.path(), r#"[{"entry": "old entry without score"}]"#).unwrap();
        let records = log.append_at("new", 4, at(12)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].score, None);
        assert_eq!(records[0].timestamp, None);
    }

    #[test]
    fn append_rejects_out_of_range_score() {
        let (log, _tmp) = mk_log();
        let err = log.append("too happy", 6).unwrap_err();
        assert!(matches!(err, StoreError::ScoreOutOfRange { score: 6, .. }));
        assert!(!log.path().exists());
        assert!(log.append("too sad", 0).is_err());
    }

    #[test]
    fn append_refuses_to_overwrite_corrupt_log() {
        let (log, _tmp) = mk_log();
        fs::write(log.path(), "[{broken").unwrap();
        let err = log.append("new entry", 3).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "[{broken");
    }

    #[test]
    fn append_creates_parent_directories() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested").join("dir").join("journal_log.json");
        let log = MoodLog::new(&path, Policy::default());
        log.append("first", 3).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn persisted_log_is_a_json_array() {
        let (log, _tmp) = mk_log();
        log.append_at("first", 3, at(7)).unwrap();
        let raw = fs::read_to_string(log.path()).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["entry"], "first");
        assert_eq!(array[0]["score"], 3);
        assert_eq!(array[0]["timestamp"], "2025-08-15 07:00:00");
    }
}

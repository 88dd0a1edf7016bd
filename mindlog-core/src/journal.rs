//! The `MoodJournal` struct, the primary API for recording entries and
//! reading analytics back.

use crate::companion::{CompanionOpening, DEFAULT_SYSTEM_PROMPT};
use crate::config::Config;
use crate::crisis::Helpline;
use crate::error::StoreResult;
use crate::insights::{InsightResult, generate};
use crate::record::JournalRecord;
use crate::store::MoodLog;
use crate::trend::{self, TrendSeries};
use anyhow::{Context, Result};
use std::fs;

/// The central struct for all journal operations.
///
/// Holds the configuration and the log store. Analytics are recomputed from
/// the full log on every call.
#[derive(Debug)]
pub struct MoodJournal {
    pub config: Config,
    log: MoodLog,
}

impl MoodJournal {
    /// Creates a new `MoodJournal`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `MoodJournal` with a specific `Config`.
    ///
    /// This also ensures that the directory holding the log exists.
    pub fn with_config(config: Config) -> Result<Self> {
        config.policy.validate()?;
        if let Some(parent) = config.log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let log = MoodLog::new(config.log_path.clone(), config.policy);
        Ok(Self { config, log })
    }

    pub fn log(&self) -> &MoodLog {
        &self.log
    }

    /// Appends an entry with its mood score and returns the full log.
    pub fn record(&self, entry: &str, score: i64) -> StoreResult<Vec<JournalRecord>> {
        self.log.append(entry, score)
    }

    pub fn history(&self) -> Vec<JournalRecord> {
        self.log.load()
    }

    pub fn trend(&self) -> TrendSeries {
        trend::render(&self.history(), &self.config.policy)
    }

    pub fn insights(&self) -> InsightResult {
        generate(&self.history(), &self.config.categories, &self.config.policy)
    }

    /// Helplines to show for `text`, if it contains a crisis phrase.
    pub fn crisis_check(&self, text: &str) -> Option<&[Helpline]> {
        self.config.crisis.check(text)
    }

    /// Companion opening built on [`DEFAULT_SYSTEM_PROMPT`].
    pub fn companion_opening(&self) -> CompanionOpening {
        CompanionOpening::new(DEFAULT_SYSTEM_PROMPT, &self.insights())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::Direction;
    use crate::tests::mk_config;
    use crate::trend::EMPTY_TREND_TITLE;
    use tempfile::tempdir;

    fn mk_journal_with_default() -> (MoodJournal, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("mindlog").join("journal_log.json");
        let journal = MoodJournal::with_config(mk_config(path)).unwrap();
        (journal, tmp)
    }

    #[test]
    fn with_config_creates_log_directory() {
        let (journal, _tmp) = mk_journal_with_default();
        assert!(journal.log().path().parent().unwrap().is_dir());
    }

    #[test]
    fn fresh_journal_reports_empty_states() {
        let (journal, _tmp) = mk_journal_with_default();
        assert!(journal.history().is_empty());
        assert_eq!(journal.trend().title, EMPTY_TREND_TITLE);
        assert_eq!(journal.insights(), InsightResult::NoEntries);
        assert!(journal.companion_opening().insight.is_none());
    }

    #[test]
    fn recorded_entries_feed_trend_and_insights() {
        let (journal, _tmp) = mk_journal_with_default();
        journal.record("had a great walk with friends", 5).unwrap();
        journal.record("stuck in a boring meeting", 2).unwrap();
        journal.record("walked to the park", 5).unwrap();
        let log = journal.record("long meeting all day", 1).unwrap();
        assert_eq!(log.len(), 4);

        let trend = journal.trend();
        assert_eq!(trend.len(), 4);
        let scores: Vec<i64> = trend.points.iter().map(|p| p.score).collect();
        assert_eq!(scores, [5, 2, 5, 1]);

        let insights = journal.insights();
        assert_eq!(insights.get("Work").unwrap().direction, Direction::Lower);
        assert_eq!(insights.get("Work").unwrap().percent, 70);

        let opening = journal.companion_opening();
        assert_eq!(opening.insight.unwrap().category, "Social");
    }

    #[test]
    fn record_rejects_invalid_score() {
        let (journal, _tmp) = mk_journal_with_default();
        assert!(journal.record("???", 42).is_err());
        assert!(journal.history().is_empty());
    }

    #[test]
    fn crisis_check_uses_config() {
        let (journal, _tmp) = mk_journal_with_default();
        assert!(journal.crisis_check("feeling hopeless").is_some());
        assert!(journal.crisis_check("feeling fine").is_none());
    }
}

use crate::{Config, CrisisCheck, JournalRecord, Policy, keywords::default_categories};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(log_path: PathBuf) -> Config {
    Config {
        log_path,
        editor: None,
        categories: default_categories(),
        policy: Policy::default(),
        crisis: CrisisCheck::default(),
    }
}

/// A complete record with a fixed timestamp.
pub fn record(entry: &str, score: i64) -> JournalRecord {
    JournalRecord::new(entry, score, "2025-08-15 21:00:00")
}

use anyhow::{Context, Result, bail};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::crisis::CrisisCheck;
use crate::keywords::{CategoryDefinition, default_categories};
use crate::paths::{APP_DIR, config_file, log_file};

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding the whole mood log.
    pub log_path: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// Categories correlated against mood, in reporting order.
    pub categories: Vec<CategoryDefinition>,
    pub policy: Policy,
    pub crisis: CrisisCheck,
}

/// Score range and the thresholds that decide when a difference in mood is
/// reported.
///
/// An insight is emitted only when the average with a category is strictly
/// above `avg_without * higher_ratio` or strictly below `avg_without * lower_ratio`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub higher_ratio: f64,
    pub lower_ratio: f64,
    /// Substituted for records with a missing or out-of-range score.
    pub neutral_score: i64,
    pub min_score: i64,
    pub max_score: i64,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            higher_ratio: 1.1,
            lower_ratio: 0.9,
            neutral_score: 3,
            min_score: 1,
            max_score: 5,
        }
    }
}

impl Policy {
    /// Returns `true` if `score` lies in `[min_score, max_score]`.
    pub fn contains(&self, score: i64) -> bool {
        (self.min_score..=self.max_score).contains(&score)
    }

    /// Scores start at 1 so that every group mean is positive and the ratio
    /// between two means is always defined.
    pub fn validate(&self) -> Result<()> {
        if self.min_score < 1 {
            bail!("policy.min_score must be at least 1 (got {})", self.min_score);
        }
        if self.min_score > self.max_score {
            bail!(
                "policy.min_score ({}) is greater than policy.max_score ({})",
                self.min_score,
                self.max_score
            );
        }
        if !self.contains(self.neutral_score) {
            bail!(
                "policy.neutral_score ({}) is outside {}-{}",
                self.neutral_score,
                self.min_score,
                self.max_score
            );
        }
        if !(self.higher_ratio.is_finite() && self.higher_ratio >= 1.0) {
            bail!("policy.higher_ratio must be a finite number >= 1.0");
        }
        if !(self.lower_ratio.is_finite() && self.lower_ratio > 0.0 && self.lower_ratio <= 1.0) {
            bail!("policy.lower_ratio must be a finite number in (0, 1]");
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    log_path: Option<PathBuf>,
    editor: Option<String>,
    policy: Option<Policy>,
    /// Optional array of tables, replaces the default categories when present:
    /// [[categories]]
    /// name = "Music"
    /// keywords = ["guitar", "concert"]
    categories: Option<Vec<CategoryDefinition>>,
    crisis: Option<CrisisCheck>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// A config file that can't be read or parsed is reported and ignored; an
    /// invalid policy is an error.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|error| {
            tracing::warn!("ignoring config file: {error:#}");
            FileConfig::default()
        });
        Self::from_file_config(file_config)
    }

    /// Builds a config from TOML text, applying the same defaults as [`Config::load`].
    pub fn from_toml(s: &str) -> Result<Self> {
        Self::from_file_config(Self::parse_file(s)?)
    }

    /// Replaces the log location, e.g. from a command-line flag.
    pub fn with_log_path(mut self, log_path: PathBuf) -> Self {
        self.log_path = log_path;
        self
    }

    fn from_file_config(file_config: FileConfig) -> Result<Self> {
        let policy = file_config.policy.unwrap_or_default();
        policy.validate().context("invalid [policy] table")?;

        let categories = match file_config.categories {
            Some(categories) if !categories.is_empty() => categories,
            _ => default_categories(),
        };

        Ok(Self {
            log_path: file_config.log_path.unwrap_or_else(Self::default_log_path),
            editor: file_config.editor,
            categories,
            policy,
            crisis: file_config.crisis.unwrap_or_default(),
        })
    }

    /// Default log location: `{data_dir}/mindlog/journal_log.json`
    /// - macOS:   `~/Library/Application Support/mindlog`
    /// - Linux:   `$XDG_DATA_HOME/mindlog` or `~/.local/share/mindlog`
    /// - Windows: `%APPDATA%\mindlog`
    fn default_log_path() -> PathBuf {
        let root = match BaseDirs::new() {
            Some(base) => base.data_dir().join(APP_DIR),
            None => PathBuf::from(".").join(APP_DIR),
        };
        log_file(&root)
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(config_file(&b.home_dir().join(".config")));
            v.push(config_file(b.config_dir()));
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loading config");
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
pub mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("mindlog").join("config.toml");
            let expected_native = b.config_dir().join("mindlog").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.get(0), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg.policy, Policy::default());
        assert_eq!(cfg.categories, default_categories());
        assert_eq!(cfg.crisis, CrisisCheck::default());
        assert!(cfg.log_path.ends_with("journal_log.json"));
    }

    #[test]
    fn parse_file_accepts_log_path_and_editor() {
        let toml = r#"
            log_path = "/tmp/my-journal/log.json"
            editor = "hx"
        "#;
        let cfg = Config::from_toml(toml).unwrap();
        assert_eq!(cfg.log_path, Path::new("/tmp/my-journal/log.json"));
        assert_eq!(cfg.editor.as_deref(), Some("hx"));
    }

    #[test]
    fn custom_categories_replace_defaults() {
        let toml = r#"
            [[categories]]
            name = "Music"
            keywords = ["guitar", "concert"]

            [[categories]]
            name = "Outdoors"
            keywords = ["park"]
        "#;
        let cfg = Config::from_toml(toml).unwrap();
        assert_eq!(
            cfg.categories,
            vec![
                CategoryDefinition::new("Music", ["guitar", "concert"]),
                CategoryDefinition::new("Outdoors", ["park"]),
            ]
        );
    }

    #[test]
    fn partial_policy_keeps_other_defaults() {
        let toml = r#"
            [policy]
            higher_ratio = 1.25
        "#;
        let cfg = Config::from_toml(toml).unwrap();
        assert_eq!(cfg.policy.higher_ratio, 1.25);
        assert_eq!(cfg.policy.lower_ratio, 0.9);
        assert_eq!(cfg.policy.neutral_score, 3);
    }

    #[test]
    fn rejects_neutral_score_outside_range() {
        let toml = r#"
            [policy]
            neutral_score = 7
        "#;
        assert!(Config::from_toml(toml).is_err());
    }

    #[test]
    fn rejects_zero_min_score() {
        let policy = Policy {
            min_score: 0,
            neutral_score: 0,
            ..Policy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn rejects_inverted_ratios() {
        let policy = Policy {
            higher_ratio: 0.8,
            ..Policy::default()
        };
        assert!(policy.validate().is_err());
        let policy = Policy {
            lower_ratio: 1.2,
            ..Policy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn with_log_path_overrides_location() {
        let cfg = Config::from_toml("")
            .unwrap()
            .with_log_path(PathBuf::from("/tmp/other.json"));
        assert_eq!(cfg.log_path, PathBuf::from("/tmp/other.json"));
    }
}

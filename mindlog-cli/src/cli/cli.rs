use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::render::ColorMode;

/// mindlog - mood journal with keyword insights
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("read_mode").args(["trend", "insights", "companion"]).multiple(true)),
    group(ArgGroup::new("write_mode").args(["text", "score", "label"]).multiple(true)),
    group(ArgGroup::new("solo").args(["path"]).conflicts_with_all(["read_mode", "write_mode"])),
)]
pub struct Cli {
    /// Prints the mood log file location
    #[arg(long, short)]
    pub path: bool,

    /// Mood score for a new entry (1-5 unless configured otherwise),
    /// e.g. `mindlog --score 4 Had a great walk with friends`.
    /// Without text, your $EDITOR is opened to write the entry.
    #[arg(long, short, conflicts_with = "label")]
    pub score: Option<i64>,
    /// Sentiment classifier label for a new entry instead of a score (e.g. `--label "4 stars"`).
    #[arg(long)]
    pub label: Option<String>,

    /// Shows the mood trend over time.
    #[arg(long, short)]
    pub trend: bool,
    /// Shows which activity categories go along with higher or lower mood.
    #[arg(long, short)]
    pub insights: bool,
    /// Shows the companion's opening prompt, grounded in your first insight.
    #[arg(long)]
    pub companion: bool,

    /// Prints machine-readable JSON instead of formatted text.
    #[arg(long)]
    pub json: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Use this mood log file instead of the configured one.
    #[arg(long, env = "MINDLOG_LOG")]
    pub log: Option<PathBuf>,
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(long, short)]
    pub verbose: bool,

    /// Free text of a new entry (e.g., `mindlog -s 2 long meeting all day`).
    #[arg()]
    pub text: Vec<String>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }

    /// A score or label was given, so the user wants to add an entry.
    pub fn wants_write(&self) -> bool {
        self.score.is_some() || self.label.is_some()
    }

    pub fn wants_read(&self) -> bool {
        self.trend || self.insights || self.companion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("mindlog").chain(args.iter().copied()))
    }

    #[test]
    fn write_with_score_and_text() {
        let cli = parse(&["--score", "4", "had", "a", "great", "walk"]).unwrap();
        assert_eq!(cli.score, Some(4));
        assert_eq!(cli.text.join(" "), "had a great walk");
        assert!(cli.wants_write());
        assert!(!cli.wants_read());
    }

    #[test]
    fn write_with_label() {
        let cli = parse(&["--label", "2 stars", "long meeting"]).unwrap();
        assert_eq!(cli.label.as_deref(), Some("2 stars"));
        assert!(cli.wants_write());
    }

    #[test]
    fn score_and_label_conflict() {
        assert!(parse(&["--score", "4", "--label", "4 stars", "text"]).is_err());
    }

    #[test]
    fn read_flags_combine() {
        let cli = parse(&["--trend", "--insights", "--json"]).unwrap();
        assert!(cli.trend && cli.insights && cli.json);
        assert!(cli.wants_read());
    }

    #[test]
    fn write_then_read_is_allowed() {
        let cli = parse(&["-s", "5", "-i", "walk", "with", "friends"]).unwrap();
        assert!(cli.wants_write() && cli.wants_read());
    }

    #[test]
    fn path_is_solo() {
        assert!(parse(&["--path"]).unwrap().path);
        assert!(parse(&["--path", "--trend"]).is_err());
        assert!(parse(&["--path", "-s", "3", "x"]).is_err());
    }

    #[test]
    fn log_override() {
        let cli = parse(&["--log", "/tmp/log.json", "--trend"]).unwrap();
        assert_eq!(cli.log, Some(PathBuf::from("/tmp/log.json")));
    }
}

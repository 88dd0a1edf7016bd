use super::CliModeResult;
use crate::{
    Cli,
    common::{compose_in_editor, resolve_editor},
    render::Renderer,
};
use anyhow::{Result, bail};
use mindlog_core::{MoodJournal, Policy, Sentiment, sentiment::score_from_label};
use serde_json::json;

/// `mindlog --score 4 Had a great walk`: saves the inline text.
pub fn write_mode(cli: &Cli, renderer: &Renderer, journal: &MoodJournal) -> Result<CliModeResult> {
    if cli.text.is_empty() {
        return Ok(CliModeResult::NothingToDo);
    }
    let score = resolve_score(cli, &journal.config.policy)?;
    save_entry(&cli.text.join(" "), score, cli, renderer, journal)?;
    Ok(CliModeResult::Finish)
}

/// `mindlog --score 4`: composes the entry in the user's editor.
pub fn editor_mode(cli: &Cli, renderer: &Renderer, journal: &MoodJournal) -> Result<CliModeResult> {
    if !cli.text.is_empty() || !cli.wants_write() {
        return Ok(CliModeResult::NothingToDo);
    }
    let score = resolve_score(cli, &journal.config.policy)?;

    let editor = resolve_editor(&journal.config.editor);
    let input = compose_in_editor(&editor)?;
    if input.is_empty() {
        renderer.print_info("No entry to save, because no text was received.");
        return Ok(CliModeResult::Finish);
    }
    save_entry(&input, score, cli, renderer, journal)?;
    Ok(CliModeResult::Finish)
}

fn resolve_score(cli: &Cli, policy: &Policy) -> Result<i64> {
    match (cli.score, cli.label.as_deref()) {
        (Some(score), _) => Ok(score),
        (None, Some(label)) => Ok(score_from_label(label, policy)),
        (None, None) => bail!("a mood score is required: pass --score <n> or --label <label>"),
    }
}

fn save_entry(
    entry: &str,
    score: i64,
    cli: &Cli,
    renderer: &Renderer,
    journal: &MoodJournal,
) -> Result<()> {
    let log = journal.record(entry, score)?;
    let helplines = journal.crisis_check(entry);
    tracing::info!(records = log.len(), "entry saved");

    let Some(record) = log.last() else {
        return Ok(());
    };

    if cli.json {
        return renderer.print_json(&json!({
            "record": record,
            "sentiment": Sentiment::from_score(score),
            "helplines": helplines,
        }));
    }

    renderer.print_info(&format!(
        "Added new entry to {}",
        journal.log().path().display()
    ));
    renderer.print_record_line(record);
    if let Some(helplines) = helplines {
        renderer.print_helplines(helplines);
    }
    Ok(())
}

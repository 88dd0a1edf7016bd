use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use mindlog_core::MoodJournal;
use serde_json::{Map, Value};

/// Prints the requested analytics. Right after a write with nothing else
/// requested, the trend is shown.
pub fn read_mode(
    cli: &Cli,
    renderer: &Renderer,
    journal: &MoodJournal,
    wrote: bool,
) -> Result<CliModeResult> {
    let trend = cli.trend || (wrote && !cli.wants_read() && !cli.json);
    if !trend && !cli.insights && !cli.companion {
        return Ok(CliModeResult::NothingToDo);
    }

    if cli.json {
        let mut out = Map::new();
        if trend {
            out.insert("trend".into(), serde_json::to_value(journal.trend())?);
        }
        if cli.insights {
            let insights = journal.insights();
            let mut value = serde_json::to_value(&insights)?;
            if let (Value::Object(fields), Some(message)) = (&mut value, insights.sentinel()) {
                fields.insert("message".into(), message.into());
            }
            out.insert("insights".into(), value);
        }
        if cli.companion {
            out.insert(
                "companion".into(),
                serde_json::to_value(journal.companion_opening())?,
            );
        }
        renderer.print_json(&Value::Object(out))?;
        return Ok(CliModeResult::Finish);
    }

    if trend {
        renderer.print_trend(&journal.trend());
    }
    if cli.insights {
        renderer.print_insights(&journal.insights());
    }
    if cli.companion {
        renderer.print_companion(&journal.companion_opening());
    }
    Ok(CliModeResult::Finish)
}

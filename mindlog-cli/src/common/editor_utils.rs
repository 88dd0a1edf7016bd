use anyhow::{Result, bail};
use std::io::Write;
use std::{fs, path::Path, process::Command};

const BUFFER_TEMPLATE: &str = "\n# Write about your day above. Lines starting with '#' are ignored.\n";

/// Configured editor, then `$VISUAL`, `$EDITOR`, and finally `vim`.
pub fn resolve_editor(editor: &Option<String>) -> String {
    editor
        .as_deref()
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}

/// Opens `editor_cmd` on a temporary buffer and returns the entry text written there.
pub fn compose_in_editor(editor_cmd: &str) -> Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix("mindlog")
        .suffix(".txt")
        .tempfile()?;
    file.write_all(BUFFER_TEMPLATE.as_bytes())?;
    file.flush()?;

    open_file_in_editor(editor_cmd, file.path())?;
    Ok(strip_comments(&fs::read_to_string(file.path())?))
}

fn open_file_in_editor(editor_cmd: &str, path: &Path) -> Result<()> {
    let status = Command::new(editor_cmd).arg(path).status()?;
    if !status.success() {
        bail!("Editor exited with status {}", status);
    }
    Ok(())
}

fn strip_comments(buffer: &str) -> String {
    buffer
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_editor_wins() {
        assert_eq!(resolve_editor(&Some("hx".to_string())), "hx");
    }

    #[test]
    fn comments_and_padding_are_dropped() {
        let buffer = format!("Long day.\nGood walk after work.\n{BUFFER_TEMPLATE}");
        assert_eq!(strip_comments(&buffer), "Long day.\nGood walk after work.");
    }

    #[test]
    fn untouched_template_is_empty() {
        assert_eq!(strip_comments(BUFFER_TEMPLATE), "");
    }
}

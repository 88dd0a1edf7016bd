use std::path::{Path, PathBuf};

/// Directory name used under the platform data/config roots.
pub const APP_DIR: &str = "mindlog";

pub const LOG_FILE_NAME: &str = "journal_log.json";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// `{root}/journal_log.json`
pub fn log_file(root: &Path) -> PathBuf {
    root.join(LOG_FILE_NAME)
}

/// `{base}/mindlog/config.toml`
pub fn config_file(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lives_directly_under_root() {
        let p = log_file(Path::new("/data/mindlog"));
        assert_eq!(p, PathBuf::from("/data/mindlog/journal_log.json"));
    }

    #[test]
    fn config_file_is_namespaced() {
        let p = config_file(Path::new("/home/me/.config"));
        assert_eq!(p, PathBuf::from("/home/me/.config/mindlog/config.toml"));
    }
}

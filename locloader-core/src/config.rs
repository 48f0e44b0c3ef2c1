use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const LANGUAGE_DIR_NAME: &str = "i18n";
pub const EXPORT_FILE_NAME: &str = "EnglishTerms.csv";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the loader lives in (the host's plugin folder)
    pub plugin_root: PathBuf,

    /// Directory scanned for `*.csv` language files
    pub language_dir: PathBuf,

    /// Destination of the English terms export
    pub export_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let plugin_root = match std::env::var("LOCLOADER_PLUGIN_ROOT") {
            Ok(root) => PathBuf::from(root),
            Err(_) => std::env::current_dir().context("failed to resolve current directory")?,
        };

        let mut config = Self::with_root(plugin_root);

        if let Ok(dir) = std::env::var("LOCLOADER_LANGUAGE_DIR") {
            config.language_dir = PathBuf::from(dir);
        }
        if let Ok(file) = std::env::var("LOCLOADER_EXPORT_FILE") {
            config.export_file = PathBuf::from(file);
        }

        Ok(config)
    }

    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            plugin_root: root.to_path_buf(),
            language_dir: root.join(LANGUAGE_DIR_NAME),
            export_file: root.join(EXPORT_FILE_NAME),
        }
    }
}

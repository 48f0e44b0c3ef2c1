use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{LoaderError, Result};
use crate::services::files;
use crate::services::importer::{self, ImportReport};
use crate::store::LocalizationManager;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FileImport {
    pub file: String,
    #[serde(flatten)]
    pub report: ImportReport,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub file: String,
    pub message: String,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ReloadReport {
    pub imported: Vec<FileImport>,
    pub failed: Vec<FileFailure>,
    /// Every loaded language name after the reload
    pub languages: Vec<String>,
}

/// Imports every `*.csv` in `dir` into the primary source, in file name
/// order. A file that fails is logged and recorded; the rest still load.
pub fn reload_language_files(manager: &mut LocalizationManager, dir: &Path) -> Result<ReloadReport> {
    let files = files::list_csv_files(dir)?;
    let mut report = ReloadReport::default();

    for path in files {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let outcome = match manager.primary_mut() {
            Some(source) => importer::import_file(source, &path),
            None => Err(LoaderError::NoSources),
        };

        match outcome {
            Ok(imported) => report.imported.push(FileImport { file, report: imported }),
            Err(e) => {
                warn!(file = %path.display(), "skipping language file: {e}");
                report.failed.push(FileFailure {
                    file,
                    message: e.to_string(),
                });
            }
        }
    }

    report.languages = manager.current_languages();
    info!(languages = %report.languages.join(","), "loaded languages");

    Ok(report)
}

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{LoaderError, Result};
use crate::parsers::language_csv::{self, LanguageCsv};
use crate::services::encoding;
use crate::store::TermStore;

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub language: String,
    pub rows_imported: usize,
    pub rows_skipped: usize,
    pub language_added: bool,
    pub terms_added: usize,
}

/// Imports one language CSV into `store` and rebuilds its lookup index.
pub fn import_file<S: TermStore + ?Sized>(store: &mut S, path: &Path) -> Result<ImportReport> {
    if !path.is_file() {
        return Err(LoaderError::missing(path));
    }

    let text = encoding::read_text(path)?;
    debug!(file = %path.display(), bytes = text.len(), "read language file");

    import_text(store, &text)
}

pub fn import_text<S: TermStore + ?Sized>(store: &mut S, text: &str) -> Result<ImportReport> {
    let csv = language_csv::parse(text)?;
    let report = merge(store, &csv);
    store.rebuild_index();

    info!(
        language = %report.language,
        rows = report.rows_imported,
        skipped = report.rows_skipped,
        "successfully imported language"
    );
    Ok(report)
}

/// Writes every row into the store, creating the language and terms on
/// demand. Later rows overwrite earlier ones for the same key.
pub fn merge<S: TermStore + ?Sized>(store: &mut S, csv: &LanguageCsv) -> ImportReport {
    let mut report = ImportReport {
        language: csv.language.clone(),
        rows_skipped: csv.skipped,
        ..ImportReport::default()
    };

    // resolved on the first row so a file without valid rows adds no language
    let mut resolved = None;

    for row in &csv.rows {
        let language = match resolved {
            Some(index) => index,
            None => {
                let index = match store.language_index(&csv.language) {
                    Some(index) => index,
                    None => {
                        report.language_added = true;
                        store.add_language(&csv.language)
                    }
                };
                resolved = Some(index);
                index
            }
        };

        let before = store.terms().len();
        let term = store.get_or_create_term(&row.key);
        if store.terms().len() > before {
            report.terms_added += 1;
        }

        store.set_translation(term, language, row.translation.clone());
        report.rows_imported += 1;
    }

    report
}

use tracing::warn;

use crate::error::{LoaderError, Result};
use crate::store::TermStore;

pub const EXPORT_LANGUAGE: &str = "English";

/// Keys containing this marker are left out of the export.
const EXCLUDED_KEY_MARKER: &str = "Demo";

/// Renders the `Key,English` CSV, or an empty string (with a warning) when
/// the store has no English language.
pub fn english_terms_csv<S: TermStore + ?Sized>(store: &S) -> String {
    english_terms_export(store).0
}

/// Same as [`english_terms_csv`], also returning the number of term rows.
pub fn english_terms_export<S: TermStore + ?Sized>(store: &S) -> (String, usize) {
    match render_language_csv(store, EXPORT_LANGUAGE) {
        Ok(export) => export,
        Err(e) => {
            warn!("{e}");
            (String::new(), 0)
        }
    }
}

/// Returns the CSV text and how many term rows it holds.
pub fn render_language_csv<S: TermStore + ?Sized>(
    store: &S,
    language: &str,
) -> Result<(String, usize)> {
    let index = store
        .language_index(language)
        .ok_or_else(|| LoaderError::language_not_found(language))?;

    let mut out = String::new();
    out.push_str("Key,");
    out.push_str(language);
    out.push('\n');

    let mut rows = 0usize;
    for term in store.terms() {
        if term.key.contains(EXCLUDED_KEY_MARKER) {
            continue;
        }

        let translation = term.translation(index).unwrap_or("");

        out.push_str(&term.key);
        out.push(',');
        out.push_str(&quote_field(translation));
        out.push('\n');
        rows += 1;
    }

    Ok((out, rows))
}

fn quote_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

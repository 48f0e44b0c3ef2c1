use tracing::{debug, warn};

use crate::error::{LoaderError, Result};

/// One `<key>,<translation>` data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    pub line_number: usize,
    pub key: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCsv {
    /// Target language taken from the second header column
    pub language: String,
    pub rows: Vec<ImportRow>,
    /// Data lines rejected for a wrong field count or an empty key
    pub skipped: usize,
}

/// Parses a `Key,<Language>` document.
///
/// Lines are split on every comma; quoting is not understood. Header problems
/// reject the whole document, bad data lines are skipped with a warning.
pub fn parse(text: &str) -> Result<LanguageCsv> {
    let mut lines = split_lines(text).into_iter();

    let header = match lines.next() {
        Some(h) => h,
        None => return Err(LoaderError::malformed("CSV file is empty")),
    };

    let columns: Vec<&str> = header.split(',').collect();
    if columns.len() != 2 {
        return Err(LoaderError::malformed(format!(
            "incorrect amount of columns, expected 2, found {}",
            columns.len()
        )));
    }

    if columns[0].to_lowercase() != "key" {
        return Err(LoaderError::malformed(format!(
            "incorrect header name, expected Key/key, found {:?}",
            columns[0]
        )));
    }

    let language = columns[1].trim();
    if language.is_empty() {
        return Err(LoaderError::malformed("language header is empty"));
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (i, line) in lines.enumerate() {
        // header is line 1
        let ln = i + 2;

        if line.trim().is_empty() {
            debug!(line = ln, "skipping blank line");
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 2 {
            warn!(line = ln, content = line, "incorrect amount of fields, skipping row");
            skipped += 1;
            continue;
        }

        if fields[0].trim().is_empty() {
            warn!(line = ln, "key cannot be empty, skipping row");
            skipped += 1;
            continue;
        }

        rows.push(ImportRow {
            line_number: ln,
            key: fields[0].to_string(),
            translation: fields[1].to_string(),
        });
    }

    Ok(LanguageCsv {
        language: language.to_string(),
        rows,
        skipped,
    })
}

/// Splits on `\n`, `\r\n` and a lone `\r`. A trailing terminator does not
/// produce an extra empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

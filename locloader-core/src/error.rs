use std::path::PathBuf;
use thiserror::Error;

/// Error type for translation loading operations.
///
/// Nothing here is fatal to the host: callers log the error and move on to
/// the next row, file or query.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// A file or directory the operation needs does not exist
    #[error("not found on disk: {}", .path.display())]
    MissingResource { path: PathBuf },

    /// Input could not be interpreted as a language CSV
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A requested language or term is not known to any source
    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    /// The host has not registered any language source yet
    #[error("host language sources are not registered yet")]
    HostNotReady,

    /// There is no language source to import into or export from
    #[error("no language sources found")]
    NoSources,

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoaderError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput(reason.into())
    }

    pub fn language_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "language",
            name: name.into(),
        }
    }

    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self::MissingResource { path: path.into() }
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;

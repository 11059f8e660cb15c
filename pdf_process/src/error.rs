use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the reference document.
#[derive(Debug, Error)]
pub enum DocumentReadError {
    /// The file is missing or could not be read.
    #[error("failed to read PDF `{path}`: {source}")]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
    /// The bytes do not decode as a PDF document.
    #[error("failed to parse PDF `{path}`: {message}")]
    Parse {
        /// Path that was requested.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}

impl DocumentReadError {
    /// Path of the document that failed to load.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, DocumentReadError>;

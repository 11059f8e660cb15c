//! Reference document loading.
//!
//! The assistant answers from exactly one PDF. Its text is extracted once, page by page, and
//! kept for the lifetime of the process by a [`DocumentLoader`]. The loader is created by the
//! startup routine and passed to whoever needs the text; there is no global cache.

mod document;
mod error;
mod parser;

pub use document::DocumentText;
pub use error::{DocumentReadError, Result};

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

/// Extracts and memoizes document text by path.
///
/// The first [`load_document`](Self::load_document) for a path reads and parses the file; every
/// later call for the same path returns the cached [`DocumentText`] without touching the
/// filesystem. Entries are never evicted.
#[derive(Debug, Default)]
pub struct DocumentLoader {
    cache: Mutex<HashMap<PathBuf, DocumentText>>,
    reads: AtomicUsize,
}

impl DocumentLoader {
    /// Create a loader with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the text of the PDF at `path`.
    ///
    /// Pages without extractable text contribute nothing; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentReadError`] if the file is missing, unreadable, or not a PDF. Failures
    /// are not cached, so a later call retries the read.
    pub fn load_document(&self, path: impl AsRef<Path>) -> Result<DocumentText> {
        let path = path.as_ref();
        // Held across the read so concurrent callers for one path parse it once.
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(document) = cache.get(path) {
            tracing::debug!(path = %path.display(), "document served from cache");
            return Ok(document.clone());
        }

        self.reads.fetch_add(1, Ordering::Relaxed);
        let extraction = parser::parse_from_path(path)?;
        let document = DocumentText::new(
            extraction.text,
            extraction.page_count,
            extraction.blank_pages,
        );
        tracing::info!(
            path = %path.display(),
            pages = document.page_count(),
            blank_pages = document.blank_pages(),
            chars = document.chars().count(),
            "extracted document text"
        );
        cache.insert(path.to_path_buf(), document.clone());
        Ok(document)
    }

    /// Number of times a file was actually read from disk.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

/// Extract text from PDF bytes that are already in memory. Nothing is cached.
///
/// # Errors
///
/// Returns [`DocumentReadError::Parse`] if the bytes are not a PDF.
pub fn document_from_bytes(bytes: &[u8]) -> Result<DocumentText> {
    let extraction = parser::parse_from_bytes(bytes, Path::new("memory"))?;
    Ok(DocumentText::new(
        extraction.text,
        extraction.page_count,
        extraction.blank_pages,
    ))
}

use std::{fmt, ops::Deref, sync::Arc};

/// Text extracted from the reference PDF, all pages concatenated in page order.
///
/// Cloning is cheap: clones share the same immutable buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText {
    text: Arc<str>,
    page_count: usize,
    blank_pages: usize,
}

impl DocumentText {
    pub(crate) fn new(text: impl Into<Arc<str>>, page_count: usize, blank_pages: usize) -> Self {
        Self {
            text: text.into(),
            page_count,
            blank_pages,
        }
    }

    /// The extracted text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of pages in the source PDF.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.page_count
    }

    /// Number of pages that yielded no text (for example scanned images).
    #[must_use]
    pub const fn blank_pages(&self) -> usize {
        self.blank_pages
    }

    /// Whether the two values share one buffer.
    #[must_use]
    pub fn shares_buffer(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.text, &other.text)
    }
}

impl Deref for DocumentText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for DocumentText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for DocumentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<DocumentText> for Arc<str> {
    fn from(document: DocumentText) -> Self {
        document.text
    }
}

use std::path::Path;

use lopdf::Document;

use crate::error::{DocumentReadError, Result};

/// Raw extraction output before it is frozen into a [`crate::DocumentText`].
#[derive(Debug)]
pub(crate) struct Extraction {
    pub(crate) text: String,
    pub(crate) page_count: usize,
    pub(crate) blank_pages: usize,
}

pub(crate) fn parse_from_path(path: &Path) -> Result<Extraction> {
    let bytes = std::fs::read(path).map_err(|source| DocumentReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_from_bytes(&bytes, path)
}

pub(crate) fn parse_from_bytes(bytes: &[u8], source: &Path) -> Result<Extraction> {
    let doc = Document::load_mem(bytes).map_err(|e| DocumentReadError::Parse {
        path: source.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(extract_pages(&doc))
}

fn extract_pages(doc: &Document) -> Extraction {
    // BTreeMap keyed by page number, so iteration is already in page order.
    let page_map = doc.get_pages();
    let mut text = String::new();
    let mut blank_pages = 0;

    for page_number in page_map.keys() {
        // Pages without a text layer (scanned images) extract as nothing.
        let page_text = doc
            .extract_text(&[*page_number])
            .unwrap_or_else(|_| String::new());
        if page_text.trim().is_empty() {
            blank_pages += 1;
            tracing::debug!(page = page_number, "page has no extractable text");
            continue;
        }
        text.push_str(&page_text);
    }

    Extraction {
        text,
        page_count: page_map.len(),
        blank_pages,
    }
}

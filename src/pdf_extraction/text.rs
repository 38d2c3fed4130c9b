// Page-ordered plain text assembly
use lopdf::Document;
use tracing::debug;

use super::lopdf_helper::with_pdf;
use crate::types::{CountError, Result};

/// Text of every page that has any, in page-number order.
/// Pages with nothing extractable are skipped rather than reported.
pub fn page_texts(document: &Document) -> Result<Vec<String>> {
    // BTreeMap keyed by page number, so iteration is already in document order
    let pages = document.get_pages();
    let mut texts = Vec::with_capacity(pages.len());

    for &page_number in pages.keys() {
        let text = document
            .extract_text(&[page_number])
            .map_err(|e| CountError::Pdf(format!("page {page_number}: {e}")))?;

        if text.trim().is_empty() {
            debug!(page_number, "page has no extractable text");
            continue;
        }
        // lopdf closes every text object with a line break; drop it so pages
        // end up separated by exactly one space
        texts.push(text.trim_end_matches(['\n', '\r']).to_string());
    }

    Ok(texts)
}

/// Flatten a PDF into one buffer, page texts joined by a single space.
pub fn assemble_text(bytes: &[u8]) -> Result<String> {
    with_pdf(bytes, |document| {
        let texts = page_texts(document)?;
        debug!(pages = texts.len(), "assembled document text");
        Ok(texts.join(" "))
    })
}

// lopdf helper - Pure Rust PDF loading
use lopdf::Document;

use crate::types::{CountError, Result};

/// Load a PDF document from an in-memory buffer
pub fn load_pdf(bytes: &[u8]) -> Result<Document> {
    if bytes.is_empty() {
        return Err(CountError::Pdf("empty document".to_string()));
    }

    let document =
        Document::load_mem(bytes).map_err(|e| CountError::Pdf(format!("invalid pdf: {e}")))?;

    // Still carrying an Encrypt entry means lopdf could not open it with an empty password
    if document.is_encrypted() {
        return Err(CountError::Pdf("document is encrypted".to_string()));
    }

    Ok(document)
}

/// Execute an operation with a PDF document
pub fn with_pdf<F, R>(bytes: &[u8], f: F) -> Result<R>
where
    F: FnOnce(&Document) -> Result<R>,
{
    let document = load_pdf(bytes)?;
    f(&document)
}

// Sequential batch processing with per-document failure containment
use tracing::{error, info, warn};

use crate::config::ReportOptions;
use crate::counter::count_document;
use crate::document::{Document, LoadedDocument};
use crate::keywords::{is_blank, parse_keywords};
use crate::report::{Row, Table};
use crate::types::BatchError;

/// A document that could not be counted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailure {
    pub filename: String,
    pub message: String,
}

impl DocumentFailure {
    pub fn new(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            message: message.into(),
        }
    }
}

/// Everything one batch produced: rows for the documents that worked,
/// failures for the ones that did not, both in input order.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub table: Table,
    pub failures: Vec<DocumentFailure>,
}

impl BatchReport {
    fn new(options: ReportOptions) -> Self {
        Self {
            table: Table::new(options),
            failures: Vec::new(),
        }
    }

    /// Number of documents counted successfully
    pub fn processed(&self) -> usize {
        self.table.len()
    }

    pub fn total_words(&self) -> usize {
        self.table.total_words()
    }
}

/// Count `keyword_input` (comma separated) in each document, one at a time.
pub fn process_batch(
    documents: &[Document],
    keyword_input: &str,
    options: ReportOptions,
) -> Result<BatchReport, BatchError> {
    run(documents.iter().map(Ok), keyword_input, options)
}

/// Same as [`process_batch`], for documents that may have failed to load.
/// Load failures are reported alongside extraction failures.
pub fn process_loaded(
    documents: &[LoadedDocument],
    keyword_input: &str,
    options: ReportOptions,
) -> Result<BatchReport, BatchError> {
    run(documents.iter().map(Result::as_ref), keyword_input, options)
}

fn run<'a, I>(
    documents: I,
    keyword_input: &str,
    options: ReportOptions,
) -> Result<BatchReport, BatchError>
where
    I: ExactSizeIterator<Item = Result<&'a Document, &'a DocumentFailure>>,
{
    let total = documents.len();
    if total == 0 {
        warn!("{}", BatchError::NoDocuments);
        return Err(BatchError::NoDocuments);
    }
    if is_blank(keyword_input) {
        warn!("{}", BatchError::NoKeywords);
        return Err(BatchError::NoKeywords);
    }

    let keywords = parse_keywords(keyword_input);
    info!("Counting {} keyword(s) across {} document(s)", keywords.len(), total);

    let mut report = BatchReport::new(options);
    for (index, document) in documents.enumerate() {
        let document = match document {
            Ok(document) => document,
            Err(failure) => {
                error!("File {}: {}", failure.filename, failure.message);
                report.failures.push(failure.clone());
                continue;
            }
        };

        info!("Processing: {} ({}/{})", document.name, index + 1, total);
        match count_document(&document.bytes, &keywords) {
            Ok(result) => report.table.push(Row::new(&document.name, result)),
            Err(err) => {
                error!("File {}: {}", document.name, err);
                report
                    .failures
                    .push(DocumentFailure::new(&document.name, err.to_string()));
            }
        }
    }

    info!(
        "Done: {} processed, {} failed",
        report.processed(),
        report.failures.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_documents_is_rejected() {
        let err = process_batch(&[], "a", ReportOptions::default()).unwrap_err();
        assert_eq!(err, BatchError::NoDocuments);
    }

    #[test]
    fn blank_keywords_are_rejected() {
        let docs = [Document::new("x.pdf", b"junk".to_vec())];
        let err = process_batch(&docs, "  \n ", ReportOptions::default()).unwrap_err();
        assert_eq!(err, BatchError::NoKeywords);
    }

    #[test]
    fn documents_are_checked_before_keywords() {
        let err = process_batch(&[], "", ReportOptions::default()).unwrap_err();
        assert_eq!(err, BatchError::NoDocuments);
    }

    #[test]
    fn corrupt_document_is_contained() {
        let docs = [Document::new("broken.pdf", b"junk".to_vec())];
        let report = process_batch(&docs, "a", ReportOptions::default()).unwrap();
        assert!(report.table.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].filename, "broken.pdf");
        assert!(report.failures[0].message.contains("PDF error"));
    }

    #[test]
    fn load_failures_are_reported() {
        let loaded = vec![Err(DocumentFailure::new("gone.pdf", "IO error: not found"))];
        let report = process_loaded(&loaded, "a", ReportOptions::default()).unwrap();
        assert_eq!(report.processed(), 0);
        assert_eq!(report.failures, vec![DocumentFailure::new("gone.pdf", "IO error: not found")]);
    }
}

// Core error types for kwdensity

/// Failure while reading or extracting a single document.
/// Contained per document: a batch keeps going after one of these.
#[derive(Debug, thiserror::Error)]
pub enum CountError {
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<lopdf::Error> for CountError {
    fn from(err: lopdf::Error) -> Self {
        CountError::Pdf(err.to_string())
    }
}

// Validation failures that stop a batch before any document is touched
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    #[error("no PDF documents supplied, pass at least one file")]
    NoDocuments,

    #[error("keyword input is empty, pass at least one keyword")]
    NoKeywords,
}

pub type Result<T> = std::result::Result<T, CountError>;

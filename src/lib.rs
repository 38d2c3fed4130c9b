// kwdensity - keyword occurrence and density counting for PDF documents
pub mod batch;
pub mod config;
pub mod counter;
pub mod document;
pub mod keywords;
pub mod pdf_extraction;
pub mod report;
pub mod table_view;
pub mod types;

pub use batch::{process_batch, process_loaded, BatchReport, DocumentFailure};
pub use config::ReportOptions;
pub use counter::{count_document, count_text, CountResult};
pub use document::Document;
pub use report::{Row, Table};
pub use types::{BatchError, CountError};

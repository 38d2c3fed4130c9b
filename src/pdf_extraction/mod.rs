// PDF extraction module
pub mod lopdf_helper;
pub mod text;

pub use lopdf_helper::{load_pdf, with_pdf};
pub use text::{assemble_text, page_texts};

// Input documents: a file name plus raw PDF bytes
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::batch::DocumentFailure;

/// One uploaded PDF. The name is for display and need not be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// A document read from disk, or the reason it could not be read
pub type LoadedDocument = Result<Document, DocumentFailure>;

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Files are kept in the order given; a directory is replaced by the PDF
/// files directly inside it, sorted by name.
pub fn expand_paths(paths: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut expanded = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && is_pdf(p))
                .collect();
            entries.sort();
            if entries.is_empty() {
                warn!("no PDF files in {}", path.display());
            }
            expanded.extend(entries);
        } else {
            expanded.push(path.clone());
        }
    }
    Ok(expanded)
}

pub fn read_document(path: &Path) -> LoadedDocument {
    let name = display_name(path);
    match fs::read(path) {
        Ok(bytes) => {
            debug!("read {} ({} bytes)", name, bytes.len());
            Ok(Document::new(name, bytes))
        }
        Err(err) => Err(DocumentFailure::new(name, format!("IO error: {err}"))),
    }
}

pub fn read_documents(paths: &[PathBuf]) -> Vec<LoadedDocument> {
    paths.iter().map(|path| read_document(path)).collect()
}

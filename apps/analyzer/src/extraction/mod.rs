//! Resume text extraction for uploaded files.
//! PDF goes through `pdf-extract`; plain text is decoded as (lossy) UTF-8.

pub mod handlers;

use std::path::Path;

use anyhow::{anyhow, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    PlainText,
}

impl FileKind {
    /// Detects the kind from a filename extension (case-insensitive).
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())?
            .to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(FileKind::Pdf),
            "txt" => Some(FileKind::PlainText),
            _ => None,
        }
    }
}

/// Extracts text from raw file bytes. PDF parsing is CPU-bound; call from a
/// blocking context.
pub fn extract_text(kind: FileKind, bytes: &[u8]) -> Result<String> {
    match kind {
        FileKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| anyhow!("PDF extraction failed: {e:?}")),
        FileKind::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

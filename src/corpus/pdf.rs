// file: src/corpus/pdf.rs
// description: PDF text extraction for the QA pipeline
// reference: https://docs.rs/pdf-extract

use crate::error::{Result, RetrieverError};
use std::path::Path;
use tracing::info;

pub struct PdfLoader;

impl PdfLoader {
    /// Extract the plain text of a PDF file. Fails on unreadable files and
    /// on PDFs that contain no extractable text (scanned images).
    pub fn extract_text(path: &Path) -> Result<String> {
        let text = pdf_extract::extract_text(path).map_err(|e| RetrieverError::PdfExtraction {
            file: path.display().to_string(),
            message: e.to_string(),
        })?;

        if text.trim().is_empty() {
            return Err(RetrieverError::PdfExtraction {
                file: path.display().to_string(),
                message: "no extractable text (scanned or image-only PDF?)".to_string(),
            });
        }

        info!(
            "Extracted {} characters of text from {}",
            text.len(),
            path.display()
        );

        Ok(text)
    }
}

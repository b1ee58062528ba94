//! PDF text extraction — the upstream collaborator feeding the engine.
//!
//! Extraction failures and text-free PDFs are reported here instead of
//! letting garbage flow into scoring.

use crate::errors::AppError;

pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("Could not extract text from PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "The PDF contains no extractable text (scanned image?)".to_string(),
        ));
    }

    Ok(text)
}

use crate::errors::AppError;

/// Extracts plain text from an uploaded PDF.
///
/// Extraction failures and PDFs with no text layer (image-only scans) are
/// validation errors: the caller sent a file that cannot be analyzed.
pub fn text_from_pdf(data: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(data).map_err(|e| {
        tracing::warn!("PDF extraction failed: {e}");
        AppError::Validation("Could not extract text from the PDF".to_string())
    })?;

    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from the PDF".to_string(),
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_rejected() {
        let err = text_from_pdf(b"this is not a pdf").unwrap_err();
        assert!(err.to_string().contains("Could not extract text"));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(text_from_pdf(&[]).is_err());
    }

    #[test]
    fn test_truncated_header_rejected() {
        // A PDF magic number with no body behind it
        assert!(text_from_pdf(b"%PDF-1.7\n").is_err());
    }
}

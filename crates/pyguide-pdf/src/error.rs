//! Error types for PDF generation

use thiserror::Error;

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Errors that can occur during PDF generation
#[derive(Error, Debug)]
pub enum PdfError {
    /// A character survived sanitization that Latin-1 cannot represent
    #[error("character '{0}' (U+{1:04X}) cannot be encoded as Latin-1")]
    Encoding(char, u32),

    /// Typst compilation error
    #[error("Typst compilation failed: {0}")]
    Compilation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PdfError {
    /// Build an encoding error for an unrepresentable character
    pub fn encoding(c: char) -> Self {
        PdfError::Encoding(c, c as u32)
    }
}

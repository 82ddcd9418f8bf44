//! pyguide-pdf - PDF generation via Typst
//!
//! This crate renders guide sections to a PDF using Typst as the
//! typesetting backend.
//!
//! # Architecture
//!
//! The PDF generation pipeline consists of two stages:
//!
//! 1. **Transpiler** - Converts sections to Typst markup
//! 2. **Compiler** - Compiles Typst markup to PDF bytes
//!
//! Section text is sanitized before rendering; characters outside Latin-1
//! that survive sanitization abort the pipeline with [`PdfError::Encoding`].
//!
//! # Example
//!
//! ```ignore
//! use pyguide_content::{guide_sections, GUIDE_TITLE};
//! use pyguide_pdf::render_pdf;
//!
//! let pdf_bytes = render_pdf(GUIDE_TITLE, &guide_sections())?;
//! ```

mod compiler;
mod error;
pub mod sanitize;
mod transpiler;

pub use compiler::Compiler;
pub use error::{PdfError, Result};
pub use transpiler::Transpiler;

/// Render sections to PDF
///
/// # Arguments
/// * `title` - Document title, shown as the header on every page
/// * `sections` - Guide sections, rendered in order
///
/// # Returns
/// PDF bytes on success
pub fn render_pdf(title: &str, sections: &[pyguide_content::Section]) -> Result<Vec<u8>> {
    let typst_markup = Transpiler::transpile(title, sections)?;
    Compiler::compile(&typst_markup)
}

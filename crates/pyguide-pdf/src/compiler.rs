//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib.

use crate::error::{PdfError, Result};
use typst_as_lib::TypstEngine;

/// Compiler for converting Typst markup to PDF
pub struct Compiler;

impl Compiler {
    /// Compile Typst markup to PDF bytes
    pub fn compile(markup: &str) -> Result<Vec<u8>> {
        let engine = TypstEngine::builder()
            .main_file(markup.to_string())
            .build();

        // compiled is Warned<Result<Document, Error>>; warnings are ignored
        let compiled = engine.compile();
        let document = compiled
            .output
            .map_err(|e| PdfError::Compilation(format!("{:?}", e)))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| PdfError::Compilation(format!("PDF generation failed: {:?}", e)))?;

        Ok(pdf_bytes.into())
    }
}

//! Unicode cleanup for Latin-1 output
//!
//! The guide text carries a handful of typographic characters (arrows,
//! en-dashes, curly quotes) that the Latin-1 output encoding cannot
//! represent. `sanitize` replaces them with their closest ASCII
//! equivalents; `check_latin1` rejects anything that slips through.

use crate::error::{PdfError, Result};

/// Replace known non-Latin-1 punctuation with ASCII equivalents
///
/// All other characters pass through unchanged. Idempotent.
pub fn sanitize(text: &str) -> String {
    text.replace('–', "-")
        .replace('→', "->")
        .replace('“', "\"")
        .replace('”', "\"")
        .replace('’', "'")
}

/// Verify that every character of `text` fits in Latin-1
///
/// Returns the first offending character as a [`PdfError::Encoding`].
pub fn check_latin1(text: &str) -> Result<()> {
    match text.chars().find(|&c| c as u32 > 0xFF) {
        Some(c) => Err(PdfError::encoding(c)),
        None => Ok(()),
    }
}

//! Section definitions
//!
//! A section is one titled block of guide content. Sections are rendered
//! in the order they appear in the content table.

use serde::{Deserialize, Serialize};

/// A titled block of guide content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading, rendered in bold on its own line
    pub title: String,
    /// Section body, rendered with line breaks preserved
    pub body: String,
}

impl Section {
    /// Create a new section
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

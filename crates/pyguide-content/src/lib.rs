//! pyguide-content - Content model and guide text
//!
//! This crate provides the `Section` data type and the fixed content table
//! for the List vs Tuple comparison guide.

mod guide;
mod section;

pub use guide::{guide_sections, GUIDE_TITLE};
pub use section::Section;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! pyguide CLI - Command-line interface library
//!
//! This library provides the CLI functionality for pyguide: generating the
//! Python List vs Tuple comparison guide as a PDF file.
//!
//! # Library Usage
//!
//! ```ignore
//! use pyguide_cli::{generate_command, run_cli};
//!
//! // Run the full CLI
//! run_cli()?;
//!
//! // Or generate to a specific path programmatically
//! generate_command(Path::new("guide.pdf"))?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Write List_vs_Tuple_Comparison_Guide.pdf to the current directory
//! pyguide
//!
//! # Write to a chosen path
//! pyguide --output notes/guide.pdf
//! ```

pub mod app;

// Re-export main entry point
pub use app::{generate_command, run_cli, DEFAULT_OUTPUT};

//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use pyguide_content::{guide_sections, GUIDE_TITLE};
use pyguide_pdf::render_pdf;

/// Default output path, next to wherever the tool is run
pub const DEFAULT_OUTPUT: &str = "List_vs_Tuple_Comparison_Guide.pdf";

#[derive(Parser)]
#[command(name = "pyguide")]
#[command(version, about = "Generate the Python List vs Tuple comparison guide as a PDF", long_about = None)]
struct Cli {
    /// Output PDF file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and generates the guide PDF.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    generate_command(&cli.output)
}

/// Execute the generate command
pub fn generate_command(output: &Path) -> Result<()> {
    println!("pyguide v{}", pyguide_content::VERSION);

    // Step 1: Build the fixed content table
    let sections = guide_sections();
    println!("  {} sections", sections.len());

    // Step 2: Render sections to PDF bytes
    println!("  Rendering PDF...");
    let pdf_bytes =
        render_pdf(GUIDE_TITLE, &sections).context("Failed to render guide to PDF")?;

    // Step 3: Write output. The target directory must already exist; a
    // missing or unwritable directory fails here and propagates.
    fs::write(output, &pdf_bytes)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    println!();
    println!("PDF created successfully at: {}", output.display());
    println!("  Size: {} bytes", pdf_bytes.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default_output() {
        let args = vec!["pyguide"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_cli_parse_output_flag() {
        let args = vec!["pyguide", "--output", "notes/guide.pdf"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.output, PathBuf::from("notes/guide.pdf"));
    }

    #[test]
    fn test_cli_parse_short_output_flag() {
        let args = vec!["pyguide", "-o", "out.pdf"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.output, PathBuf::from("out.pdf"));
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        let args = vec!["pyguide", "--format", "json"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}

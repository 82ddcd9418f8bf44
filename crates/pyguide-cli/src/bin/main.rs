//! pyguide CLI binary entry point
//!
//! This is a thin wrapper that calls the library's `run_cli()` function.
//! Any error propagates uncaught and exits with a non-zero status.

use anyhow::Result;
use pyguide_cli::run_cli;

fn main() -> Result<()> {
    run_cli()
}

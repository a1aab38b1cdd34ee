//! CLI module containing the main entry point logic.
//!
//! This module is separated from main.rs so the argument surface and the
//! output path stay exercisable from the library.

use crate::embed;
use crate::source::FsReader;
use clap::Parser as ClapParser;
use std::io::Write;
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for the strlit tool.
#[derive(ClapParser)]
#[command(name = "strlit")]
#[command(version = PKG_VERSION)]
#[command(about = "Wrap the lines of a text file for embedding as a string literal", long_about = None)]
struct Cli {
    /// Text file whose lines are wrapped
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

/// Main CLI logic.
///
/// Parses the arguments, runs the wrapping pipeline against the real
/// filesystem and writes the result to standard output. Usage errors are
/// handled by clap (stderr, exit code 2); file and write errors exit 1.
pub fn run_cli() {
    let cli = Cli::parse();

    let wrapped = match embed::embed_file(&cli.input, &FsReader) {
        Ok(text) => text,
        Err(e) => crate::fatal_error(&format!("Error: {e}")),
    };

    // No trailing newline beyond what the transform produced.
    if let Err(e) = write_output(&wrapped) {
        crate::fatal_error(&format!("Error writing output: {e}"));
    }
}

/// Write the wrapped text verbatim to standard output.
fn write_output(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

//! # strlit
//!
//! Re-emit a text file with every line wrapped in double quotes and
//! terminated with an escaped `\n` token, ready to embed as a string
//! literal in source code.
//!
//! ## Usage
//!
//! - Wrap a file: `strlit kernel.cl`
//! - Redirect into a generated source file: `strlit kernel.cl > kernel_source.inc`
//!
//! See README.md for more details and examples.

/// Entry point for the CLI tool.
fn main() {
    strlit::cli::run_cli();
}

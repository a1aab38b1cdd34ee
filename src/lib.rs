//! # strlit
//!
//! Wrap each line of a text file in double quotes with an escaped newline,
//! for embedding as a string literal in source code.

pub mod cli;
pub mod embed;
pub mod source;
pub mod wrap;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

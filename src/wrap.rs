//! The line-wrapping transform.
//!
//! Takes the raw contents of a text file and produces the embeddable form:
//! the whole blob is trimmed once, then every line becomes `"<line>\n"`,
//! i.e. a literal double quote, the line text, the two characters backslash
//! and `n`, and a closing quote.
//!
//! Line terminators follow one explicit policy: the trimmed content is
//! split on `\n` (a `\r` directly before the `\n` belongs to the
//! terminator; a lone `\r` does not), every line including interior empty
//! lines is wrapped, and the segments are rejoined with single `\n` bytes.
//! Everything else passes through untouched: embedded quotes, backslashes
//! and non-ASCII text are not escaped.

/// Wrap every line of `content` for embedding as a string literal.
///
/// The trim is applied once to the whole blob, so no leading or trailing
/// whitespace from the input survives and the final segment carries no
/// trailing separator. Empty or all-whitespace input produces an empty
/// string.
#[must_use]
pub fn wrap_lines(content: &str) -> String {
    content
        .trim()
        .lines()
        .map(wrap_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap a single line as `"<line>\n"`.
fn wrap_line(line: &str) -> String {
    format!("\"{line}\\n\"")
}

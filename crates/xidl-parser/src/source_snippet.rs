//! Editor-style rendering of an error message with its source location.
//!
//! Shared by `XidlParseError` and the validator's diagnostics so that every
//! error a user sees is laid out the same way.

use crate::XidlErrorNote;
use crate::XidlSourceSpan;

/// Formats an error as a multi-line report.
///
/// Produces output like:
/// ```text
/// error: Expected `:` after field name
///   --> <input>:5:12
///    |
///  5 |     userName u64
///    |              ^^^
///    = help: Add `:` between the field name and its type
/// ```
///
/// When `source` is `None`, snippets are omitted but line/column info is
/// still shown.
pub fn format_detailed_report(
    message: &str,
    span: &XidlSourceSpan,
    notes: &[XidlErrorNote],
    source: Option<&str>,
) -> String {
    let mut output = String::new();

    output.push_str("error: ");
    output.push_str(message);
    output.push('\n');

    let (line, column) = span.start_inclusive.to_display_line_col();
    output.push_str(&format!("  --> <input>:{line}:{column}\n"));

    if let Some(src) = source
        && let Some(snippet) = format_primary_snippet(src, span)
    {
        output.push_str(&snippet);
    }

    for note in notes {
        output.push_str(&format!("   = {}: {}\n", note.kind.label(), note.message));
        if let (Some(note_span), Some(src)) = (&note.span, source)
            && let Some(snippet) = format_note_snippet(src, note_span)
        {
            output.push_str(&snippet);
        }
    }

    output
}

/// Formats an error as `line:col: error: message`.
pub fn format_oneline_report(message: &str, span: &XidlSourceSpan) -> String {
    let (line, column) = span.start_inclusive.to_display_line_col();
    format!("<input>:{line}:{column}: error: {message}")
}

fn source_line(source: &str, line_num: usize) -> Option<&str> {
    source.lines().nth(line_num)
}

fn format_primary_snippet(source: &str, span: &XidlSourceSpan) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source_line(source, line_num)?;
    let display_line_num = line_num + 1;
    let width = display_line_num.to_string().len().max(2);

    let col_start = span.start_inclusive.col_utf8();
    // Multi-line spans are underlined to the end of their first line.
    let col_end = if span.end_exclusive.line() == line_num {
        span.end_exclusive.col_utf8()
    } else {
        line_content.chars().count()
    };
    let underline_len = col_end.saturating_sub(col_start).max(1);

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", ""));
    output.push_str(&format!("{display_line_num:>width$} | {line_content}\n"));
    output.push_str(&format!(
        "{:>width$} | {:>col_start$}{}\n",
        "",
        "",
        "^".repeat(underline_len),
    ));
    Some(output)
}

fn format_note_snippet(source: &str, span: &XidlSourceSpan) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source_line(source, line_num)?;
    let display_line_num = line_num + 1;
    let width = display_line_num.to_string().len().max(2);
    let col_start = span.start_inclusive.col_utf8();

    let mut output = String::new();
    output.push_str(&format!("     {display_line_num:>width$} | {line_content}\n"));
    output.push_str(&format!("     {:>width$} | {:>col_start$}-\n", "", ""));
    Some(output)
}

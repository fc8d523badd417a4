use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::XidlSourceSpan;
use inherent::inherent;

/// A string literal (single-line `"..."` or block `"""..."""`).
///
/// `value` holds the cooked content: escapes processed for single-line
/// strings, indentation stripped for block strings.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub span: XidlSourceSpan,
    pub value: String,
    pub is_block: bool,
}

impl StringValue {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[inherent]
impl AstNode for StringValue {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        if self.is_block && can_print_as_block(&self.value) {
            sink.push_str("\"\"\"");
            sink.push_str(&self.value);
            sink.push_str("\"\"\"");
        } else {
            append_escaped_string(sink, &self.value);
        }
    }
}

/// Whether `value` survives a trip through block-string cooking unchanged
/// when printed verbatim between triple quotes.
fn can_print_as_block(value: &str) -> bool {
    let first_and_last_non_blank = value.lines().next().is_some_and(|l| !l.trim().is_empty())
        && value.lines().last().is_some_and(|l| !l.trim().is_empty());
    first_and_last_non_blank
        && !value.ends_with('"')
        && !value.ends_with('\n')
        && !value.contains("\"\"\"")
        && !value.contains('\r')
        && value
            .lines()
            .all(|line| !line.starts_with([' ', '\t']))
}

/// Appends `value` as a quoted single-line string literal.
pub fn append_escaped_string(sink: &mut String, value: &str) {
    sink.push('"');
    for ch in value.chars() {
        match ch {
            '"' => sink.push_str("\\\""),
            '\\' => sink.push_str("\\\\"),
            '\n' => sink.push_str("\\n"),
            '\r' => sink.push_str("\\r"),
            '\t' => sink.push_str("\\t"),
            '\u{0008}' => sink.push_str("\\b"),
            '\u{000C}' => sink.push_str("\\f"),
            c if c.is_control() => sink.push_str(&format!("\\u{{{:X}}}", c as u32)),
            c => sink.push(c),
        }
    }
    sink.push('"');
}

use crate::XidlSourceSpan;

/// Append the source text for `span` to `sink` by slicing directly from
/// `source` via byte offsets.
pub(crate) fn append_span_source_slice(span: &XidlSourceSpan, sink: &mut String, source: &str) {
    let start = span.start_inclusive.byte_offset();
    let end = span.end_exclusive.byte_offset();
    debug_assert!(
        start <= end && end <= source.len(),
        "append_span_source_slice: span {start}..{end} outside source of length {}",
        source.len(),
    );
    if let Some(text) = source.get(start..end) {
        sink.push_str(text);
    }
}

/// Indentation used for members of a `{ ... }` block in canonical output.
pub(crate) const INDENT: &str = "  ";

/// Trait implemented by all AST node types. Provides source reconstruction.
///
/// All AST node types implement this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic utilities.
///
/// # Source Reconstruction Modes
///
/// - **Source-slice mode (lossless):** When `source` is `Some(s)`,
///   [`append_source`](AstNode::append_source) slices
///   `&s[span.start.byte_offset..span.end.byte_offset]`.
///
/// - **Canonical mode:** When `source` is `None`,
///   [`append_source`](AstNode::append_source) walks the AST and emits
///   keywords, names, values and punctuation with standard spacing and
///   two-space indentation. Printing a re-parsed canonical document yields
///   the same text again.
pub trait AstNode {
    /// Append this node's source representation to `sink`.
    fn append_source(&self, sink: &mut String, source: Option<&str>);

    /// Return this node as a source string.
    fn to_source(&self, source: Option<&str>) -> String {
        let mut s = String::new();
        self.append_source(&mut s, source);
        s
    }
}

/// Canonical mode: writes `description` on its own line at `indent`.
pub(crate) fn append_description(
    sink: &mut String,
    description: Option<&crate::ast::StringValue>,
    indent: &str,
) {
    if let Some(description) = description {
        sink.push_str(indent);
        description.append_source(sink, None);
        sink.push('\n');
    }
}

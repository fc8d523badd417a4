//! Result type for parsing operations.

use crate::XidlParseError;

/// The result of a parsing operation.
///
/// The parser stops at the first syntax error, so in practice a result holds
/// either an AST or errors. The shape still allows both so that tooling can
/// keep the same accessors if recovery is ever added.
///
/// - [`valid_ast()`](Self::valid_ast) returns the AST only if parsing was
///   completely successful.
/// - [`ast()`](Self::ast) returns the AST if present, regardless of errors.
///
/// # Example
///
/// ```
/// # use xidl_parser::XidlParser;
/// let source = "type Customer { id: u64 }";
/// let result = XidlParser::new(source).parse_document();
///
/// if let Some(doc) = result.valid_ast() {
///     assert_eq!(doc.definitions.len(), 1);
/// }
/// for error in &result.errors {
///     eprintln!("{}", error.format_detailed(Some(source)));
/// }
/// ```
#[derive(Debug)]
pub struct ParseResult<TAst> {
    ast: Option<TAst>,

    /// Errors encountered during parsing. Empty on success.
    pub errors: Vec<XidlParseError>,
}

impl<TAst> ParseResult<TAst> {
    pub(crate) fn ok(ast: TAst) -> Self {
        Self {
            ast: Some(ast),
            errors: Vec::new(),
        }
    }

    pub(crate) fn err(errors: Vec<XidlParseError>) -> Self {
        Self { ast: None, errors }
    }

    /// Returns the AST only if parsing was completely successful (no errors).
    pub fn valid_ast(&self) -> Option<&TAst> {
        if self.errors.is_empty() {
            self.ast.as_ref()
        } else {
            None
        }
    }

    /// Returns the AST if present, regardless of whether errors occurred.
    pub fn ast(&self) -> Option<&TAst> {
        self.ast.as_ref()
    }

    /// Consuming version of [`valid_ast()`](Self::valid_ast).
    pub fn into_valid_ast(self) -> Option<TAst> {
        if self.errors.is_empty() {
            self.ast
        } else {
            None
        }
    }

    /// Returns `true` if parsing was completely successful (has AST, no
    /// errors).
    pub fn is_ok(&self) -> bool {
        self.ast.is_some() && self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Formats all errors as a single string for display.
    pub fn format_errors(&self, source: Option<&str>) -> String {
        self.errors
            .iter()
            .map(|e| e.format_detailed(source))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<TAst> From<ParseResult<TAst>> for Result<TAst, Vec<XidlParseError>> {
    /// Returns `Ok(ast)` only if there were no errors.
    fn from(result: ParseResult<TAst>) -> Self {
        if result.errors.is_empty() {
            match result.ast {
                Some(ast) => Ok(ast),
                None => Err(Vec::new()),
            }
        } else {
            Err(result.errors)
        }
    }
}

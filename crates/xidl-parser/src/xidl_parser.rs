//! Recursive descent parser for xidl documents.
//!
//! This module provides [`XidlParser`], a parser generic over any token
//! source implementing [`XidlTokenSource`].
//!
//! # Architecture
//!
//! Each grammar rule has a corresponding `parse_*` method returning
//! `Result<AstNode, ()>`, where `Err(())` means an error has already been
//! recorded. The parser does not recover: the first recorded error ends the
//! parse and is the one reported.

use crate::ast;
use crate::reserved_names;
use crate::token::XidlToken;
use crate::token::XidlTokenKind;
use crate::token_source::StrXidlTokenSource;
use crate::token_source::XidlTokenSource;
use crate::ParseResult;
use crate::ReservedNameContext;
use crate::SourcePosition;
use crate::ValueParsingError;
use crate::XidlParseError;
use crate::XidlParseErrorKind;
use crate::XidlSourceSpan;
use crate::XidlTokenStream;
use smallvec::SmallVec;

/// Declaration keywords, in the order they are suggested in errors.
const DECLARATION_KEYWORDS: [&str; 5] = ["scalar", "type", "enum", "interface", "role"];

// =============================================================================
// Delimiter tracking
// =============================================================================

/// Context in which a delimiter was opened, for error messages.
#[derive(Debug, Clone, Copy)]
enum DelimiterContext {
    /// `type Foo { ... }`
    ObjectTypeDefinition,
    /// `enum Foo { ... }`
    EnumDefinition,
    /// `interface { ... }`
    InterfaceDefinition,
    /// `role Foo { ... }`
    RoleDefinition,
    /// `op(a: A, ...)`
    FunctionParameters,
    /// `op{a: A}`
    UnaryParameter,
    /// `@annotation(...)`
    AnnotationArguments,
    /// `[T]`
    ListType,
    /// `{K: V}`
    MapType,
}

impl DelimiterContext {
    fn description(&self) -> &'static str {
        match self {
            DelimiterContext::ObjectTypeDefinition => "object type definition",
            DelimiterContext::EnumDefinition => "enum definition",
            DelimiterContext::InterfaceDefinition => "interface definition",
            DelimiterContext::RoleDefinition => "role definition",
            DelimiterContext::FunctionParameters => "operation parameters",
            DelimiterContext::UnaryParameter => "unary operation parameter",
            DelimiterContext::AnnotationArguments => "annotation arguments",
            DelimiterContext::ListType => "list type",
            DelimiterContext::MapType => "map type",
        }
    }

    /// The (opening, closing) delimiter pair for this context.
    fn delimiters(&self) -> (&'static str, &'static str) {
        match self {
            DelimiterContext::FunctionParameters | DelimiterContext::AnnotationArguments => {
                ("(", ")")
            }
            DelimiterContext::ListType => ("[", "]"),
            DelimiterContext::ObjectTypeDefinition
            | DelimiterContext::EnumDefinition
            | DelimiterContext::InterfaceDefinition
            | DelimiterContext::RoleDefinition
            | DelimiterContext::UnaryParameter
            | DelimiterContext::MapType => ("{", "}"),
        }
    }
}

#[derive(Debug, Clone)]
struct OpenDelimiter {
    span: XidlSourceSpan,
    context: DelimiterContext,
}

/// What the parser found where it expected something else.
enum Found {
    EndOfInput,
    LexerError(XidlParseError),
    Token { display: String, span: XidlSourceSpan },
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for xidl documents.
///
/// # Usage
///
/// ```
/// use xidl_parser::ast;
/// use xidl_parser::XidlParser;
///
/// let source = "type Customer { id: u64 }";
/// let result = XidlParser::new(source).parse_document();
///
/// assert!(result.is_ok());
/// if let Some(doc) = result.valid_ast() {
///     assert!(matches!(doc.definitions[0], ast::Definition::ObjectType(_)));
/// }
/// ```
pub struct XidlParser<'src, TTokenSource: XidlTokenSource<'src>> {
    token_stream: XidlTokenStream<'src, TTokenSource>,

    errors: Vec<XidlParseError>,

    /// Stack of open delimiters, used to explain unexpected end of input.
    delimiter_stack: SmallVec<[OpenDelimiter; 8]>,

    /// Current nesting depth of type references.
    recursion_depth: usize,

    /// End position of the most recently consumed token, used by
    /// `eof_span()` to anchor EOF errors to the last known source location.
    last_end_position: Option<SourcePosition>,

    /// Span of the first `interface` keyword, once one has been seen.
    interface_keyword_span: Option<XidlSourceSpan>,
}

impl<'src> XidlParser<'src, StrXidlTokenSource<'src>> {
    /// Creates a new parser from a string-like source.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrXidlTokenSource::new(source.as_ref()))
    }
}

impl<'src, TTokenSource: XidlTokenSource<'src>> XidlParser<'src, TTokenSource> {
    /// Maximum nesting depth of type references such as `[[{string: [u8]}]]`.
    ///
    /// Adversarial input like `[[[[[...` fails with a syntax error instead of
    /// overflowing the stack.
    const MAX_RECURSION_DEPTH: usize = 64;

    /// Creates a new parser from a token source.
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: XidlTokenStream::new(token_source),
            errors: Vec::new(),
            delimiter_stack: SmallVec::new(),
            recursion_depth: 0,
            last_end_position: None,
            interface_keyword_span: None,
        }
    }

    /// Parses a complete document.
    ///
    /// On failure the result carries exactly one error: the first one
    /// encountered.
    pub fn parse_document(mut self) -> ParseResult<ast::Document> {
        match self.parse_document_impl() {
            Ok(document) => ParseResult::ok(document),
            Err(()) => ParseResult::err(self.errors),
        }
    }

    // =========================================================================
    // Error recording
    // =========================================================================

    fn record_error(&mut self, error: XidlParseError) {
        self.errors.push(error);
    }

    fn push_delimiter(&mut self, span: XidlSourceSpan, context: DelimiterContext) {
        self.delimiter_stack.push(OpenDelimiter { span, context });
    }

    fn pop_delimiter(&mut self) {
        self.delimiter_stack.pop();
    }

    /// Records an error describing the next token as unexpected and returns
    /// `Err(())`.
    ///
    /// Lexer error tokens are reported with the lexer's own message. Running
    /// out of input inside a delimiter whose closer is among `expected` is
    /// reported as an unclosed delimiter.
    fn unexpected<T>(&mut self, expected: &[&str]) -> Result<T, ()> {
        let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        let found = match self.token_stream.peek() {
            None => Found::EndOfInput,
            Some(token) => match &token.kind {
                XidlTokenKind::Eof => Found::EndOfInput,
                XidlTokenKind::Error {
                    message,
                    error_notes,
                } => Found::LexerError(XidlParseError::from_lexer_error(
                    message.clone(),
                    token.span.clone(),
                    error_notes.clone(),
                )),
                kind => Found::Token {
                    display: Self::token_kind_display(kind),
                    span: token.span.clone(),
                },
            },
        };

        let error = match found {
            Found::LexerError(error) => error,
            Found::Token { display, span } => XidlParseError::new(
                format!("expected {}, found `{display}`", describe_expected(&expected)),
                span,
                XidlParseErrorKind::UnexpectedToken {
                    expected,
                    found: display,
                },
            ),
            Found::EndOfInput => self.eof_error(expected),
        };
        self.record_error(error);
        Err(())
    }

    fn eof_error(&self, expected: Vec<String>) -> XidlParseError {
        let span = self.eof_span();
        let Some(open) = self.delimiter_stack.last() else {
            return XidlParseError::new(
                format!("expected {}, found end of input", describe_expected(&expected)),
                span,
                XidlParseErrorKind::UnexpectedEof { expected },
            );
        };

        let (opener, closer) = open.context.delimiters();
        let mut error = if expected.iter().any(|e| e == closer) {
            XidlParseError::new(
                format!("unclosed `{opener}` in {}", open.context.description()),
                span,
                XidlParseErrorKind::UnclosedDelimiter {
                    delimiter: opener.to_string(),
                },
            )
        } else {
            XidlParseError::new(
                format!("expected {}, found end of input", describe_expected(&expected)),
                span,
                XidlParseErrorKind::UnexpectedEof { expected },
            )
        };
        error.add_note_with_span(format!("`{opener}` opened here"), open.span.clone());
        error
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Expects a specific token kind and consumes it.
    fn expect(&mut self, expected_kind: &XidlTokenKind) -> Result<XidlToken<'src>, ()> {
        if self.peek_is(expected_kind) {
            self.advance()
        } else {
            let display = Self::token_kind_display(expected_kind);
            self.unexpected(&[display.as_str()])
        }
    }

    /// Expects a closing delimiter, pops the delimiter stack, and returns the
    /// closer's span.
    fn expect_closing(&mut self, kind: &XidlTokenKind) -> Result<XidlSourceSpan, ()> {
        let token = self.expect(kind)?;
        self.pop_delimiter();
        Ok(token.span)
    }

    /// Expects a name token and returns an `ast::Name`.
    ///
    /// `what` describes the expected name in error messages (e.g.
    /// "a field name").
    fn expect_ast_name(&mut self, what: &str) -> Result<ast::Name, ()> {
        if !self.peek_is(&XidlTokenKind::Name(Default::default())) {
            return self.unexpected(&[what]);
        }
        let token = self.advance()?;
        match token.kind {
            XidlTokenKind::Name(value) => Ok(ast::Name::new(value.into_owned(), token.span)),
            _ => self.unexpected(&[what]),
        }
    }

    /// Expects a declaration name that does not shadow a built-in scalar or
    /// `void`.
    fn expect_declaration_name(&mut self, keyword: &str) -> Result<ast::Name, ()> {
        let name = self.expect_ast_name(&format!("a name after `{keyword}`"))?;
        if reserved_names::is_reserved_declaration_name(&name.value) {
            let mut error = XidlParseError::new(
                format!("`{}` is a built-in type name and cannot be declared", name.value),
                name.span.clone(),
                XidlParseErrorKind::ReservedName {
                    name: name.value.clone(),
                    context: ReservedNameContext::DeclarationName,
                },
            );
            error.add_help("Choose a different name for this declaration");
            self.record_error(error);
            return Err(());
        }
        Ok(name)
    }

    /// Expects a specific keyword (a Name token with specific text) and
    /// returns its span.
    fn expect_keyword(&mut self, keyword: &str) -> Result<XidlSourceSpan, ()> {
        if self.peek_is_keyword(keyword) {
            Ok(self.advance()?.span)
        } else {
            self.unexpected(&[keyword])
        }
    }

    /// Checks if the current token is a specific keyword without consuming.
    ///
    /// `true`/`false` tokens never match, since they are not lexed as names.
    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        match self.token_stream.peek() {
            Some(XidlToken {
                kind: XidlTokenKind::Name(name),
                ..
            }) => name.as_ref() == keyword,
            _ => false,
        }
    }

    /// Checks if the current token matches the given kind without consuming.
    fn peek_is(&mut self, kind: &XidlTokenKind) -> bool {
        self.peek_nth_is(0, kind)
    }

    fn peek_nth_is(&mut self, n: usize, kind: &XidlTokenKind) -> bool {
        match self.token_stream.peek_nth(n) {
            Some(token) => Self::token_kinds_match(&token.kind, kind),
            None => false,
        }
    }

    /// Whether the next token is a string that may serve as a description.
    fn peek_is_description(&mut self) -> bool {
        matches!(
            self.token_stream.peek().map(|t| &t.kind),
            Some(XidlTokenKind::StringValue(_)) | Some(XidlTokenKind::BlockStringValue(_))
        )
    }

    fn peek_is_end(&mut self) -> bool {
        self.token_stream.is_at_end()
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    /// Consumes the next token and tracks its end position for EOF error
    /// reporting.
    fn consume_token(&mut self) -> Option<XidlToken<'src>> {
        let token = self.token_stream.consume();
        if let Some(ref t) = token {
            self.last_end_position = Some(t.span.end_exclusive.clone());
        }
        token
    }

    /// Consumes the next token, recording an end-of-input error if the
    /// stream is exhausted.
    fn advance(&mut self) -> Result<XidlToken<'src>, ()> {
        match self.consume_token() {
            Some(token) => Ok(token),
            None => {
                let error = self.eof_error(vec!["a token".to_string()]);
                self.record_error(error);
                Err(())
            }
        }
    }

    /// Returns a span for EOF errors, anchored to the end of the last
    /// consumed token if available.
    fn eof_span(&self) -> XidlSourceSpan {
        match &self.last_end_position {
            Some(pos) => XidlSourceSpan::empty_at(pos.clone()),
            None => XidlSourceSpan::empty_at(SourcePosition::zero()),
        }
    }

    /// Builds a span from the start of `start` to the end of the last
    /// consumed token.
    fn make_span(&self, start: &XidlSourceSpan) -> XidlSourceSpan {
        let end = self
            .last_end_position
            .clone()
            .unwrap_or_else(|| start.end_exclusive.clone());
        XidlSourceSpan::new(start.start_inclusive.clone(), end)
    }

    /// Returns a human-readable display string for a token kind.
    fn token_kind_display(kind: &XidlTokenKind) -> String {
        match kind {
            XidlTokenKind::Name(s) => s.to_string(),
            XidlTokenKind::IntValue(s) => s.to_string(),
            XidlTokenKind::FloatValue(s) => s.to_string(),
            XidlTokenKind::StringValue(_) => "string".to_string(),
            XidlTokenKind::BlockStringValue(_) => "block string".to_string(),
            XidlTokenKind::True => "true".to_string(),
            XidlTokenKind::False => "false".to_string(),
            XidlTokenKind::Eof => "end of input".to_string(),
            XidlTokenKind::Error { message, .. } => format!("tokenization error: {message}"),
            punctuator => punctuator.as_punctuator_str().unwrap_or("?").to_string(),
        }
    }

    /// Compares token kinds by variant, ignoring payloads.
    ///
    /// The match on `actual` is exhaustive so that adding a token kind forces
    /// this function to be revisited.
    fn token_kinds_match(actual: &XidlTokenKind, expected: &XidlTokenKind) -> bool {
        match actual {
            XidlTokenKind::Name(_) => matches!(expected, XidlTokenKind::Name(_)),
            XidlTokenKind::IntValue(_) => matches!(expected, XidlTokenKind::IntValue(_)),
            XidlTokenKind::FloatValue(_) => matches!(expected, XidlTokenKind::FloatValue(_)),
            XidlTokenKind::StringValue(_) => matches!(expected, XidlTokenKind::StringValue(_)),
            XidlTokenKind::BlockStringValue(_) => {
                matches!(expected, XidlTokenKind::BlockStringValue(_))
            }
            XidlTokenKind::Error { .. } => matches!(expected, XidlTokenKind::Error { .. }),
            XidlTokenKind::At => actual == expected,
            XidlTokenKind::Colon => actual == expected,
            XidlTokenKind::Comma => actual == expected,
            XidlTokenKind::CurlyBraceClose => actual == expected,
            XidlTokenKind::CurlyBraceOpen => actual == expected,
            XidlTokenKind::Equals => actual == expected,
            XidlTokenKind::ParenClose => actual == expected,
            XidlTokenKind::ParenOpen => actual == expected,
            XidlTokenKind::Question => actual == expected,
            XidlTokenKind::SquareBracketClose => actual == expected,
            XidlTokenKind::SquareBracketOpen => actual == expected,
            XidlTokenKind::True => actual == expected,
            XidlTokenKind::False => actual == expected,
            XidlTokenKind::Eof => actual == expected,
        }
    }

    /// Increments the nesting depth, failing once it exceeds
    /// [`Self::MAX_RECURSION_DEPTH`]. Callers must pair a successful call
    /// with `exit_recursion()`.
    fn enter_recursion(&mut self) -> Result<(), ()> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            self.recursion_depth -= 1;
            let span = self
                .token_stream
                .peek()
                .map(|t| t.span.clone())
                .unwrap_or_else(|| self.eof_span());
            self.record_error(XidlParseError::new(
                "maximum nesting depth exceeded",
                span,
                XidlParseErrorKind::InvalidSyntax,
            ));
            return Err(());
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Literals
    // =========================================================================

    /// Cooks a string token into an `ast::StringValue`.
    fn string_value_from_token(&mut self, token: XidlToken<'src>) -> Result<ast::StringValue, ()> {
        let is_block = matches!(token.kind, XidlTokenKind::BlockStringValue(_));
        match token.kind.parse_string_value() {
            Some(Ok(value)) => Ok(ast::StringValue {
                span: token.span,
                value,
                is_block,
            }),
            Some(Err(err)) => {
                self.record_error(XidlParseError::new(
                    err.to_string(),
                    token.span,
                    XidlParseErrorKind::InvalidValue(ValueParsingError::String(err)),
                ));
                Err(())
            }
            None => self.unexpected(&["a string"]),
        }
    }

    /// Parses a single-line string literal.
    fn parse_string_literal(&mut self, what: &str) -> Result<ast::StringValue, ()> {
        if !self.peek_is(&XidlTokenKind::StringValue(Default::default())) {
            return self.unexpected(&[what]);
        }
        let token = self.advance()?;
        self.string_value_from_token(token)
    }

    /// Parses an optional description (single-line or block string).
    fn parse_description(&mut self) -> Result<Option<ast::StringValue>, ()> {
        if !self.peek_is_description() {
            return Ok(None);
        }
        let token = self.advance()?;
        self.string_value_from_token(token).map(Some)
    }

    /// Parses a literal: a number, single-line string, boolean, or enum
    /// symbol.
    fn parse_literal(&mut self) -> Result<ast::Value, ()> {
        const EXPECTED: &[&str] = &["a literal value"];
        let is_literal = matches!(
            self.token_stream.peek().map(|t| &t.kind),
            Some(
                XidlTokenKind::IntValue(_)
                    | XidlTokenKind::FloatValue(_)
                    | XidlTokenKind::StringValue(_)
                    | XidlTokenKind::True
                    | XidlTokenKind::False
                    | XidlTokenKind::Name(_)
            )
        );
        if !is_literal {
            return self.unexpected(EXPECTED);
        }

        let token = self.advance()?;
        let span = token.span.clone();
        match token.kind {
            XidlTokenKind::IntValue(raw) => Ok(ast::Value::Int(ast::IntValue {
                span,
                raw: raw.into_owned(),
            })),
            XidlTokenKind::FloatValue(raw) => Ok(ast::Value::Float(ast::FloatValue {
                span,
                raw: raw.into_owned(),
            })),
            XidlTokenKind::True => Ok(ast::Value::Boolean(ast::BooleanValue { span, value: true })),
            XidlTokenKind::False => Ok(ast::Value::Boolean(ast::BooleanValue {
                span,
                value: false,
            })),
            XidlTokenKind::Name(name) => {
                Ok(ast::Value::EnumSymbol(ast::Name::new(name.into_owned(), span)))
            }
            XidlTokenKind::StringValue(_) => self.string_value_from_token(token).map(ast::Value::String),
            _ => self.unexpected(EXPECTED),
        }
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// Parses a type reference, guarding nesting depth.
    fn parse_type_ref(&mut self) -> Result<ast::TypeRef, ()> {
        self.enter_recursion()?;
        let result = self.parse_type_ref_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_ref_impl(&mut self) -> Result<ast::TypeRef, ()> {
        let base = if self.peek_is(&XidlTokenKind::SquareBracketOpen) {
            self.parse_list_type_ref()?
        } else if self.peek_is(&XidlTokenKind::CurlyBraceOpen) {
            self.parse_map_type_ref()?
        } else if self.peek_is_keyword(reserved_names::VOID_KEYWORD) {
            let span = self.advance()?.span;
            let mut error = XidlParseError::new(
                "`void` can only be used as an operation's return type",
                span,
                XidlParseErrorKind::ReservedName {
                    name: reserved_names::VOID_KEYWORD.to_string(),
                    context: ReservedNameContext::TypeReference,
                },
            );
            error.add_help("Mark the slot optional with `?` if it may hold no value");
            self.record_error(error);
            return Err(());
        } else if self.peek_is(&XidlTokenKind::Name(Default::default())) {
            let name = self.expect_ast_name("a type name")?;
            ast::TypeRef::Named(ast::NamedTypeRef {
                span: name.span.clone(),
                name,
            })
        } else {
            return self.unexpected(&["a type name", "[", "{"]);
        };

        if self.peek_is(&XidlTokenKind::Question) {
            self.advance()?;
            let span = self.make_span(base.span());
            return Ok(ast::TypeRef::Optional(ast::OptionalTypeRef {
                span,
                inner: Box::new(base),
            }));
        }
        Ok(base)
    }

    fn parse_list_type_ref(&mut self) -> Result<ast::TypeRef, ()> {
        let open = self.expect(&XidlTokenKind::SquareBracketOpen)?;
        self.push_delimiter(open.span.clone(), DelimiterContext::ListType);
        let element = self.parse_type_ref()?;
        self.expect_closing(&XidlTokenKind::SquareBracketClose)?;
        Ok(ast::TypeRef::List(ast::ListTypeRef {
            span: self.make_span(&open.span),
            element: Box::new(element),
        }))
    }

    fn parse_map_type_ref(&mut self) -> Result<ast::TypeRef, ()> {
        let open = self.expect(&XidlTokenKind::CurlyBraceOpen)?;
        self.push_delimiter(open.span.clone(), DelimiterContext::MapType);
        let key = self.parse_type_ref()?;
        self.expect(&XidlTokenKind::Colon)?;
        let value = self.parse_type_ref()?;
        self.expect_closing(&XidlTokenKind::CurlyBraceClose)?;
        Ok(ast::TypeRef::Map(ast::MapTypeRef {
            span: self.make_span(&open.span),
            key: Box::new(key),
            value: Box::new(value),
        }))
    }

    // =========================================================================
    // Annotations
    // =========================================================================

    fn parse_annotations(&mut self) -> Result<Vec<ast::Annotation>, ()> {
        let mut annotations = Vec::new();
        while self.peek_is(&XidlTokenKind::At) {
            annotations.push(self.parse_annotation()?);
        }
        Ok(annotations)
    }

    /// Parses `@name`, `@name()`, `@name(literal)` or
    /// `@name(arg: literal, ...)`. The shorthand form is normalized to a
    /// single argument named [`ast::SHORTHAND_ARGUMENT_NAME`].
    fn parse_annotation(&mut self) -> Result<ast::Annotation, ()> {
        let at = self.expect(&XidlTokenKind::At)?;
        let name = self.expect_ast_name("an annotation name")?;
        let mut arguments = Vec::new();

        if self.peek_is(&XidlTokenKind::ParenOpen) {
            let open = self.advance()?;
            self.push_delimiter(open.span, DelimiterContext::AnnotationArguments);

            let is_named_form = self.peek_is(&XidlTokenKind::Name(Default::default()))
                && self.peek_nth_is(1, &XidlTokenKind::Colon);
            if is_named_form {
                loop {
                    arguments.push(self.parse_annotation_argument()?);
                    if self.peek_is(&XidlTokenKind::Comma) {
                        self.advance()?;
                    } else {
                        break;
                    }
                }
                if !self.peek_is(&XidlTokenKind::ParenClose) {
                    return self.unexpected(&[")", ","]);
                }
            } else if !self.peek_is(&XidlTokenKind::ParenClose) {
                let value = self.parse_literal()?;
                let span = value.span().clone();
                arguments.push(ast::AnnotationArgument {
                    name: ast::Name::new(ast::SHORTHAND_ARGUMENT_NAME, span.clone()),
                    span,
                    value,
                });
            }
            self.expect_closing(&XidlTokenKind::ParenClose)?;
        }

        Ok(ast::Annotation {
            span: self.make_span(&at.span),
            name,
            arguments,
        })
    }

    fn parse_annotation_argument(&mut self) -> Result<ast::AnnotationArgument, ()> {
        let name = self.expect_ast_name("an argument name")?;
        self.expect(&XidlTokenKind::Colon)?;
        let value = self.parse_literal()?;
        Ok(ast::AnnotationArgument {
            span: self.make_span(&name.span),
            name,
            value,
        })
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn parse_document_impl(&mut self) -> Result<ast::Document, ()> {
        let namespace = if self.peek_is_keyword("namespace") {
            Some(self.parse_namespace_declaration()?)
        } else {
            None
        };

        let mut definitions = Vec::new();
        while !self.peek_is_end() {
            definitions.push(self.parse_definition()?);
        }

        let eof = self.expect(&XidlTokenKind::Eof)?;
        Ok(ast::Document {
            span: XidlSourceSpan::new(SourcePosition::zero(), eof.span.end_exclusive),
            namespace,
            definitions,
        })
    }

    fn parse_namespace_declaration(&mut self) -> Result<ast::NamespaceDeclaration, ()> {
        let keyword_span = self.expect_keyword("namespace")?;
        let name = self.parse_string_literal("a namespace string")?;
        Ok(ast::NamespaceDeclaration {
            span: self.make_span(&keyword_span),
            name,
        })
    }

    fn parse_definition(&mut self) -> Result<ast::Definition, ()> {
        let description = self.parse_description()?;
        let start = match &description {
            Some(description) => description.span.clone(),
            None => self.token_stream.peek().map(|t| t.span.clone()).unwrap_or_else(|| self.eof_span()),
        };

        if self.peek_is_keyword("scalar") {
            self.parse_scalar_alias_definition(start, description)
                .map(ast::Definition::ScalarAlias)
        } else if self.peek_is_keyword("type") {
            self.parse_object_type_definition(start, description)
                .map(ast::Definition::ObjectType)
        } else if self.peek_is_keyword("enum") {
            self.parse_enum_type_definition(start, description)
                .map(ast::Definition::Enum)
        } else if self.peek_is_keyword("interface") {
            self.parse_interface_definition(start, description)
                .map(ast::Definition::Interface)
        } else if self.peek_is_keyword("role") {
            self.parse_role_definition(start, description)
                .map(ast::Definition::Role)
        } else if self.peek_is_keyword("namespace") {
            let span = self.advance()?.span;
            let mut error = XidlParseError::new(
                "`namespace` must be the first declaration of a document",
                span,
                XidlParseErrorKind::InvalidSyntax,
            );
            error.add_help("Move the namespace declaration to the top of the document");
            self.record_error(error);
            Err(())
        } else {
            let suggestion = match self.token_stream.peek().map(|t| &t.kind) {
                Some(XidlTokenKind::Name(name)) => suggest_declaration_keyword(name),
                _ => None,
            };
            let result = self.unexpected(&DECLARATION_KEYWORDS);
            if let (Some(keyword), Some(error)) = (suggestion, self.errors.last_mut()) {
                error.add_help(format!("Did you mean `{keyword}`?"));
            }
            result
        }
    }

    fn parse_scalar_alias_definition(
        &mut self,
        start: XidlSourceSpan,
        description: Option<ast::StringValue>,
    ) -> Result<ast::ScalarAliasDefinition, ()> {
        self.expect_keyword("scalar")?;
        let name = self.expect_declaration_name("scalar")?;
        self.expect(&XidlTokenKind::Equals)?;
        let aliased_type = self.expect_ast_name("a built-in scalar name")?;
        Ok(ast::ScalarAliasDefinition {
            span: self.make_span(&start),
            description,
            name,
            aliased_type,
        })
    }

    fn parse_object_type_definition(
        &mut self,
        start: XidlSourceSpan,
        description: Option<ast::StringValue>,
    ) -> Result<ast::ObjectTypeDefinition, ()> {
        self.expect_keyword("type")?;
        let name = self.expect_declaration_name("type")?;
        let open = self.expect(&XidlTokenKind::CurlyBraceOpen)?;
        self.push_delimiter(open.span, DelimiterContext::ObjectTypeDefinition);

        let mut fields = Vec::new();
        while !self.peek_is(&XidlTokenKind::CurlyBraceClose) {
            if self.peek_is(&XidlTokenKind::Comma) {
                let result = self.unexpected(&["a field name", "}"]);
                if let Some(error) = self.errors.last_mut() {
                    error.add_help("Fields are separated by line breaks, not commas");
                }
                return result;
            }
            if self.peek_is_end() {
                return self.unexpected(&["a field name", "}"]);
            }
            fields.push(self.parse_field_definition()?);
        }
        self.expect_closing(&XidlTokenKind::CurlyBraceClose)?;

        Ok(ast::ObjectTypeDefinition {
            span: self.make_span(&start),
            description,
            name,
            fields,
        })
    }

    fn parse_field_definition(&mut self) -> Result<ast::FieldDefinition, ()> {
        let description = self.parse_description()?;
        let name = self.expect_ast_name("a field name")?;
        let start = description
            .as_ref()
            .map(|d| d.span.clone())
            .unwrap_or_else(|| name.span.clone());

        let optional_marker = if self.peek_is(&XidlTokenKind::Question) {
            Some(self.advance()?.span)
        } else {
            None
        };

        if !self.peek_is(&XidlTokenKind::Colon) {
            let expected: &[&str] = if optional_marker.is_some() { &[":"] } else { &[":", "?"] };
            return self.unexpected(expected);
        }
        self.advance()?;
        let type_ref = self.parse_type_ref()?;

        let default_value = if self.peek_is(&XidlTokenKind::Equals) {
            self.advance()?;
            Some(self.parse_literal()?)
        } else {
            None
        };

        let annotations = self.parse_annotations()?;

        Ok(ast::FieldDefinition {
            span: self.make_span(&start),
            description,
            name,
            optional_marker,
            type_ref,
            default_value,
            annotations,
        })
    }

    fn parse_enum_type_definition(
        &mut self,
        start: XidlSourceSpan,
        description: Option<ast::StringValue>,
    ) -> Result<ast::EnumTypeDefinition, ()> {
        self.expect_keyword("enum")?;
        let name = self.expect_declaration_name("enum")?;
        let open = self.expect(&XidlTokenKind::CurlyBraceOpen)?;
        self.push_delimiter(open.span, DelimiterContext::EnumDefinition);

        let mut values = Vec::new();
        while !self.peek_is(&XidlTokenKind::CurlyBraceClose) {
            if self.peek_is_end() {
                return self.unexpected(&["an enum value", "}"]);
            }
            values.push(self.parse_enum_value_definition()?);
        }
        self.expect_closing(&XidlTokenKind::CurlyBraceClose)?;

        Ok(ast::EnumTypeDefinition {
            span: self.make_span(&start),
            description,
            name,
            values,
        })
    }

    /// Parses `Symbol = 1 "Display name"`.
    fn parse_enum_value_definition(&mut self) -> Result<ast::EnumValueDefinition, ()> {
        let boolean_span = match self.token_stream.peek() {
            Some(XidlToken {
                kind: kind @ (XidlTokenKind::True | XidlTokenKind::False),
                span,
                ..
            }) => Some((Self::token_kind_display(kind), span.clone())),
            _ => None,
        };
        if let Some((name, span)) = boolean_span {
            self.record_error(XidlParseError::new(
                format!("`{name}` is a boolean literal and cannot be an enum value"),
                span,
                XidlParseErrorKind::ReservedName {
                    name,
                    context: ReservedNameContext::EnumValue,
                },
            ));
            return Err(());
        }

        let name = self.expect_ast_name("an enum value")?;
        self.expect(&XidlTokenKind::Equals)?;

        if !self.peek_is(&XidlTokenKind::IntValue(Default::default())) {
            return self.unexpected(&["an integer discriminant"]);
        }
        let token = self.advance()?;
        let discriminant = match token.kind {
            XidlTokenKind::IntValue(raw) => ast::IntValue {
                span: token.span,
                raw: raw.into_owned(),
            },
            _ => return self.unexpected(&["an integer discriminant"]),
        };
        if discriminant.as_i64().is_none() {
            self.record_error(XidlParseError::new(
                format!(
                    "enum discriminant `{}` does not fit in a 64-bit signed integer",
                    discriminant.raw,
                ),
                discriminant.span.clone(),
                XidlParseErrorKind::InvalidValue(ValueParsingError::Int(discriminant.raw.clone())),
            ));
            return Err(());
        }

        let display_name = self.parse_string_literal("a display name string")?;

        Ok(ast::EnumValueDefinition {
            span: self.make_span(&name.span),
            name,
            discriminant,
            display_name,
        })
    }

    fn parse_interface_definition(
        &mut self,
        start: XidlSourceSpan,
        description: Option<ast::StringValue>,
    ) -> Result<ast::InterfaceDefinition, ()> {
        let keyword_span = self.expect_keyword("interface")?;
        if let Some(first_span) = self.interface_keyword_span.clone() {
            let mut error = XidlParseError::new(
                "a document may declare only one `interface`",
                keyword_span,
                XidlParseErrorKind::DuplicateInterface,
            );
            error.add_note_with_span("first `interface` declared here", first_span);
            error.add_help("Merge the operations into one block, or group them in a `role`");
            self.record_error(error);
            return Err(());
        }
        self.interface_keyword_span = Some(keyword_span.clone());

        let operations = self.parse_operation_block(DelimiterContext::InterfaceDefinition)?;
        Ok(ast::InterfaceDefinition {
            span: self.make_span(&start),
            description,
            keyword_span,
            operations,
        })
    }

    fn parse_role_definition(
        &mut self,
        start: XidlSourceSpan,
        description: Option<ast::StringValue>,
    ) -> Result<ast::RoleDefinition, ()> {
        self.expect_keyword("role")?;
        let name = self.expect_declaration_name("role")?;
        let operations = self.parse_operation_block(DelimiterContext::RoleDefinition)?;
        Ok(ast::RoleDefinition {
            span: self.make_span(&start),
            description,
            name,
            operations,
        })
    }

    /// Parses `{ operation* }`.
    fn parse_operation_block(
        &mut self,
        context: DelimiterContext,
    ) -> Result<Vec<ast::OperationDefinition>, ()> {
        let open = self.expect(&XidlTokenKind::CurlyBraceOpen)?;
        self.push_delimiter(open.span, context);

        let mut operations = Vec::new();
        while !self.peek_is(&XidlTokenKind::CurlyBraceClose) {
            if self.peek_is_end() {
                return self.unexpected(&["an operation name", "}"]);
            }
            operations.push(self.parse_operation_definition()?);
        }
        self.expect_closing(&XidlTokenKind::CurlyBraceClose)?;
        Ok(operations)
    }

    /// Parses `name(params): ret` (function) or `name{param}: ret` (unary).
    fn parse_operation_definition(&mut self) -> Result<ast::OperationDefinition, ()> {
        let description = self.parse_description()?;

        let kind = if self.peek_nth_is(1, &XidlTokenKind::ParenOpen) {
            Some(ast::OperationKind::Function)
        } else if self.peek_nth_is(1, &XidlTokenKind::CurlyBraceOpen) {
            Some(ast::OperationKind::Unary)
        } else {
            None
        };

        let name = self.expect_ast_name("an operation name")?;
        let start = description
            .as_ref()
            .map(|d| d.span.clone())
            .unwrap_or_else(|| name.span.clone());

        let parameters = match kind {
            Some(ast::OperationKind::Function) => self.parse_function_parameters()?,
            Some(ast::OperationKind::Unary) => vec![self.parse_unary_parameter()?],
            None => return self.unexpected(&["(", "{"]),
        };

        self.expect(&XidlTokenKind::Colon)?;
        let return_type = if self.peek_is_keyword(reserved_names::VOID_KEYWORD) {
            ast::ReturnType::Void(self.advance()?.span)
        } else {
            ast::ReturnType::Type(self.parse_type_ref()?)
        };

        Ok(ast::OperationDefinition {
            span: self.make_span(&start),
            description,
            name,
            kind: kind.unwrap_or(ast::OperationKind::Function),
            parameters,
            return_type,
        })
    }

    fn parse_function_parameters(&mut self) -> Result<Vec<ast::ParameterDefinition>, ()> {
        let open = self.expect(&XidlTokenKind::ParenOpen)?;
        self.push_delimiter(open.span, DelimiterContext::FunctionParameters);

        let mut parameters = Vec::new();
        if !self.peek_is(&XidlTokenKind::ParenClose) {
            loop {
                parameters.push(self.parse_parameter_definition()?);
                if self.peek_is(&XidlTokenKind::Comma) {
                    self.advance()?;
                } else {
                    break;
                }
            }
        }
        if !self.peek_is(&XidlTokenKind::ParenClose) {
            return self.unexpected(&[")", ","]);
        }
        self.expect_closing(&XidlTokenKind::ParenClose)?;
        Ok(parameters)
    }

    fn parse_unary_parameter(&mut self) -> Result<ast::ParameterDefinition, ()> {
        let open = self.expect(&XidlTokenKind::CurlyBraceOpen)?;
        self.push_delimiter(open.span.clone(), DelimiterContext::UnaryParameter);

        if self.peek_is(&XidlTokenKind::CurlyBraceClose) {
            let span = self.advance()?.span;
            let mut error = XidlParseError::new(
                "a unary operation must declare exactly one parameter",
                open.span.to(&span),
                XidlParseErrorKind::InvalidSyntax,
            );
            error.add_help("Use `(...)` for an operation without parameters");
            self.record_error(error);
            return Err(());
        }

        let parameter = self.parse_parameter_definition()?;
        if self.peek_is(&XidlTokenKind::Comma) {
            let span = self.advance()?.span;
            let mut error = XidlParseError::new(
                "a unary operation must declare exactly one parameter",
                span,
                XidlParseErrorKind::InvalidSyntax,
            );
            error.add_help("Use `(...)` for an operation with several parameters");
            self.record_error(error);
            return Err(());
        }
        self.expect_closing(&XidlTokenKind::CurlyBraceClose)?;
        Ok(parameter)
    }

    fn parse_parameter_definition(&mut self) -> Result<ast::ParameterDefinition, ()> {
        let name = self.expect_ast_name("a parameter name")?;
        self.expect(&XidlTokenKind::Colon)?;
        let type_ref = self.parse_type_ref()?;
        Ok(ast::ParameterDefinition {
            span: self.make_span(&name.span),
            name,
            type_ref,
        })
    }
}

/// Renders an expected-token list for a message: "`:`", or "one of `:`,
/// `?`". Descriptive entries (containing a space) are not quoted.
fn describe_expected(expected: &[String]) -> String {
    let quoted: Vec<String> = expected
        .iter()
        .map(|e| {
            if e.contains(' ') {
                e.clone()
            } else {
                format!("`{e}`")
            }
        })
        .collect();
    match quoted.as_slice() {
        [single] => single.clone(),
        _ => format!("one of {}", quoted.join(", ")),
    }
}

/// Suggests a declaration keyword for names commonly used for the same
/// purpose in other schema languages.
fn suggest_declaration_keyword(name: &str) -> Option<&'static str> {
    match name {
        "struct" | "message" | "class" | "record" | "object" => Some("type"),
        "enumeration" => Some("enum"),
        "service" | "api" => Some("interface"),
        "typedef" | "alias" => Some("scalar"),
        _ => None,
    }
}

use crate::XidlErrorNotes;
use crate::XidlStringParsingError;
use std::borrow::Cow;
use std::num::ParseFloatError;
use std::num::ParseIntError;

/// The kind of an xidl token.
///
/// Literal values (`IntValue`, `FloatValue`, `StringValue`,
/// `BlockStringValue`) store only the raw source text. Interpreting a numeric
/// literal against a concrete width is left to the validator, which knows the
/// declared type of the slot the literal lands in.
///
/// Keywords (`type`, `enum`, `scalar`, `role`, `interface`, `namespace`,
/// `void`) are contextual and are lexed as plain `Name`s. Only `true` and
/// `false` get dedicated kinds since they are always literals.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (e.g.
/// `IntValue("-123")`), not as separate minus and number tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum XidlTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `@`
    At,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `?`
    Question,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// An identifier matching `[_A-Za-z][_0-9A-Za-z]*`.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, including optional negative sign
    /// (e.g. `"-123"`, `"0"`).
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal, including optional negative sign
    /// (e.g. `"-1.23e-4"`, `"0.5"`).
    FloatValue(Cow<'src, str>),

    /// Raw source text of a single-line string literal, including quotes.
    ///
    /// Use `parse_string_value()` to process escape sequences.
    StringValue(Cow<'src, str>),

    /// Raw source text of a block string literal, including the triple
    /// quotes.
    BlockStringValue(Cow<'src, str>),

    // =========================================================================
    // Booleans
    // =========================================================================
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,

    // =========================================================================
    // End of input
    // =========================================================================
    /// End of input. The associated `XidlToken` may carry trailing trivia.
    Eof,

    // =========================================================================
    // Lexer error
    // =========================================================================
    /// A lexer error. The parser reports the first one it encounters.
    Error {
        /// A human-readable error message.
        message: String,
        /// Optional notes providing additional context or suggestions.
        error_notes: XidlErrorNotes,
    },
}

impl<'src> XidlTokenKind<'src> {
    /// Create a `Name` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        XidlTokenKind::Name(Cow::Borrowed(s))
    }

    #[inline]
    pub fn int_value_borrowed(s: &'src str) -> Self {
        XidlTokenKind::IntValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn float_value_borrowed(s: &'src str) -> Self {
        XidlTokenKind::FloatValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn string_value_borrowed(s: &'src str) -> Self {
        XidlTokenKind::StringValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn block_string_value_borrowed(s: &'src str) -> Self {
        XidlTokenKind::BlockStringValue(Cow::Borrowed(s))
    }

    /// Create an `Error` token.
    #[inline]
    pub fn error(message: impl Into<String>, error_notes: XidlErrorNotes) -> Self {
        XidlTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            XidlTokenKind::At => Some("@"),
            XidlTokenKind::Colon => Some(":"),
            XidlTokenKind::Comma => Some(","),
            XidlTokenKind::CurlyBraceClose => Some("}"),
            XidlTokenKind::CurlyBraceOpen => Some("{"),
            XidlTokenKind::Equals => Some("="),
            XidlTokenKind::ParenClose => Some(")"),
            XidlTokenKind::ParenOpen => Some("("),
            XidlTokenKind::Question => Some("?"),
            XidlTokenKind::SquareBracketClose => Some("]"),
            XidlTokenKind::SquareBracketOpen => Some("["),

            XidlTokenKind::Name(_)
            | XidlTokenKind::IntValue(_)
            | XidlTokenKind::FloatValue(_)
            | XidlTokenKind::StringValue(_)
            | XidlTokenKind::BlockStringValue(_)
            | XidlTokenKind::True
            | XidlTokenKind::False
            | XidlTokenKind::Eof
            | XidlTokenKind::Error { .. } => None,
        }
    }

    /// Returns `true` if this token is a literal that may appear as a default
    /// value or annotation argument (numbers, single-line strings, booleans).
    ///
    /// Enum symbols are `Name`s and are not included here.
    pub fn is_value(&self) -> bool {
        match self {
            XidlTokenKind::IntValue(_)
            | XidlTokenKind::FloatValue(_)
            | XidlTokenKind::StringValue(_)
            | XidlTokenKind::True
            | XidlTokenKind::False => true,

            XidlTokenKind::At
            | XidlTokenKind::Colon
            | XidlTokenKind::Comma
            | XidlTokenKind::CurlyBraceClose
            | XidlTokenKind::CurlyBraceOpen
            | XidlTokenKind::Equals
            | XidlTokenKind::ParenClose
            | XidlTokenKind::ParenOpen
            | XidlTokenKind::Question
            | XidlTokenKind::SquareBracketClose
            | XidlTokenKind::SquareBracketOpen
            | XidlTokenKind::Name(_)
            | XidlTokenKind::BlockStringValue(_)
            | XidlTokenKind::Eof
            | XidlTokenKind::Error { .. } => false,
        }
    }

    /// Returns `true` if this token represents a lexer error.
    pub fn is_error(&self) -> bool {
        matches!(self, XidlTokenKind::Error { .. })
    }

    /// Parse an `IntValue`'s raw text to `i64`.
    ///
    /// Returns `None` if this is not an `IntValue`, or `Some(Err(...))` if
    /// the literal does not fit.
    pub fn parse_int_value(&self) -> Option<Result<i64, ParseIntError>> {
        match self {
            XidlTokenKind::IntValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Parse a `FloatValue`'s raw text to `f64`.
    pub fn parse_float_value(&self) -> Option<Result<f64, ParseFloatError>> {
        match self {
            XidlTokenKind::FloatValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Cook a `StringValue` or `BlockStringValue` into its content.
    ///
    /// - Single-line strings (`"..."`) have `\n`, `\r`, `\t`, `\\`, `\"`,
    ///   `\/`, `\b`, `\f`, `\uXXXX` and `\u{X...}` unescaped.
    /// - Block strings (`"""..."""`) are de-indented and only `\"""` is
    ///   unescaped.
    ///
    /// Returns `None` for any other token kind.
    pub fn parse_string_value(&self) -> Option<Result<String, XidlStringParsingError>> {
        match self {
            XidlTokenKind::StringValue(raw) => Some(parse_single_line_string(raw)),
            XidlTokenKind::BlockStringValue(raw) => Some(parse_block_string(raw)),
            _ => None,
        }
    }
}

fn parse_single_line_string(raw: &str) -> Result<String, XidlStringParsingError> {
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return Err(XidlStringParsingError::UnterminatedString);
    }
    let content = &raw[1..raw.len() - 1];

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => result.push(parse_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(XidlStringParsingError::InvalidEscapeSequence(format!(
                    "\\{other}"
                )));
            }
            None => {
                return Err(XidlStringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            }
        }
    }

    Ok(result)
}

/// Parse a Unicode escape sequence after seeing `\u`.
fn parse_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars>,
) -> Result<char, XidlStringParsingError> {
    let hex = if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() && hex.len() < 6 => hex.push(c),
                Some(c) => {
                    return Err(XidlStringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}{c}"
                    )));
                }
                None => {
                    return Err(XidlStringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}"
                    )));
                }
            }
        }
        if hex.is_empty() {
            return Err(XidlStringParsingError::InvalidUnicodeEscape(
                "\\u{}".to_string(),
            ));
        }
        hex
    } else {
        let mut hex = String::with_capacity(4);
        for _ in 0..4 {
            match chars.next() {
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(XidlStringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{hex}{c}"
                    )));
                }
                None => {
                    return Err(XidlStringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{hex}"
                    )));
                }
            }
        }
        hex
    };

    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| XidlStringParsingError::InvalidUnicodeEscape(format!("\\u{{{hex}}}")))
}

fn parse_block_string(raw: &str) -> Result<String, XidlStringParsingError> {
    if raw.len() < 6 || !raw.starts_with("\"\"\"") || !raw.ends_with("\"\"\"") {
        return Err(XidlStringParsingError::UnterminatedString);
    }
    let content = raw[3..raw.len() - 3].replace("\\\"\"\"", "\"\"\"");
    let lines: Vec<&str> = content.lines().collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let mut result_lines: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line
            } else {
                strip_indent(line, common_indent)
            }
        })
        .collect();

    while result_lines.first().is_some_and(|l| l.trim().is_empty()) {
        result_lines.remove(0);
    }
    while result_lines.last().is_some_and(|l| l.trim().is_empty()) {
        result_lines.pop();
    }

    Ok(result_lines.join("\n"))
}

/// Removes up to `width` leading spaces/tabs from `line`.
fn strip_indent(line: &str, width: usize) -> &str {
    let indent = line
        .bytes()
        .take(width)
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();
    &line[indent..]
}

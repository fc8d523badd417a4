//! A [`XidlTokenSource`](crate::token_source::XidlTokenSource) that lexes
//! from a `&str` input.
//!
//! This lexer is zero-copy: token values borrow directly from the source
//! string using `Cow::Borrowed`.
//!
//! # Features
//!
//! - **Dual column tracking**: Reports both UTF-8 character positions (for
//!   display) and UTF-16 code unit positions (for LSP compatibility)
//! - **Comment preservation**: `//` and `#` line comments are captured as
//!   trivia on the following token
//! - **Error tokens**: Invalid input emits `Error` tokens rather than
//!   aborting, so the iterator always terminates with `Eof`
//!
//! # Usage
//!
//! ```rust
//! use xidl_parser::token_source::StrXidlTokenSource;
//!
//! let lexer = StrXidlTokenSource::new("type Foo { id: u64 }");
//! for token in lexer {
//!     println!("{:?}", token.kind);
//! }
//! ```

use crate::smallvec;
use crate::token::XidlToken;
use crate::token::XidlTokenKind;
use crate::token::XidlTriviaToken;
use crate::token::XidlTriviaTokenVec;
use crate::XidlErrorNote;
use crate::XidlErrorNotes;
use crate::XidlSourceSpan;
use crate::SourcePosition;
use std::borrow::Cow;

/// The escape sequences accepted inside single-line string literals.
const VALID_ESCAPES_HELP: &str =
    "Valid escapes are `\\\"`, `\\\\`, `\\/`, `\\b`, `\\f`, `\\n`, `\\r`, `\\t`, \
     `\\uXXXX` and `\\u{X...}`";

/// A lexer over a `&str` producing [`XidlToken`]s.
///
/// See module documentation for details.
pub struct StrXidlTokenSource<'src> {
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current UTF-8 character column (0-based).
    curr_col_utf8: usize,

    /// Current UTF-16 code unit column (0-based).
    curr_col_utf16: usize,

    /// Whether the previous character was `\r`, so that `\r\n` counts as a
    /// single line break.
    last_char_was_cr: bool,

    /// Comments accumulated before the next token.
    pending_trivia: XidlTriviaTokenVec<'src>,

    /// Whether the EOF token has been emitted.
    finished: bool,
}

impl<'src> StrXidlTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            pending_trivia: smallvec![],
            finished: false,
        }
    }

    /// Returns the full source text this lexer was created over.
    pub fn source(&self) -> &'src str {
        self.source
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            Some(self.curr_col_utf16),
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peeks at the nth character ahead without consuming.
    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// Handles `\n`, `\r` and `\r\n` line breaks, and advances the UTF-8 and
    /// UTF-16 columns by the character's width in each encoding.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Advances over `text`, which must be the next bytes of the input and
    /// must not contain a line break.
    fn advance_within_line(&mut self, text: &str) {
        for ch in text.chars() {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
        }
        self.curr_byte_offset += text.len();
        if !text.is_empty() {
            self.last_char_was_cr = false;
        }
    }

    /// Consumes characters while `pred` holds.
    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    fn make_span(&self, start: SourcePosition) -> XidlSourceSpan {
        XidlSourceSpan::new(start, self.curr_position())
    }

    /// Creates a token with the accumulated trivia.
    fn make_token(&mut self, kind: XidlTokenKind<'src>, span: XidlSourceSpan) -> XidlToken<'src> {
        XidlToken {
            kind,
            preceding_trivia: std::mem::take(&mut self.pending_trivia),
            span,
        }
    }

    fn make_error_token(
        &mut self,
        start: SourcePosition,
        message: impl Into<String>,
        error_notes: XidlErrorNotes,
    ) -> XidlToken<'src> {
        let span = self.make_span(start);
        self.make_token(XidlTokenKind::error(message, error_notes), span)
    }

    /// Consumes a single-character punctuator.
    fn lex_punctuator(&mut self, start: SourcePosition, kind: XidlTokenKind<'src>) -> XidlToken<'src> {
        self.consume();
        let span = self.make_span(start);
        self.make_token(kind, span)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> XidlToken<'src> {
        loop {
            self.skip_whitespace();
            let start = self.curr_position();

            return match self.peek_char() {
                None => {
                    let span = self.make_span(start);
                    self.make_token(XidlTokenKind::Eof, span)
                }

                Some('#') => {
                    self.lex_comment(start, 1);
                    continue;
                }
                Some('/') if self.peek_char_nth(1) == Some('/') => {
                    self.lex_comment(start, 2);
                    continue;
                }

                Some('@') => self.lex_punctuator(start, XidlTokenKind::At),
                Some(':') => self.lex_punctuator(start, XidlTokenKind::Colon),
                Some(',') => self.lex_punctuator(start, XidlTokenKind::Comma),
                Some('}') => self.lex_punctuator(start, XidlTokenKind::CurlyBraceClose),
                Some('{') => self.lex_punctuator(start, XidlTokenKind::CurlyBraceOpen),
                Some('=') => self.lex_punctuator(start, XidlTokenKind::Equals),
                Some(')') => self.lex_punctuator(start, XidlTokenKind::ParenClose),
                Some('(') => self.lex_punctuator(start, XidlTokenKind::ParenOpen),
                Some('?') => self.lex_punctuator(start, XidlTokenKind::Question),
                Some(']') => self.lex_punctuator(start, XidlTokenKind::SquareBracketClose),
                Some('[') => self.lex_punctuator(start, XidlTokenKind::SquareBracketOpen),

                Some('"') => self.lex_string(start),

                Some(c) if is_name_start(c) => self.lex_name(start),

                Some(c) if c == '-' || c.is_ascii_digit() => self.lex_number(start),

                Some(_) => self.lex_invalid_character(start),
            };
        }
    }

    /// Skips spaces, tabs, line terminators and the BOM.
    fn skip_whitespace(&mut self) {
        self.consume_while(|ch| matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{FEFF}'));
    }

    // =========================================================================
    // Comment lexing
    // =========================================================================

    /// Lexes a line comment whose marker is `marker_len` bytes long and adds
    /// it to pending trivia.
    fn lex_comment(&mut self, start: SourcePosition, marker_len: usize) {
        let rest = self.remaining();
        let line_len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let line = &rest[..line_len];
        self.advance_within_line(line);

        let span = self.make_span(start);
        self.pending_trivia.push(XidlTriviaToken::Comment {
            value: Cow::Borrowed(&line[marker_len..]),
            span,
        });
    }

    // =========================================================================
    // Name lexing
    // =========================================================================

    /// Lexes a name. `true` and `false` are emitted as distinct token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> XidlToken<'src> {
        let name_start = self.curr_byte_offset;
        self.consume();
        self.consume_while(is_name_continue);

        let name = &self.source[name_start..self.curr_byte_offset];
        let span = self.make_span(start);
        let kind = match name {
            "true" => XidlTokenKind::True,
            "false" => XidlTokenKind::False,
            _ => XidlTokenKind::name_borrowed(name),
        };
        self.make_token(kind, span)
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal:
    /// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE][+-]?[0-9]+)?`
    fn lex_number(&mut self, start: SourcePosition) -> XidlToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut has_fraction = false;
        let mut has_exponent = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                        Some("Remove the leading `0`"),
                    );
                }
            }
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_while(|ch| ch.is_ascii_digit());
            }
            _ => {
                return self.make_error_token(
                    start,
                    "Unexpected `-`",
                    smallvec![XidlErrorNote::help(
                        "A `-` must be directly followed by the digits of a number"
                    )],
                );
            }
        }

        if self.peek_char() == Some('.') {
            if !self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: a decimal point must be followed by at least one digit",
                    None,
                );
            }
            has_fraction = true;
            self.consume();
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e') | Some('E')) {
            has_exponent = true;
            self.consume();
            if matches!(self.peek_char(), Some('+') | Some('-')) {
                self.consume();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                    None,
                );
            }
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        match self.peek_char() {
            Some('.') if has_fraction || has_exponent => {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: multiple decimal points",
                    None,
                );
            }
            Some(ch) if is_name_start(ch) => {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: a number cannot be directly followed by a name",
                    Some("Separate the number and the name with whitespace"),
                );
            }
            _ => (),
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let span = self.make_span(start);
        let kind = if has_fraction || has_exponent {
            XidlTokenKind::float_value_borrowed(num_text)
        } else {
            XidlTokenKind::int_value_borrowed(num_text)
        };
        self.make_token(kind, span)
    }

    /// Creates an error token for an invalid number, swallowing the rest of
    /// the number-like run so lexing resumes after it.
    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
        help: Option<&str>,
    ) -> XidlToken<'src> {
        self.consume_while(|ch| {
            ch.is_ascii_digit() || is_name_continue(ch) || matches!(ch, '.' | '+' | '-')
        });

        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        let mut error_notes = XidlErrorNotes::new();
        if let Some(help) = help {
            error_notes.push(XidlErrorNote::help(help));
        }
        self.make_error_token(start, format!("{message}: `{invalid_text}`"), error_notes)
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a string literal (single-line or block string).
    fn lex_string(&mut self, start: SourcePosition) -> XidlToken<'src> {
        let str_start = self.curr_byte_offset;
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, str_start);
        }

        self.consume();
        let mut invalid_escape: Option<(String, XidlSourceSpan)> = None;

        loop {
            match self.peek_char() {
                None => {
                    return self.make_error_token(
                        start.clone(),
                        "Unterminated string literal",
                        smallvec![
                            XidlErrorNote::general_with_span(
                                "String started here",
                                XidlSourceSpan::empty_at(start),
                            ),
                            XidlErrorNote::help("Add closing `\"`"),
                        ],
                    );
                }
                Some('\n') | Some('\r') => {
                    self.consume();
                    if self.last_char_was_cr && self.peek_char() == Some('\n') {
                        self.consume();
                    }
                    return self.make_error_token(
                        start,
                        "Unterminated string literal",
                        smallvec![
                            XidlErrorNote::general(
                                "Single-line strings cannot contain unescaped newlines"
                            ),
                            XidlErrorNote::help(
                                "Use a block string (triple quotes) for multi-line strings, \
                                 or escape the newline with `\\n`"
                            ),
                        ],
                    );
                }
                Some('"') => {
                    self.consume();
                    break;
                }
                Some('\\') => {
                    let escape_start = self.curr_position();
                    if let Err(bad) = self.lex_escape_sequence()
                        && invalid_escape.is_none()
                    {
                        invalid_escape = Some((bad, self.make_span(escape_start)));
                    }
                }
                Some(_) => {
                    self.consume();
                }
            }
        }

        if let Some((escape, escape_span)) = invalid_escape {
            return self.make_error_token(
                start,
                format!("Invalid escape sequence `{escape}` in string literal"),
                smallvec![
                    XidlErrorNote::general_with_span("Invalid escape here", escape_span),
                    XidlErrorNote::help(VALID_ESCAPES_HELP),
                ],
            );
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(XidlTokenKind::string_value_borrowed(string_text), span)
    }

    /// Consumes one escape sequence starting at a `\`.
    ///
    /// Never consumes a line break or the closing quote, so the caller still
    /// sees where the string ends. Returns the offending text on error.
    fn lex_escape_sequence(&mut self) -> Result<(), String> {
        let escape_start = self.curr_byte_offset;
        self.consume();

        match self.peek_char() {
            Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {
                self.consume();
                Ok(())
            }
            Some('u') => {
                self.consume();
                let valid = if self.peek_char() == Some('{') {
                    self.consume();
                    let digits_start = self.curr_byte_offset;
                    self.consume_while(|ch| ch.is_ascii_hexdigit());
                    let digits = &self.source[digits_start..self.curr_byte_offset];
                    let closed = self.peek_char() == Some('}');
                    if closed {
                        self.consume();
                    }
                    closed
                        && !digits.is_empty()
                        && digits.len() <= 6
                        && u32::from_str_radix(digits, 16)
                            .ok()
                            .and_then(char::from_u32)
                            .is_some()
                } else {
                    let mut count = 0;
                    while count < 4 && self.peek_char().is_some_and(|ch| ch.is_ascii_hexdigit()) {
                        self.consume();
                        count += 1;
                    }
                    count == 4
                        && u32::from_str_radix(
                            &self.source[self.curr_byte_offset - 4..self.curr_byte_offset],
                            16,
                        )
                        .ok()
                        .and_then(char::from_u32)
                        .is_some()
                };
                if valid {
                    Ok(())
                } else {
                    Err(self.source[escape_start..self.curr_byte_offset].to_string())
                }
            }
            Some('\n' | '\r') | None => Err("\\".to_string()),
            Some(other) => {
                self.consume();
                Err(format!("\\{other}"))
            }
        }
    }

    /// Lexes a block string literal. Only `\"""` is recognised as an escape.
    fn lex_block_string(&mut self, start: SourcePosition, str_start: usize) -> XidlToken<'src> {
        self.consume();
        self.consume();
        self.consume();

        loop {
            match self.peek_char() {
                None => {
                    return self.make_error_token(
                        start.clone(),
                        "Unterminated block string",
                        smallvec![
                            XidlErrorNote::general_with_span(
                                "Block string started here",
                                XidlSourceSpan::empty_at(start),
                            ),
                            XidlErrorNote::help("Add closing `\"\"\"`"),
                        ],
                    );
                }
                Some('\\') if self.remaining().starts_with("\\\"\"\"") => {
                    for _ in 0..4 {
                        self.consume();
                    }
                }
                Some('"') if self.remaining().starts_with("\"\"\"") => {
                    self.consume();
                    self.consume();
                    self.consume();
                    break;
                }
                Some(_) => {
                    self.consume();
                }
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(XidlTokenKind::block_string_value_borrowed(string_text), span)
    }

    // =========================================================================
    // Invalid character handling
    // =========================================================================

    fn lex_invalid_character(&mut self, start: SourcePosition) -> XidlToken<'src> {
        let Some(ch) = self.consume() else {
            let span = self.make_span(start);
            return self.make_token(XidlTokenKind::Eof, span);
        };

        let mut error_notes = XidlErrorNotes::new();
        match ch {
            '/' => error_notes.push(XidlErrorNote::help("Line comments start with `//`")),
            '!' => error_notes.push(XidlErrorNote::help(
                "Fields are required by default; mark optional ones with `?`",
            )),
            _ => (),
        }
        self.make_error_token(
            start,
            format!("Unexpected character {}", describe_char(ch)),
            error_notes,
        )
    }
}

impl<'src> Iterator for StrXidlTokenSource<'src> {
    type Item = XidlToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, XidlTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

/// Returns `true` if `ch` can start a name.
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue a name.
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Returns a human-readable description of a character for error messages.
///
/// Invisible characters also get their code point and, when known, their
/// Unicode name.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || unicode_char_name(ch).is_some() {
        match unicode_char_name(ch) {
            Some(name) => format!("`{}` (U+{:04X}: {})", ch.escape_default(), ch as u32, name),
            None => format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

/// Names of invisible characters that commonly sneak into copy-pasted
/// source text.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0007}' => Some("BELL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{0085}' => Some("NEXT LINE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{00AD}' => Some("SOFT HYPHEN"),
        '\u{2000}'..='\u{200A}' => Some("TYPOGRAPHIC SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{200E}' => Some("LEFT-TO-RIGHT MARK"),
        '\u{200F}' => Some("RIGHT-TO-LEFT MARK"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{202A}' => Some("LEFT-TO-RIGHT EMBEDDING"),
        '\u{202B}' => Some("RIGHT-TO-LEFT EMBEDDING"),
        '\u{202C}' => Some("POP DIRECTIONAL FORMATTING"),
        '\u{202D}' => Some("LEFT-TO-RIGHT OVERRIDE"),
        '\u{202E}' => Some("RIGHT-TO-LEFT OVERRIDE"),
        '\u{202F}' => Some("NARROW NO-BREAK SPACE"),
        '\u{205F}' => Some("MEDIUM MATHEMATICAL SPACE"),
        '\u{2060}' => Some("WORD JOINER"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        '\u{FFFE}' | '\u{FFFF}' => Some("NONCHARACTER"),
        _ => None,
    }
}

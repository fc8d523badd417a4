//! Lexer and recursive-descent parser for xidl, a small interface definition
//! language for describing data types and the operations that exchange them
//! across language boundaries.
//!
//! The crate turns source text into an owned [`ast::Document`]. Name
//! resolution and semantic checks live in the `xidl-core` crate.
//!
//! ```
//! use xidl_parser::XidlParser;
//!
//! let source = r#"
//! namespace "com.example.shop"
//!
//! type Item {
//!     sku: string
//!     quantity?: u32 = 1
//! }
//!
//! interface {
//!     add_item(item: Item): void
//! }
//! "#;
//! let result = XidlParser::new(source).parse_document();
//! assert!(result.is_ok(), "{}", result.format_errors(Some(source)));
//! ```

pub mod ast;
mod byte_span;
mod parse_result;
mod reserved_name_context;
mod reserved_names;
pub mod source_snippet;
mod source_position;
pub mod token;
pub mod token_source;
mod value_parsing_error;
mod xidl_error_note;
mod xidl_error_note_kind;
mod xidl_parse_error;
mod xidl_parse_error_kind;
mod xidl_parser;
mod xidl_source_span;
mod xidl_string_parsing_error;
mod xidl_token_stream;

pub use byte_span::ByteSpan;
pub use parse_result::ParseResult;
pub use reserved_name_context::ReservedNameContext;
pub use reserved_names::BUILTIN_SCALAR_NAMES;
pub use reserved_names::VOID_KEYWORD;
pub use reserved_names::is_reserved_declaration_name;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use value_parsing_error::ValueParsingError;
pub use xidl_error_note::XidlErrorNote;
pub use xidl_error_note::XidlErrorNotes;
pub use xidl_error_note_kind::XidlErrorNoteKind;
pub use xidl_parse_error::XidlParseError;
pub use xidl_parse_error_kind::XidlParseErrorKind;
pub use xidl_parser::XidlParser;
pub use xidl_source_span::XidlSourceSpan;
pub use xidl_string_parsing_error::XidlStringParsingError;
pub use xidl_token_stream::XidlTokenStream;

#[cfg(test)]
mod tests;

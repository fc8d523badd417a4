//! Core token types produced by xidl lexers and consumed by the parser.

mod xidl_token;
mod xidl_token_kind;
mod xidl_trivia_token;

pub use xidl_token::XidlToken;
pub use xidl_token::XidlTriviaTokenVec;
pub use xidl_token_kind::XidlTokenKind;
pub use xidl_trivia_token::XidlTriviaToken;

#[cfg(test)]
mod tests;

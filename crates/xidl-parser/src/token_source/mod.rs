//! Token source trait and the `&str` lexer.

mod str_to_xidl_token_source;
mod xidl_token_source;

pub use str_to_xidl_token_source::StrXidlTokenSource;
pub use xidl_token_source::XidlTokenSource;

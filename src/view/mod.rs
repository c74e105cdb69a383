//! Non-owning byte-string views and the tokenizer built on them
//!
//! ## Features
//!
//! - **StrView**: zero-copy `(pointer, length)` view with total accessors,
//!   saturating slicing, and sentinel-based search results
//! - **Tokenizer**: non-destructive forward and reverse token walks with
//!   delimiter-run collapsing

pub mod str_view;
pub mod token;

pub use str_view::StrView;
pub use token::{
    token_begin, token_end, token_next, token_reverse_begin, token_reverse_end,
    token_reverse_next, ReverseTokens, Tokens,
};

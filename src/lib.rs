//! # strview: Non-Owning Byte-String Views with Two-Way Search
//!
//! This crate provides zero-copy views over byte strings together with the
//! substring-search engine underneath them: a full Two-Way string-matching
//! implementation (Crochemore-Perrin) with critical factorization and a
//! memoized linear-time path, symmetric right-to-left search, fixed-width
//! scanners for 1–4 byte needles, 256-bit byteset class scans, and a
//! non-destructive tokenizer.
//!
//! ## Key Features
//!
//! - **Zero-copy views**: `StrView` borrows externally-owned bytes; the
//!   borrow checker ties every view to its backing storage
//! - **Total accessors**: out-of-range indices saturate or yield the null
//!   octet; no operation panics on user input
//! - **Worst-case linear search**: the memoized Two-Way path never
//!   re-examines a matched prefix, bounding comparisons by O(H + N)
//! - **Short-needle tier**: packed-integer window scanners skip the
//!   factorization cost for the common 1–4 byte needles
//! - **Class scans**: byteset span/cspan plus the four `find_*_of` forms
//! - **Tokenizer**: forward and reverse token walks that collapse
//!   delimiter runs in O(run length)
//! - **No allocation**: the search core works entirely in borrowed memory;
//!   the only scratch state is a 32-byte stack-local byteset
//!
//! ## Quick Start
//!
//! ```rust
//! use strview::{StrView, search};
//!
//! // Zero-copy views over borrowed bytes
//! let v = StrView::from_string("hello world");
//! assert_eq!(v.find(0, StrView::from_string("world")), 6);
//! assert_eq!(v.substr(0, 5), StrView::from_string("hello"));
//! assert_eq!(v.find_first_of(StrView::from_string("aeiou")), 1);
//!
//! // Tokenization without mutating the source
//! let csv = StrView::from_string("a,b,,c");
//! let fields: Vec<_> = csv.tokens(StrView::from_string(",")).collect();
//! assert_eq!(fields.len(), 3);
//!
//! // The raw search engine over byte slices
//! assert_eq!(search::find(b"abracadabra", b"cad"), 4);
//! assert_eq!(search::rfind(b"abracadabra", b"abra"), 7);
//! ```
//!
//! ## Search Result Convention
//!
//! "Not found" is uniformly signaled by returning the haystack length as an
//! offset, so results compose with saturating slicing without an `Option`
//! in the hot path.

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod error;
pub mod search;
pub mod view;

// Re-export core types
pub use error::{Result, ViewError};
pub use search::{crit_factorization, cspan_length, span_length, ByteSet, Factorization};
pub use view::{
    token_begin, token_end, token_next, token_reverse_begin, token_reverse_end,
    token_reverse_next, ReverseTokens, StrView, Tokens,
};

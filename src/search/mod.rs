//! Substring search over raw byte slices
//!
//! This module is the engine underneath [`StrView`](crate::StrView): a
//! length-tiered dispatcher in front of the fixed-width scanners and the
//! Two-Way matcher, plus the byteset class scans.
//!
//! ## Tiers
//!
//! - **1–4 byte needles**: packed-integer window scanners
//!   ([`short_needle`]), which skip the factorization cost entirely
//! - **Longer needles**: critical factorization + Two-Way matching
//!   ([`two_way`]), memoized when the needle has a usable border
//!
//! "Not found" is uniformly the haystack length, so the offset convention
//! composes with view slicing without an `Option` in the hot path.

pub mod byteset;
mod short_needle;
pub mod two_way;

pub use byteset::{cspan_length, span_length, ByteSet};
pub use two_way::{crit_factorization, Factorization};

/// First start offset of `needle` in `haystack`, or `haystack.len()`
///
/// An empty needle, an empty haystack, or a needle longer than the haystack
/// all report "not found".
///
/// # Examples
///
/// ```rust
/// use strview::search::find;
///
/// assert_eq!(find(b"hello world", b"world"), 6);
/// assert_eq!(find(b"hello world", b"xyz"), 11);
/// ```
pub fn find(haystack: &[u8], needle: &[u8]) -> usize {
    if needle.is_empty() || haystack.is_empty() || needle.len() > haystack.len() {
        return haystack.len();
    }
    match needle.len() {
        1 => short_needle::find_byte(haystack, needle[0]),
        2 => short_needle::find_pair(haystack, needle),
        3 => short_needle::find_triple(haystack, needle),
        4 => short_needle::find_quad(haystack, needle),
        _ => two_way::find(haystack, needle),
    }
}

/// Last start offset of `needle` in `haystack`, or `haystack.len()`
///
/// Mirror image of [`find`]: scans right to left and reports the largest
/// matching offset.
pub fn rfind(haystack: &[u8], needle: &[u8]) -> usize {
    if needle.is_empty() || haystack.is_empty() || needle.len() > haystack.len() {
        return haystack.len();
    }
    match needle.len() {
        1 => short_needle::rfind_byte(haystack, needle[0]),
        2 => short_needle::rfind_pair(haystack, needle),
        3 => short_needle::rfind_triple(haystack, needle),
        4 => short_needle::rfind_quad(haystack, needle),
        _ => two_way::rfind(haystack, needle),
    }
}

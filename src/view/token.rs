//! Non-destructive tokenizer over a literal delimiter view
//!
//! The tokenizer walks a source view without mutating it: each call derives
//! the next token from `(src, previous token, delim)` alone, so any number
//! of walks can run over the same bytes concurrently. The delimiter is a
//! literal substring, not a byte set.
//!
//! ## Delimiter runs
//!
//! Back-to-back delimiter copies collapse. Runs are consumed with a cyclic
//! scan that matches the delimiter modulo its own length, which costs O(run
//! length) instead of one full substring search per copy. A run whose
//! length is not a whole number of copies carries a partial copy; the
//! partial stays with the adjacent token rather than forming one of its
//! own:
//!
//! - a partial at the end of a *leading* run belongs to the first token,
//! - a partial inside an *interior* run belongs to the token before it.
//!
//! So splitting `"::a::b:::c::"` on `"::"` yields `["a", "b:", "c"]`: the
//! lone third colon of `":::"` is token content, and the leading and
//! trailing runs vanish.
//!
//! Token boundaries are decided purely by offset arithmetic against the
//! source view; no operation reads a terminator or any byte outside `src`.
//! A token that is not a subview of `src` is treated as ended.

use crate::search;
use crate::view::str_view::StrView;

/// Offset of `sub` inside `src`, or `None` when `sub` is not a subview
fn offset_in(src: StrView<'_>, sub: StrView<'_>) -> Option<usize> {
    let base = src.as_ptr() as usize;
    let p = sub.as_ptr() as usize;
    if p < base || p + sub.len() > base + src.len() {
        return None;
    }
    Some(p - base)
}

/// Length of the cyclic delimiter match at the front of `haystack`
///
/// Counts octets while `haystack[i] == delim[i % delim.len()]`. The count
/// includes any trailing partial copy; callers split it with
/// `stretch % delim.len()`.
fn cyclic_stretch(haystack: &[u8], delim: &[u8]) -> usize {
    debug_assert!(!delim.is_empty());
    let mut i = 0;
    while i < haystack.len() && haystack[i] == delim[i % delim.len()] {
        i += 1;
    }
    i
}

/// Length of the cyclic delimiter match at the back of `haystack`
///
/// The mirror of [`cyclic_stretch`]: matches the delimiter from its last
/// octet leftward.
fn rcyclic_stretch(haystack: &[u8], delim: &[u8]) -> usize {
    debug_assert!(!delim.is_empty());
    let mut i = 0;
    while i < haystack.len()
        && haystack[haystack.len() - 1 - i] == delim[delim.len() - 1 - i % delim.len()]
    {
        i += 1;
    }
    i
}

/// Whole-copy length of the leading delimiter run
///
/// The partial copy, if any, is backed off so it stays with the following
/// token.
fn skip_delimiter_run(haystack: &[u8], delim: &[u8]) -> usize {
    let s = cyclic_stretch(haystack, delim);
    s - s % delim.len()
}

/// Whole-copy length of the trailing delimiter run
fn skip_delimiter_run_rev(haystack: &[u8], delim: &[u8]) -> usize {
    let s = rcyclic_stretch(haystack, delim);
    s - s % delim.len()
}

/// Token starting at the front of `rest`
///
/// The token ends at the next delimiter occurrence, extended by the partial
/// copy at the front of the run that follows it; with no occurrence the
/// whole of `rest` is the token.
fn token_at<'a>(rest: StrView<'a>, delim: StrView<'_>) -> StrView<'a> {
    let k = search::find(rest.as_bytes(), delim.as_bytes());
    if k == rest.len() {
        return rest;
    }
    let s = cyclic_stretch(&rest.as_bytes()[k..], delim.as_bytes());
    rest.prefix(k + s % delim.len())
}

/// Token ending at the back of `rest`
///
/// Mirror of [`token_at`]: the token begins after the last delimiter
/// occurrence, extended leftward by the partial copy at the back of the run
/// before it.
fn rtoken_at<'a>(rest: StrView<'a>, delim: StrView<'_>) -> StrView<'a> {
    let k = search::rfind(rest.as_bytes(), delim.as_bytes());
    if k == rest.len() {
        return rest;
    }
    let run_end = k + delim.len();
    let s = rcyclic_stretch(&rest.as_bytes()[..run_end], delim.as_bytes());
    let start = run_end - s % delim.len();
    rest.substr(start, rest.len() - start)
}

/// First token of `src` separated by `delim`
///
/// Skips the leading delimiter run, then spans to the next occurrence. At
/// the end of input the zero-length view at the end is returned; an empty
/// delimiter yields the whole source.
///
/// # Examples
///
/// ```rust
/// use strview::{token_begin, StrView};
///
/// let src = StrView::from_string("--alpha--beta");
/// let first = token_begin(src, StrView::from_string("--"));
/// assert_eq!(first, "alpha");
/// ```
pub fn token_begin<'a>(src: StrView<'a>, delim: StrView<'_>) -> StrView<'a> {
    if delim.is_empty() {
        return src;
    }
    let rest = src.remove_prefix(skip_delimiter_run(src.as_bytes(), delim.as_bytes()));
    if rest.is_empty() {
        return rest;
    }
    token_at(rest, delim)
}

/// Token following `token` within `src`
///
/// Returns the zero-length view at the source end once `token` ended the
/// input (decided by offsets, never by reading past the token). The
/// delimiter run after `token` is collapsed with the cyclic skip before
/// the next occurrence search.
pub fn token_next<'a>(src: StrView<'a>, token: StrView<'_>, delim: StrView<'_>) -> StrView<'a> {
    let end_sentinel = src.substr(src.len(), 0);
    let off = match offset_in(src, token) {
        Some(off) => off,
        None => return end_sentinel,
    };
    if off + token.len() >= src.len() || delim.is_empty() {
        return end_sentinel;
    }
    let after = src.remove_prefix(off + token.len());
    let rest = after.remove_prefix(skip_delimiter_run(after.as_bytes(), delim.as_bytes()));
    if rest.is_empty() {
        return end_sentinel;
    }
    token_at(rest, delim)
}

/// Whether `token` is the end sentinel of a forward walk over `src`
pub fn token_end(src: StrView<'_>, token: StrView<'_>) -> bool {
    token.is_empty()
        || match offset_in(src, token) {
            Some(off) => off >= src.len(),
            None => true,
        }
}

/// Last token of `src` separated by `delim`
///
/// Mirror of [`token_begin`]: skips the trailing delimiter run and spans
/// back to the previous occurrence. An empty delimiter yields the whole
/// source.
pub fn token_reverse_begin<'a>(src: StrView<'a>, delim: StrView<'_>) -> StrView<'a> {
    if delim.is_empty() {
        return src;
    }
    let rest = src.remove_suffix(skip_delimiter_run_rev(src.as_bytes(), delim.as_bytes()));
    if rest.is_empty() {
        return rest;
    }
    rtoken_at(rest, delim)
}

/// Token preceding `token` within `src`
///
/// Returns the zero-length view at the source base once `token` reached the
/// front of the input.
pub fn token_reverse_next<'a>(
    src: StrView<'a>,
    token: StrView<'_>,
    delim: StrView<'_>,
) -> StrView<'a> {
    let start_sentinel = src.substr(0, 0);
    let off = match offset_in(src, token) {
        Some(off) => off,
        None => return start_sentinel,
    };
    if off == 0 || token.is_empty() || delim.is_empty() {
        return start_sentinel;
    }
    let before = src.prefix(off);
    let rest = before.remove_suffix(skip_delimiter_run_rev(before.as_bytes(), delim.as_bytes()));
    if rest.is_empty() {
        return start_sentinel;
    }
    rtoken_at(rest, delim)
}

/// Whether `token` is the end sentinel of a reverse walk over `src`
pub fn token_reverse_end(src: StrView<'_>, token: StrView<'_>) -> bool {
    token.is_empty()
        && match offset_in(src, token) {
            Some(off) => off == 0,
            None => true,
        }
}

/// Iterator over the tokens of a view, front to back
///
/// Produced by [`StrView::tokens`]. Yields only non-empty tokens; delimiter
/// runs collapse per the module rules.
///
/// # Examples
///
/// ```rust
/// use strview::StrView;
///
/// let src = StrView::from_string("::a::b:::c::");
/// let tokens: Vec<_> = src.tokens(StrView::from_string("::")).collect();
/// assert_eq!(tokens, [
///     StrView::from_string("a"),
///     StrView::from_string("b:"),
///     StrView::from_string("c"),
/// ]);
/// ```
pub struct Tokens<'a> {
    src: StrView<'a>,
    delim: StrView<'a>,
    next: Option<StrView<'a>>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(src: StrView<'a>, delim: StrView<'a>) -> Self {
        let first = token_begin(src, delim);
        Self {
            src,
            delim,
            next: (!token_end(src, first)).then_some(first),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = StrView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let following = token_next(self.src, current, self.delim);
        self.next = (!token_end(self.src, following)).then_some(following);
        Some(current)
    }
}

/// Iterator over the tokens of a view, back to front
///
/// Produced by [`StrView::rtokens`].
pub struct ReverseTokens<'a> {
    src: StrView<'a>,
    delim: StrView<'a>,
    next: Option<StrView<'a>>,
}

impl<'a> ReverseTokens<'a> {
    pub(crate) fn new(src: StrView<'a>, delim: StrView<'a>) -> Self {
        let first = token_reverse_begin(src, delim);
        Self {
            src,
            delim,
            next: (!token_reverse_end(src, first)).then_some(first),
        }
    }
}

impl<'a> Iterator for ReverseTokens<'a> {
    type Item = StrView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let preceding = token_reverse_next(self.src, current, self.delim);
        self.next = (!token_reverse_end(self.src, preceding)).then_some(preceding);
        Some(current)
    }
}

//! Character-offset text utilities.
//!
//! The tracker addresses text by character offsets (Unicode scalar values),
//! while `String` is indexed by bytes. These helpers do the translation so
//! that no caller ever slices in the middle of a multi-byte character.

use std::borrow::Cow;
use std::ops::Range;

/// Number of characters (Unicode scalar values) in `s`.
///
/// # Examples
///
/// ```
/// use input_core::char_len;
///
/// assert_eq!(char_len(""), 0);
/// assert_eq!(char_len("a€b"), 3); // '€' is 3 bytes but one character
/// ```
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Translate a character offset into a byte index into `s`.
///
/// Offsets at or beyond the end map to `s.len()`.
///
/// # Examples
///
/// ```
/// use input_core::byte_index;
///
/// let s = "a€b";
/// assert_eq!(byte_index(s, 0), 0);
/// assert_eq!(byte_index(s, 1), 1); // start of '€'
/// assert_eq!(byte_index(s, 2), 4); // start of 'b'
/// assert_eq!(byte_index(s, 3), 5); // end
/// assert_eq!(byte_index(s, 100), 5);
/// ```
pub fn byte_index(s: &str, offset: usize) -> usize {
    s.char_indices()
        .nth(offset)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Translate a half-open character range into a byte range into `s`.
///
/// `start` is clamped to `end`, so the result is always sliceable.
pub fn byte_range(s: &str, start: usize, end: usize) -> Range<usize> {
    let end_b = byte_index(s, end);
    let start_b = byte_index(s, start.min(end));
    start_b..end_b
}

/// Slice `s` by a half-open character range.
///
/// # Examples
///
/// ```
/// use input_core::char_slice;
///
/// assert_eq!(char_slice("héllo", 1, 4), "éll");
/// assert_eq!(char_slice("héllo", 3, 99), "lo");
/// ```
#[inline]
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    &s[byte_range(s, start, end)]
}

/// Keep at most `max` leading characters of `s`.
#[inline]
pub fn truncate_chars(s: &str, max: usize) -> &str {
    &s[..byte_index(s, max)]
}

/// Filter a string to remove newlines (CR and LF), for single-line inputs.
///
/// Returns a `Cow::Borrowed` if the string contains no newlines (fast path),
/// or a `Cow::Owned` with newlines removed.
///
/// # Examples
///
/// ```
/// use input_core::filter_single_line;
///
/// assert_eq!(filter_single_line("hello"), "hello");
/// assert_eq!(filter_single_line("hello\nworld"), "helloworld");
/// assert_eq!(filter_single_line("a\r\nb"), "ab");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains('\n') && !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\n' && *c != '\r').collect())
}

//! Text selection representation.

use crate::text::{byte_range, char_slice};

/// A text selection as a half-open range of character offsets.
///
/// The range is always normalized such that `start <= end`, whichever way the
/// user dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start character offset of the selection (inclusive).
    pub start: usize,
    /// End character offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range.
    ///
    /// The range is automatically normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// The selection spanned by an optional anchor and the caret.
    ///
    /// Returns `None` when there is no anchor or the anchor has collapsed
    /// onto the caret.
    #[inline]
    pub fn from_anchor(anchor: Option<usize>, caret: usize) -> Option<Self> {
        let anchor = anchor?;
        (anchor != caret).then(|| Self::new(anchor, caret))
    }

    /// Returns `true` if the selection is empty (zero-width).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the selection in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns the selected substring from the given value.
    #[inline]
    pub fn slice<'a>(&self, value: &'a str) -> &'a str {
        char_slice(value, self.start, self.end)
    }

    /// Splice the selected characters out of `value`.
    ///
    /// Returns the offset where the caret lands, i.e. `start`.
    pub(crate) fn remove_from(&self, value: &mut String) -> usize {
        let range = byte_range(value, self.start, self.end);
        value.drain(range);
        self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_range_normalizes() {
        let range = SelectionRange::new(10, 5);
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 10);
    }

    #[test]
    fn from_anchor_drops_collapsed_selection() {
        assert_eq!(SelectionRange::from_anchor(None, 3), None);
        assert_eq!(SelectionRange::from_anchor(Some(3), 3), None);
        assert_eq!(
            SelectionRange::from_anchor(Some(4), 1),
            Some(SelectionRange { start: 1, end: 4 })
        );
    }

    #[test]
    fn selection_range_len_and_empty() {
        assert_eq!(SelectionRange::new(2, 7).len(), 5);
        assert!(SelectionRange::new(3, 3).is_empty());
        assert!(!SelectionRange::new(3, 5).is_empty());
    }

    #[test]
    fn slice_counts_characters_not_bytes() {
        assert_eq!(SelectionRange::new(0, 5).slice("hello world"), "hello");
        assert_eq!(SelectionRange::new(1, 3).slice("a€éz"), "€é");
    }

    #[test]
    fn remove_from_splices_range() {
        let mut value = String::from("h€llo");
        let caret = SelectionRange::new(3, 1).remove_from(&mut value);
        assert_eq!(value, "hlo");
        assert_eq!(caret, 1);
    }
}

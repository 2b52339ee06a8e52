//! Visible-window tracking for scrollable single-line inputs.
//!
//! A [`VisibleWindow`] is the half-open character range `[start, end)` that
//! the control currently shows. Offsets are classified against it as lying
//! left of, inside, or right of the window, and the window is shifted by the
//! minimal amount needed to bring the caret back into view.

use crate::error::{Result, TextBoxError, check_offset};

/// Position of an offset relative to a [`VisibleWindow`].
///
/// `end` itself counts as visible: it is the slot right after the last shown
/// character, where a caret still renders inside the control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OffsetPosition {
    Left,
    Visible,
    Right,
}

/// Half-open range `[start, end)` of character offsets currently in view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VisibleWindow {
    /// First visible character (inclusive).
    pub start: usize,
    /// One past the last visible character (exclusive).
    pub end: usize,
}

impl VisibleWindow {
    /// The window of a freshly constructed control: `[0, 0)`.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Create a window; the bounds are normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Number of characters the window spans.
    #[inline]
    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the visible part of `text`.
    ///
    /// Bounds beyond the end of `text` are cut off rather than panicking.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        crate::text::char_slice(text, self.start, self.end)
    }

    pub(crate) fn validate(&self, len: usize) -> Result<()> {
        if self.start > self.end || self.end > len {
            return Err(TextBoxError::InvalidWindow {
                start: self.start,
                end: self.end,
                len,
            });
        }
        Ok(())
    }

    /// Slide a window that overhangs the end of the text back inside it.
    ///
    /// Width is kept unless the text itself is narrower than the window.
    pub fn fit_within(&self, len: usize) -> Self {
        if self.start <= self.end && self.end <= len {
            return *self;
        }
        let width = self.width().min(len);
        Self {
            start: len - width,
            end: len,
        }
    }

    /// Resize to `min(width, len)` characters, keeping `start` where possible.
    pub fn resized(&self, width: usize, len: usize) -> Self {
        let width = width.min(len);
        let start = self.start.min(len - width);
        Self {
            start,
            end: start + width,
        }
    }
}

/// Classify `offset` against `window` over a text of `len` characters.
///
/// Left is `offset < start` and Right is `offset > end`; everything in
/// between, including `end`, is Visible.
pub(crate) fn classify(offset: usize, window: VisibleWindow, len: usize) -> Result<OffsetPosition> {
    check_offset(offset, len)?;
    window.validate(len)?;
    Ok(position(offset, window))
}

#[inline]
fn position(offset: usize, window: VisibleWindow) -> OffsetPosition {
    if offset < window.start {
        OffsetPosition::Left
    } else if offset > window.end {
        OffsetPosition::Right
    } else {
        OffsetPosition::Visible
    }
}

/// Returns `true` if `offset` is inside `window` (end inclusive).
///
/// # Errors
///
/// [`TextBoxError::InvalidArgument`] if `offset > len`, and
/// [`TextBoxError::InvalidWindow`] if `window` does not fit in `len`.
pub fn is_visible(offset: usize, window: VisibleWindow, len: usize) -> Result<bool> {
    classify(offset, window, len).map(|pos| pos == OffsetPosition::Visible)
}

/// Shift `window` by the minimal amount that makes `caret` visible.
///
/// The window keeps its width whenever `len >= width`. A window overhanging
/// `len` (e.g. after text was deleted) is first slid back inside the text.
///
/// # Examples
///
/// ```
/// use input_core::{VisibleWindow, ensure_visible};
///
/// // "HELLO" shown through a 3-wide window; caret jumps to offset 4.
/// let w = ensure_visible(4, VisibleWindow::new(0, 3), 5).unwrap();
/// assert_eq!(w, VisibleWindow::new(1, 4));
/// ```
pub fn ensure_visible(caret: usize, window: VisibleWindow, len: usize) -> Result<VisibleWindow> {
    check_offset(caret, len)?;
    Ok(reveal(caret, window, len))
}

/// [`ensure_visible`] for a caret already known to be within `[0, len]`.
pub(crate) fn reveal(caret: usize, window: VisibleWindow, len: usize) -> VisibleWindow {
    debug_assert!(caret <= len, "caret {caret} past end {len}");
    let window = window.fit_within(len);
    let width = window.width();

    let shifted = match position(caret, window) {
        OffsetPosition::Visible => return window,
        // A Left caret sits before `start`, so `caret + width < end <= len`.
        OffsetPosition::Left => VisibleWindow {
            start: caret,
            end: caret + width,
        },
        // A Right caret sits past `end`, so `caret > width`.
        OffsetPosition::Right => VisibleWindow {
            start: caret - width,
            end: caret,
        },
    };

    log::trace!(
        target: "input_core.window",
        "caret {caret} out of view: [{}, {}) -> [{}, {})",
        window.start,
        window.end,
        shifted.start,
        shifted.end
    );
    shifted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows(len: usize) -> impl Iterator<Item = VisibleWindow> {
        (0..=len).flat_map(move |start| (start..=len).map(move |end| VisibleWindow { start, end }))
    }

    #[test]
    fn classify_end_is_visible() {
        let w = VisibleWindow::new(2, 4);
        assert_eq!(classify(1, w, 6), Ok(OffsetPosition::Left));
        assert_eq!(classify(2, w, 6), Ok(OffsetPosition::Visible));
        assert_eq!(classify(4, w, 6), Ok(OffsetPosition::Visible));
        assert_eq!(classify(5, w, 6), Ok(OffsetPosition::Right));
    }

    #[test]
    fn classify_partitions_every_offset() {
        for len in 0..=6 {
            for w in windows(len) {
                for offset in 0..=len {
                    let expected = if offset < w.start {
                        OffsetPosition::Left
                    } else if offset > w.end {
                        OffsetPosition::Right
                    } else {
                        OffsetPosition::Visible
                    };
                    assert_eq!(classify(offset, w, len), Ok(expected), "{offset} in {w:?}");
                }
                assert_eq!(classify(w.end, w, len), Ok(OffsetPosition::Visible));
            }
        }
    }

    #[test]
    fn classify_rejects_out_of_range() {
        let w = VisibleWindow::new(0, 3);
        assert_eq!(
            classify(6, w, 5),
            Err(TextBoxError::InvalidArgument { offset: 6, len: 5 })
        );
        assert_eq!(
            classify(1, VisibleWindow::new(2, 7), 5),
            Err(TextBoxError::InvalidWindow {
                start: 2,
                end: 7,
                len: 5
            })
        );
    }

    #[test]
    fn ensure_visible_hello_scenario() {
        let w = VisibleWindow::new(0, 3);
        assert_eq!(classify(4, w, 5), Ok(OffsetPosition::Right));
        let w = ensure_visible(4, w, 5).unwrap();
        assert_eq!(w, VisibleWindow::new(1, 4));
        assert_eq!(classify(4, w, 5), Ok(OffsetPosition::Visible));
    }

    #[test]
    fn ensure_visible_shifts_left_to_caret() {
        let w = ensure_visible(2, VisibleWindow::new(5, 8), 10).unwrap();
        assert_eq!(w, VisibleWindow::new(2, 5));
    }

    #[test]
    fn ensure_visible_keeps_visible_window() {
        let w = VisibleWindow::new(3, 6);
        assert_eq!(ensure_visible(3, w, 10), Ok(w));
        assert_eq!(ensure_visible(6, w, 10), Ok(w));
    }

    #[test]
    fn zero_width_window_follows_caret() {
        let w = ensure_visible(1, VisibleWindow::new(0, 0), 4).unwrap();
        assert_eq!(w, VisibleWindow::new(1, 1));
    }

    #[test]
    fn ensure_visible_slides_overhanging_window_back() {
        // Text shrank from 10 to 6 characters under a [5, 9) window.
        let w = ensure_visible(6, VisibleWindow::new(5, 9), 6).unwrap();
        assert_eq!(w, VisibleWindow::new(2, 6));

        // Text shorter than the window: width shrinks to the text.
        let w = ensure_visible(1, VisibleWindow::new(0, 8), 3).unwrap();
        assert_eq!(w, VisibleWindow::new(0, 3));
    }

    #[test]
    fn ensure_visible_rejects_caret_past_end() {
        assert_eq!(
            ensure_visible(4, VisibleWindow::EMPTY, 3),
            Err(TextBoxError::InvalidArgument { offset: 4, len: 3 })
        );
    }

    #[test]
    fn ensure_visible_is_idempotent_and_preserves_width() {
        for len in 0..=7 {
            for w in windows(len) {
                for caret in 0..=len {
                    let once = ensure_visible(caret, w, len).unwrap();
                    let twice = ensure_visible(caret, once, len).unwrap();
                    assert_eq!(once, twice, "caret {caret} from {w:?} (len {len})");
                    assert_eq!(once.width(), w.width(), "caret {caret} from {w:?}");
                    assert!(is_visible(caret, once, len).unwrap());
                }
            }
        }
    }

    #[test]
    fn resized_keeps_start_and_clamps() {
        let w = VisibleWindow::new(2, 4);
        assert_eq!(w.resized(5, 10), VisibleWindow::new(2, 7));
        assert_eq!(w.resized(5, 6), VisibleWindow::new(1, 6));
        assert_eq!(w.resized(5, 3), VisibleWindow::new(0, 3));
        assert_eq!(VisibleWindow::EMPTY.resized(4, 0), VisibleWindow::EMPTY);
    }

    #[test]
    fn slice_returns_visible_text() {
        assert_eq!(VisibleWindow::new(1, 4).slice("HELLO"), "ELL");
        assert_eq!(VisibleWindow::new(3, 9).slice("HELLO"), "LO");
    }
}

//! Internal text box state representation.
//!
//! This module contains the per-control state owned by a
//! [`TextWindowTracker`](crate::TextWindowTracker).

use crate::selection::SelectionRange;
use crate::text::char_len;
use crate::window::VisibleWindow;

/// Internal state for a single text box.
///
/// This is not exposed publicly; it is managed by the tracker.
#[derive(Clone, Debug, Default)]
pub(crate) struct TextBoxState {
    /// The current text value.
    pub value: String,

    /// Cached character count of `value`.
    pub len: usize,

    /// Monotonic revision counter, incremented on any text change.
    /// Useful for cache invalidation.
    pub value_rev: u64,

    /// Caret position as a character offset into `value`, in `[0, len]`.
    pub caret: usize,

    /// Selection anchor as a character offset into `value`.
    ///
    /// When `Some(anchor)`, the selection range is `min(anchor, caret)..max(anchor, caret)`.
    pub selection_anchor: Option<usize>,

    /// Range of characters currently in view.
    pub window: VisibleWindow,
}

impl TextBoxState {
    pub fn selection(&self) -> Option<SelectionRange> {
        SelectionRange::from_anchor(self.selection_anchor, self.caret)
    }

    /// Record a change of `value`; keeps the cached length in sync.
    pub fn mark_text_dirty(&mut self) {
        self.len = char_len(&self.value);
        self.value_rev = self.value_rev.wrapping_add(1);
    }

    /// Move the caret, extending the selection when `selecting`.
    pub fn set_caret(&mut self, caret: usize, selecting: bool) {
        debug_assert!(caret <= self.len);
        if selecting {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.caret);
            }
            self.caret = caret;
            // If selection collapsed, clear anchor to avoid "sticky" selection.
            if self.selection_anchor == Some(caret) {
                self.selection_anchor = None;
            }
        } else {
            self.caret = caret;
            self.selection_anchor = None;
        }
    }

    /// Delete the selected range, if any. Returns `true` if text was removed.
    pub fn delete_selection(&mut self) -> bool {
        let Some(sel) = self.selection() else {
            self.selection_anchor = None;
            return false;
        };
        self.caret = sel.remove_from(&mut self.value);
        self.selection_anchor = None;
        self.mark_text_dirty();
        true
    }
}

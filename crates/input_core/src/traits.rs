//! The interface a surrounding control uses to drive a text box.
//!
//! A control forwards caret moves and committed text to its text box and asks
//! it for the text to draw. Keeping this behind a trait lets integration
//! layers swap in alternative implementations (e.g. a recording fake in
//! tests) without depending on the tracker's concrete type.

use crate::error::Result;

/// Event hooks of a single-line text input control.
pub trait TextInputControl {
    /// The caret was moved to `caret` (pointer click, navigation).
    ///
    /// Implementations must bring the caret into view, and reject offsets
    /// past the end of the text rather than clamping them.
    fn on_caret_moved(&mut self, caret: usize) -> Result<()>;

    /// Committed text arrived at the caret.
    ///
    /// A non-empty selection is deleted before the text is applied.
    fn on_text_input(&mut self, text: &str) -> Result<()>;

    /// The text to display for the current window.
    fn render(&self) -> String;
}

// =============================================================================
// Implementation for TextWindowTracker
// =============================================================================

impl TextInputControl for crate::tracker::TextWindowTracker {
    #[inline]
    fn on_caret_moved(&mut self, caret: usize) -> Result<()> {
        crate::tracker::TextWindowTracker::on_caret_moved(self, caret)
    }

    #[inline]
    fn on_text_input(&mut self, text: &str) -> Result<()> {
        crate::tracker::TextWindowTracker::on_text_input(self, text)
    }

    #[inline]
    fn render(&self) -> String {
        crate::tracker::TextWindowTracker::render(self)
    }
}

//! Caret, selection, editing and visible-window state of one text box.
//!
//! The tracker is UI-agnostic: it does not measure or draw glyphs. The window
//! is expressed in characters, and integration layers are responsible for
//! translating pointer positions into character offsets before calling in.

use crate::casing::{CharacterCasing, apply_casing};
use crate::config::TextBoxConfig;
use crate::error::{Result, check_offset};
use crate::event::TextBoxEvent;
use crate::insertion::{InsertionMode, edit};
use crate::selection::SelectionRange;
use crate::state::TextBoxState;
use crate::text::{filter_single_line, truncate_chars};
use crate::window::{OffsetPosition, VisibleWindow, classify, reveal};

/// Editing and scrolling state for a single-line text box.
///
/// It handles:
/// - The text value and its revision tracking
/// - Caret positioning and selection
/// - Insert/overwrite editing, with delete-then-insert over a selection
/// - The window of characters in view, kept around the caret
/// - Display casing and password masking at render time
///
/// # Example
///
/// ```
/// use input_core::{TextBoxConfig, TextWindowTracker};
///
/// let mut tb = TextWindowTracker::new(TextBoxConfig::default().with_visible_columns(5));
/// tb.on_text_input("Hello World").unwrap();
///
/// assert_eq!(tb.text(), "Hello World");
/// assert_eq!(tb.render(), "World");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextWindowTracker {
    state: TextBoxState,
    config: TextBoxConfig,
}

impl TextWindowTracker {
    /// Create an empty text box: no text, caret 0, window `[0, 0)`.
    pub fn new(config: TextBoxConfig) -> Self {
        Self {
            state: TextBoxState::default(),
            config,
        }
    }

    /// Create a text box holding `text`, with the caret at the end.
    pub fn with_text(config: TextBoxConfig, text: &str) -> Self {
        let mut tb = Self::new(config);
        tb.set_text(text);
        tb
    }

    pub fn config(&self) -> &TextBoxConfig {
        &self.config
    }

    /// Returns the stored value, without casing or masking.
    pub fn text(&self) -> &str {
        &self.state.value
    }

    /// Length of the value in characters.
    pub fn len(&self) -> usize {
        self.state.len
    }

    pub fn is_empty(&self) -> bool {
        self.state.len == 0
    }

    /// Returns the caret as a character offset.
    pub fn caret(&self) -> usize {
        self.state.caret
    }

    pub fn window(&self) -> VisibleWindow {
        self.state.window
    }

    pub fn selection(&self) -> Option<SelectionRange> {
        self.state.selection()
    }

    /// Returns the selected part of the stored value, if any.
    pub fn selected_text(&self) -> Option<&str> {
        self.selection().map(|sel| sel.slice(&self.state.value))
    }

    /// Monotonic revision counter for the value.
    ///
    /// Increments on any text change. Useful for cache invalidation.
    pub fn value_revision(&self) -> u64 {
        self.state.value_rev
    }

    pub fn insertion_mode(&self) -> InsertionMode {
        self.config.insertion_mode
    }

    pub fn casing(&self) -> CharacterCasing {
        self.config.casing
    }

    /// Returns `true` if the caret lies inside the visible window.
    pub fn caret_in_view(&self) -> bool {
        matches!(
            classify(self.state.caret, self.state.window, self.state.len),
            Ok(OffsetPosition::Visible)
        )
    }

    // --- Configuration ---

    pub fn set_casing(&mut self, casing: CharacterCasing) {
        self.config.casing = casing;
    }

    pub fn set_insertion_mode(&mut self, mode: InsertionMode) {
        self.config.insertion_mode = mode;
    }

    /// Flip between insert and overwrite, returning the new mode.
    pub fn toggle_insertion_mode(&mut self) -> InsertionMode {
        self.config.insertion_mode = self.config.insertion_mode.toggled();
        self.config.insertion_mode
    }

    /// Change how many characters fit in view (e.g. after the control was resized).
    pub fn set_visible_columns(&mut self, columns: usize) {
        self.config.visible_columns = columns;
        self.sync_window();
    }

    // --- Value ---

    /// Set/overwrite the value.
    ///
    /// Newlines are stripped and the value is cut to `max_length`. This resets
    /// the caret to the end and clears any selection. Unlike typed input it is
    /// applied even when the box is read-only.
    pub fn set_text(&mut self, value: &str) {
        let value = filter_single_line(value);
        let value = match self.config.max_length {
            Some(max) => truncate_chars(&value, max),
            None => &*value,
        };

        let st = &mut self.state;
        st.value.clear();
        st.value.push_str(value);
        st.mark_text_dirty();
        st.caret = st.len;
        st.selection_anchor = None;
        st.window = VisibleWindow::EMPTY;
        self.sync_window();
    }

    // --- Caret & selection ---

    /// Move the caret to `caret`, clearing any selection, and scroll it into view.
    ///
    /// # Errors
    ///
    /// [`TextBoxError::InvalidArgument`](crate::TextBoxError::InvalidArgument)
    /// if `caret` is past the end of the text. Nothing changes in that case.
    pub fn on_caret_moved(&mut self, caret: usize) -> Result<()> {
        self.move_caret(caret, false)
    }

    /// Extend the selection from its anchor (or the current caret) to `offset`.
    pub fn select_to(&mut self, offset: usize) -> Result<()> {
        self.move_caret(offset, true)
    }

    /// Move the caret to `caret`; if `selecting` is true, extends/modifies the selection.
    pub fn move_caret(&mut self, caret: usize, selecting: bool) -> Result<()> {
        check_offset(caret, self.state.len)?;
        self.state.set_caret(caret, selecting);
        self.sync_window();
        Ok(())
    }

    /// Move the caret left by one character.
    ///
    /// Without `selecting`, a selection collapses to its start instead.
    pub fn move_caret_left(&mut self, selecting: bool) {
        let st = &mut self.state;
        match st.selection() {
            Some(sel) if !selecting => st.set_caret(sel.start, false),
            _ => st.set_caret(st.caret.saturating_sub(1), selecting),
        }
        self.sync_window();
    }

    /// Move the caret right by one character.
    ///
    /// Without `selecting`, a selection collapses to its end instead.
    pub fn move_caret_right(&mut self, selecting: bool) {
        let st = &mut self.state;
        match st.selection() {
            Some(sel) if !selecting => st.set_caret(sel.end, false),
            _ => st.set_caret((st.caret + 1).min(st.len), selecting),
        }
        self.sync_window();
    }

    /// Move the caret to the start of the text.
    pub fn move_caret_to_start(&mut self, selecting: bool) {
        self.state.set_caret(0, selecting);
        self.sync_window();
    }

    /// Move the caret to the end of the text.
    pub fn move_caret_to_end(&mut self, selecting: bool) {
        let len = self.state.len;
        self.state.set_caret(len, selecting);
        self.sync_window();
    }

    /// Select all text, leaving the caret at the end.
    pub fn select_all(&mut self) {
        let st = &mut self.state;
        st.selection_anchor = None;
        st.caret = 0;
        st.set_caret(st.len, true);
        self.sync_window();
    }

    pub fn clear_selection(&mut self) {
        self.state.selection_anchor = None;
    }

    // --- Editing ---

    /// Apply committed text at the caret.
    ///
    /// A non-empty selection is deleted first, then the text is applied at
    /// the selection start in the current insertion mode. Newlines are
    /// stripped, and the text is cut so the value never grows past
    /// `max_length`. Read-only boxes ignore input.
    pub fn on_text_input(&mut self, text: &str) -> Result<()> {
        if self.config.read_only {
            log::debug!(target: "input_core.tracker", "ignoring input on read-only text box");
            return Ok(());
        }
        let text = filter_single_line(text);
        if text.is_empty() {
            return Ok(());
        }

        let st = &mut self.state;
        debug_assert!(st.caret <= st.len);
        st.delete_selection();
        let mode = self.config.insertion_mode;

        let text = match self.config.max_length {
            Some(max) => truncate_chars(&text, insert_budget(st.len, st.caret, max, mode)),
            None => &*text,
        };
        if !text.is_empty() {
            st.caret = edit(&mut st.value, st.caret, text, mode)?;
            st.mark_text_dirty();
            log::trace!(
                target: "input_core.tracker",
                "{mode:?} {text:?} -> caret {} (len {})",
                st.caret,
                st.len
            );
        }

        self.sync_window();
        Ok(())
    }

    /// Delete the character before the caret (backspace).
    ///
    /// If there is a selection, deletes the selection instead.
    pub fn backspace(&mut self) {
        if self.config.read_only {
            log::debug!(target: "input_core.tracker", "ignoring backspace on read-only text box");
            return;
        }
        let st = &mut self.state;
        if !st.delete_selection() {
            if st.caret == 0 {
                return;
            }
            st.caret = SelectionRange::new(st.caret - 1, st.caret).remove_from(&mut st.value);
            st.mark_text_dirty();
        }
        self.sync_window();
    }

    /// Delete the character after the caret (delete key).
    ///
    /// If there is a selection, deletes the selection instead.
    pub fn delete(&mut self) {
        if self.config.read_only {
            log::debug!(target: "input_core.tracker", "ignoring delete on read-only text box");
            return;
        }
        let st = &mut self.state;
        if !st.delete_selection() {
            if st.caret >= st.len {
                return;
            }
            st.caret = SelectionRange::new(st.caret, st.caret + 1).remove_from(&mut st.value);
            st.mark_text_dirty();
        }
        self.sync_window();
    }

    /// Route a single event to the matching operation.
    pub fn apply(&mut self, event: &TextBoxEvent) -> Result<()> {
        match event {
            TextBoxEvent::MoveCaret { to, selecting } => return self.move_caret(*to, *selecting),
            TextBoxEvent::Input { text } => return self.on_text_input(text),
            TextBoxEvent::Backspace => self.backspace(),
            TextBoxEvent::Delete => self.delete(),
            TextBoxEvent::Left { selecting } => self.move_caret_left(*selecting),
            TextBoxEvent::Right { selecting } => self.move_caret_right(*selecting),
            TextBoxEvent::Home { selecting } => self.move_caret_to_start(*selecting),
            TextBoxEvent::End { selecting } => self.move_caret_to_end(*selecting),
            TextBoxEvent::SelectAll => self.select_all(),
            TextBoxEvent::SetText { text } => self.set_text(text),
            TextBoxEvent::ToggleInsertionMode => {
                self.toggle_insertion_mode();
            }
        }
        Ok(())
    }

    // --- Rendering ---

    /// The text to draw: the visible slice, cased or masked.
    pub fn render(&self) -> String {
        let visible = self.state.window.slice(&self.state.value);
        match self.config.password_char {
            Some(mask) => visible.chars().map(|_| mask).collect(),
            None => apply_casing(visible, self.config.casing).into_owned(),
        }
    }

    /// Resize the window to the configured columns and bring the caret into view.
    fn sync_window(&mut self) {
        let st = &mut self.state;
        let sized = st.window.resized(self.config.visible_columns, st.len);
        st.window = reveal(st.caret, sized, st.len);
    }
}

/// How many characters of new input fit under `max` characters in total.
fn insert_budget(len: usize, caret: usize, max: usize, mode: InsertionMode) -> usize {
    let growth = max.saturating_sub(len);
    match mode {
        InsertionMode::Insert => growth,
        InsertionMode::Overwrite => (len - caret) + growth,
    }
}

//! Input events a surrounding control forwards to the tracker.

/// A single user-level event routed to a text box.
///
/// Integration layers translate their native key/pointer/IME events into
/// these and hand them to [`TextWindowTracker::apply`](crate::TextWindowTracker::apply).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)
)]
pub enum TextBoxEvent {
    /// Place the caret at a character offset (pointer click, programmatic move).
    MoveCaret {
        to: usize,
        #[cfg_attr(feature = "serde", serde(default))]
        selecting: bool,
    },
    /// Committed text input (typing, paste, IME commit).
    Input { text: String },
    Backspace,
    Delete,
    Left {
        #[cfg_attr(feature = "serde", serde(default))]
        selecting: bool,
    },
    Right {
        #[cfg_attr(feature = "serde", serde(default))]
        selecting: bool,
    },
    Home {
        #[cfg_attr(feature = "serde", serde(default))]
        selecting: bool,
    },
    End {
        #[cfg_attr(feature = "serde", serde(default))]
        selecting: bool,
    },
    SelectAll,
    /// Replace the whole value, as when the bound property changes.
    SetText { text: String },
    /// The Insert key.
    ToggleInsertionMode,
}

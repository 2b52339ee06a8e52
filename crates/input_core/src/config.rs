//! Per-control configuration.

use crate::casing::CharacterCasing;
use crate::insertion::InsertionMode;

/// Number of characters a text box shows when nothing else is configured.
pub const DEFAULT_VISIBLE_COLUMNS: usize = 20;

/// Static settings of a single text box.
///
/// With the `serde` feature every field is optional in serialized form and
/// falls back to [`TextBoxConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TextBoxConfig {
    /// Display casing; never applied to the stored value.
    pub casing: CharacterCasing,
    /// Initial insertion mode; the Insert key toggles it at runtime.
    pub insertion_mode: InsertionMode,
    /// Width of the visible window, in characters.
    pub visible_columns: usize,
    /// Maximum number of characters the value may hold. `None` is unbounded.
    pub max_length: Option<usize>,
    /// Rejects edits while still allowing caret movement and selection.
    pub read_only: bool,
    /// When set, every rendered character is replaced by this one.
    pub password_char: Option<char>,
}

impl Default for TextBoxConfig {
    fn default() -> Self {
        Self {
            casing: CharacterCasing::Normal,
            insertion_mode: InsertionMode::Insert,
            visible_columns: DEFAULT_VISIBLE_COLUMNS,
            max_length: None,
            read_only: false,
            password_char: None,
        }
    }
}

impl TextBoxConfig {
    pub fn with_visible_columns(mut self, columns: usize) -> Self {
        self.visible_columns = columns;
        self
    }

    pub fn with_casing(mut self, casing: CharacterCasing) -> Self {
        self.casing = casing;
        self
    }

    pub fn with_insertion_mode(mut self, mode: InsertionMode) -> Self {
        self.insertion_mode = mode;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_password_char(mut self, ch: char) -> Self {
        self.password_char = Some(ch);
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

//! Display-only character casing.

use std::borrow::Cow;

/// Casing applied to text when it is displayed.
///
/// Casing never touches the stored value: the buffer keeps exactly what was
/// typed, and the transform runs at render/read time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CharacterCasing {
    /// Characters are shown as typed.
    #[default]
    Normal,
    /// Characters are shown in lowercase.
    Lower,
    /// Characters are shown in uppercase.
    Upper,
}

/// Apply `mode` to `text`.
///
/// `Normal` borrows the input unchanged; `Lower` and `Upper` apply the full
/// Unicode case mapping, which may change the character count (e.g. `ß` →
/// `SS`).
///
/// # Examples
///
/// ```
/// use input_core::{CharacterCasing, apply_casing};
///
/// assert_eq!(apply_casing("Hello", CharacterCasing::Normal), "Hello");
/// assert_eq!(apply_casing("Hello", CharacterCasing::Upper), "HELLO");
/// assert_eq!(apply_casing("Hello", CharacterCasing::Lower), "hello");
/// ```
pub fn apply_casing(text: &str, mode: CharacterCasing) -> Cow<'_, str> {
    match mode {
        CharacterCasing::Normal => Cow::Borrowed(text),
        CharacterCasing::Lower => Cow::Owned(text.to_lowercase()),
        CharacterCasing::Upper => Cow::Owned(text.to_uppercase()),
    }
}

//! Insert/overwrite editing at the caret.

use crate::error::{Result, check_offset};
use crate::text::{byte_index, char_len};

/// How typed characters merge into the existing text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InsertionMode {
    /// New characters push existing ones to the right.
    #[default]
    Insert,
    /// New characters replace existing ones, one for one.
    Overwrite,
}

impl InsertionMode {
    /// The other mode, as toggled by the Insert key.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Self::Insert => Self::Overwrite,
            Self::Overwrite => Self::Insert,
        }
    }
}

/// Apply `inserted` to `buffer` at character offset `caret`.
///
/// - `Insert` splices the text in; everything from `caret` on shifts right.
/// - `Overwrite` replaces up to `min(len(inserted), len(buffer) - caret)`
///   characters and appends whatever does not fit before the end.
///
/// Returns the new caret, `caret + len(inserted)` in both modes. The caller
/// is responsible for bringing that caret back into view.
///
/// # Errors
///
/// [`TextBoxError::InvalidArgument`](crate::TextBoxError::InvalidArgument)
/// if `caret` is past the end of `buffer`; the buffer is left untouched.
///
/// # Examples
///
/// ```
/// use input_core::{InsertionMode, edit};
///
/// let mut buf = String::from("abc");
/// assert_eq!(edit(&mut buf, 1, "XY", InsertionMode::Overwrite), Ok(3));
/// assert_eq!(buf, "aXY");
///
/// let mut buf = String::from("abc");
/// assert_eq!(edit(&mut buf, 1, "XY", InsertionMode::Insert), Ok(3));
/// assert_eq!(buf, "aXYbc");
/// ```
pub fn edit(buffer: &mut String, caret: usize, inserted: &str, mode: InsertionMode) -> Result<usize> {
    let len = char_len(buffer);
    check_offset(caret, len)?;

    let inserted_len = char_len(inserted);
    let at = byte_index(buffer, caret);
    match mode {
        InsertionMode::Insert => buffer.insert_str(at, inserted),
        InsertionMode::Overwrite => {
            let replaced = inserted_len.min(len - caret);
            let until = byte_index(buffer, caret + replaced);
            buffer.replace_range(at..until, inserted);
        }
    }

    Ok(caret + inserted_len)
}

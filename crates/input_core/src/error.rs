//! Errors reported by window and edit operations.

use thiserror::Error;

/// Invalid arguments passed to a tracker operation.
///
/// Offsets are never clamped silently: callers that want clamping must do it
/// before calling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TextBoxError {
    /// A caret or offset outside `[0, len]`.
    #[error("offset {offset} is outside the text (length {len})")]
    InvalidArgument { offset: usize, len: usize },

    /// A window that does not satisfy `start <= end <= len`.
    #[error("window [{start}, {end}) does not fit text of length {len}")]
    InvalidWindow { start: usize, end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, TextBoxError>;

/// Reject `offset` unless it lies in `[0, len]`.
#[inline]
pub(crate) fn check_offset(offset: usize, len: usize) -> Result<()> {
    if offset > len {
        log::debug!(target: "input_core.tracker", "rejecting offset {offset} (len {len})");
        return Err(TextBoxError::InvalidArgument { offset, len });
    }
    Ok(())
}

//! # input_core
//!
//! UI-agnostic editing and visible-window state for single-line text boxes.
//!
//! This crate provides the fundamental building blocks for text input handling:
//! - [`TextWindowTracker`]: caret, selection, edits and the window of characters in view
//! - [`VisibleWindow`] / [`ensure_visible`]: keeping the caret inside the shown range
//! - [`apply_casing`]: display-only character casing
//! - [`edit`]: insert/overwrite splicing at the caret
//! - [`SelectionRange`]: a normalized selection in character offsets
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any graphics framework or text shaper
//! - Layout or hit-testing systems
//! - Platform-specific APIs
//!
//! All offsets are character offsets (Unicode scalar values). Integration
//! layers translate pointer positions and pixel widths into characters before
//! calling in, and draw whatever [`TextWindowTracker::render`] returns.
//!
//! ## Features
//!
//! - `serde`: derive `Deserialize` for [`TextBoxConfig`], [`TextBoxEvent`] and
//!   the mode enums, so configs and event scripts can be loaded from files.

mod casing;
mod config;
mod error;
mod event;
mod insertion;
mod selection;
mod state;
mod text;
mod tracker;
mod traits;
mod window;

pub use casing::{CharacterCasing, apply_casing};
pub use config::{DEFAULT_VISIBLE_COLUMNS, TextBoxConfig};
pub use error::{Result, TextBoxError};
pub use event::TextBoxEvent;
pub use insertion::{InsertionMode, edit};
pub use selection::SelectionRange;
pub use tracker::TextWindowTracker;
pub use traits::TextInputControl;
pub use window::{VisibleWindow, ensure_visible, is_visible};

// Re-export text utilities for integration layers that map between byte and
// character offsets.
pub use text::{byte_index, byte_range, char_len, char_slice, filter_single_line, truncate_chars};

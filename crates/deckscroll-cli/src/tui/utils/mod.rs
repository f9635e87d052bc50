//! Utilities for the TUI
//!
//! Common helper functions used throughout the TUI.

mod text;

pub use text::{display_width, pad_to_width, truncate_ellipsis, wrap_text};

//! App State Components
//!
//! Groups related UI state into logical modules.

mod layout;
mod viewport;

pub use layout::{DragTarget, FrameAreas, LayoutState};
pub use viewport::{ViewportNavigator, ViewportState};

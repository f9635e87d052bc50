//! Scroll tracking: measured layout, viewport, and the tracker state machine

mod layout;
mod tracker;

pub use layout::{DocumentLayout, SectionBox, Viewport};
pub use tracker::{active_section, progress_percent, track, ScrollState, ScrollTracker, Tracked};

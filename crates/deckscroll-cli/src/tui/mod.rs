//! Terminal viewer for deckscroll

pub mod app;
pub mod components;
pub mod handlers;
pub mod paint;
pub mod state;
pub mod themes;
pub mod utils;

// Re-exports
pub use app::{App, ViewOptions};
pub use themes::THEME_REGISTRY;

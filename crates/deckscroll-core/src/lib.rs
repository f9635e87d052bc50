//! deckscroll core - document model and scroll engine
//!
//! This crate provides everything the viewer needs short of painting:
//! - JSON content schema loading into a typed document model
//! - Block rendering into an ordered view tree
//! - Carousel paging
//! - Active-section and progress tracking
//! - The minimap navigation model
//! - Icons, config, and filesystem paths

pub mod carousel;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod icons;
pub mod minimap;
pub mod paths;
pub mod render;
pub mod tracking;

// Re-exports for convenience
pub use carousel::{Align, CarouselOptions, CarouselState};
pub use config::DeckConfig;
pub use document::{Document, Section, SectionKey};
pub use error::{DeckError, DeckResult};
pub use icons::{Icon, IconRegistry};
pub use minimap::{AnchorNavigator, Minimap, MinimapEntry, MinimapInput, ScrollBehavior};
pub use render::{render_document, render_section, CardView, SectionView, ViewNode};
pub use tracking::{DocumentLayout, ScrollState, ScrollTracker, Viewport};

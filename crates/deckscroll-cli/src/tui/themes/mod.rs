//! Color themes for the viewer

mod definitions;
mod registry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

pub use registry::ThemeRegistry;

/// Global theme registry, built on first use
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// Colors used by every painted element
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,

    pub bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub title_color: Color,
    pub accent_color: Color,
    pub border_color: Color,
    pub link_color: Color,

    pub success_color: Color,
    pub warning_color: Color,
    pub error_color: Color,

    /// Focused minimap entry background
    pub highlight_bg_color: Color,
    pub scrollbar_bg_color: Color,
    pub status_bar_bg_color: Color,
}

//! Theme switching

use std::sync::Arc;

use crate::tui::app::App;
use crate::tui::components::Toast;
use crate::tui::themes::THEME_REGISTRY;

impl App {
    /// Switch theme. Painted sections carry colors, so the cache goes too.
    pub fn set_theme(&mut self, name: &str) {
        let theme = THEME_REGISTRY.get_or_default(name);
        self.theme = Arc::new(theme.clone());
        self.theme_name = theme.name.clone();
        self.paint_cache.clear();
        self.invalidate_layout();
        tracing::debug!(theme = %self.theme_name, "Theme changed");
    }

    /// Move to the next registered theme
    pub fn cycle_theme(&mut self) {
        let next = THEME_REGISTRY.next_name(&self.theme_name).to_string();
        self.set_theme(&next);
        self.toasts
            .push(Toast::success(format!("Theme: {}", self.theme.display_name)));
    }
}

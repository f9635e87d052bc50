//! UI rendering coordinator
//!
//! Measures first, so the tracker sees the current layout, then draws the
//! content, the chrome around it, and toasts on top.

mod views;

use ratatui::{style::Style, widgets::Block, Frame};

use crate::tui::app::App;
use crate::tui::components::render_toasts;
use crate::tui::state::FrameAreas;

impl App {
    /// Main UI rendering dispatcher
    pub fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        let bg = Block::default().style(Style::default().bg(self.theme.bg_color));
        f.render_widget(bg, area);

        let areas = FrameAreas::split(area, self.minimap_panel.width(area.width));
        self.refresh_layout(areas.content);
        // A re-measure may have moved the viewport
        self.sync_scroll();

        self.render_content(f, areas.content);
        self.render_progress(f, areas.progress);
        self.render_minimap_panel(f, areas.minimap);
        self.render_nav(f, areas.nav_bar);

        render_toasts(f.buffer_mut(), area, &self.toasts, &self.theme);
    }
}

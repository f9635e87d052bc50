//! Per-frame ticks
//!
//! Animations advance here, and viewport movement is pushed to the scroll
//! tracker before the minimap pulls the published state.

use crate::tui::app::App;

impl App {
    /// Advance one frame. Returns true if anything visible changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = self.toasts.tick();
        changed |= self.viewport.tick();
        changed |= self.minimap_panel.tick();
        changed |= self.sync_scroll();
        changed
    }

    /// Report the viewport to the tracker and refresh the minimap highlight.
    /// Returns true if the published state or the highlight changed.
    pub fn sync_scroll(&mut self) -> bool {
        let viewport = self.viewport.viewport();
        let mut changed = false;
        if self.tracker.viewport().is_some_and(|current| current != viewport) {
            changed |= self.tracker.on_viewport_moved(viewport);
        }
        changed |= self.minimap.sync();
        changed
    }
}

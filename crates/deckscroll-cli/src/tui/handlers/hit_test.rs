//! Hit testing
//!
//! Maps screen coordinates to the element drawn there, using the areas
//! recorded during the last render.

use ratatui::layout::{Position, Rect};

use crate::tui::app::App;

/// What a screen position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    MinimapEntry(usize),
    MinimapScrollbar,
    /// Inside the minimap panel but on no entry
    Minimap,
    ContentScrollbar,
    Content,
    NavBack,
    NavNext,
    Nothing,
}

fn contains(area: Option<Rect>, x: u16, y: u16) -> bool {
    area.is_some_and(|a| a.contains(Position::new(x, y)))
}

impl App {
    pub fn hit_test(&self, x: u16, y: u16) -> HitTarget {
        let layout = &self.layout;

        if contains(layout.nav_back_area, x, y) {
            return HitTarget::NavBack;
        }
        if contains(layout.nav_next_area, x, y) {
            return HitTarget::NavNext;
        }
        if contains(layout.minimap_scrollbar_area, x, y) {
            return HitTarget::MinimapScrollbar;
        }
        if let Some(entries) = layout.minimap_entries_area {
            if entries.contains(Position::new(x, y)) {
                if let Some(index) = self.minimap_panel.entry_at(y, entries) {
                    return HitTarget::MinimapEntry(index);
                }
            }
        }
        if contains(layout.minimap_area, x, y) {
            return HitTarget::Minimap;
        }
        if contains(layout.content_scrollbar_area, x, y) {
            return HitTarget::ContentScrollbar;
        }
        if contains(layout.content_area, x, y) {
            return HitTarget::Content;
        }
        HitTarget::Nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::test_support::*;

    #[test]
    fn test_hit_regions() {
        let mut app = app();
        let mut terminal = terminal(120, 30);
        draw(&mut app, &mut terminal);

        assert_eq!(app.hit_test(10, 10), HitTarget::Content);
        // Progress bar row belongs to nothing clickable
        assert_eq!(app.hit_test(10, 0), HitTarget::Nothing);
        assert_eq!(app.hit_test(1, 29), HitTarget::NavBack);
        assert_eq!(app.hit_test(119, 29), HitTarget::NavNext);

        let entries = app.layout.minimap_entries_area.unwrap();
        assert_eq!(app.hit_test(entries.x + 2, entries.y), HitTarget::MinimapEntry(0));
        assert_eq!(app.hit_test(entries.x + 2, entries.y + 3), HitTarget::MinimapEntry(3));
        assert_eq!(app.hit_test(entries.x + 2, entries.y + 4), HitTarget::Minimap);

        let scrollbar = app.layout.content_scrollbar_area.unwrap();
        assert_eq!(app.hit_test(scrollbar.x, scrollbar.y), HitTarget::ContentScrollbar);
    }
}

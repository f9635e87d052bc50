//! Mouse event handling
//!
//! Wheel scrolling, minimap clicks, nav bar links and scrollbar dragging.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use deckscroll_core::MinimapInput;

use super::hit_test::HitTarget;
use crate::tui::app::App;
use crate::tui::components::scrollbars::scrollbar_click_offset;
use crate::tui::state::DragTarget;

impl App {
    /// Handle mouse events for scrolling and clicking
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.handle_wheel(mouse.column, mouse.row, true),
            MouseEventKind::ScrollUp => self.handle_wheel(mouse.column, mouse.row, false),
            MouseEventKind::Down(MouseButton::Left) => self.handle_left_click(mouse.column, mouse.row),
            MouseEventKind::Drag(MouseButton::Left) => self.handle_drag(mouse.row),
            MouseEventKind::Up(MouseButton::Left) => self.layout.dragging = None,
            _ => {}
        }
    }

    fn handle_wheel(&mut self, x: u16, y: u16, down: bool) {
        match self.hit_test(x, y) {
            HitTarget::Minimap | HitTarget::MinimapEntry(_) | HitTarget::MinimapScrollbar => {
                let visible = self
                    .layout
                    .minimap_entries_area
                    .map_or(0, |a| a.height as usize);
                if down {
                    self.minimap_panel.scroll_down(visible);
                } else {
                    self.minimap_panel.scroll_up();
                }
            }
            _ => {
                let step = self.config.scroll_step();
                if down {
                    self.viewport.scroll_down(step);
                } else {
                    self.viewport.scroll_up(step);
                }
            }
        }
    }

    fn handle_left_click(&mut self, x: u16, y: u16) {
        match self.hit_test(x, y) {
            HitTarget::MinimapEntry(index) => {
                self.minimap_input(MinimapInput::Click(index));
            }
            HitTarget::MinimapScrollbar => {
                self.layout.dragging = Some(DragTarget::Minimap);
                self.handle_drag(y);
            }
            HitTarget::ContentScrollbar => {
                self.layout.dragging = Some(DragTarget::Content);
                self.handle_drag(y);
            }
            HitTarget::NavBack => self.follow_back_link(),
            HitTarget::NavNext => self.follow_next_link(),
            HitTarget::Content => self.minimap_panel.focused = false,
            HitTarget::Minimap | HitTarget::Nothing => {}
        }
    }

    /// Scrollbar drag: jump proportionally to the pointer row
    fn handle_drag(&mut self, y: u16) {
        match self.layout.dragging {
            Some(DragTarget::Content) => {
                if let Some(area) = self.layout.content_scrollbar_area {
                    let max = self.viewport.max_scroll as usize;
                    let offset = scrollbar_click_offset(y, area, max);
                    self.viewport.scroll_to_line(offset as u32);
                }
            }
            Some(DragTarget::Minimap) => {
                if let Some(area) = self.layout.minimap_scrollbar_area {
                    self.minimap_panel.handle_scrollbar_click(y, area);
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::test_support::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_wheel_scrolls_content() {
        let mut app = app();
        let mut terminal = terminal(120, 30);
        draw(&mut app, &mut terminal);

        app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 10, 10));
        assert_eq!(app.viewport.offset, 3);
        app.handle_mouse_event(mouse(MouseEventKind::ScrollUp, 10, 10));
        assert_eq!(app.viewport.offset, 0);
    }

    #[test]
    fn test_minimap_click_jumps() {
        let mut app = app();
        let mut terminal = terminal(120, 30);
        draw(&mut app, &mut terminal);

        let entries = app.layout.minimap_entries_area.unwrap();
        app.handle_mouse_event(mouse(
            MouseEventKind::Down(MouseButton::Left),
            entries.x + 3,
            entries.y + 2,
        ));
        assert_eq!(app.minimap.active_index(), Some(2));

        while app.viewport.is_animating() {
            app.tick();
        }
        let top = app.tracker.layout().unwrap().anchor(&"cards".into());
        assert_eq!(Some(app.viewport.offset), top);
        assert_eq!(app.active_index(), Some(2));
    }

    #[test]
    fn test_scrollbar_drag() {
        let mut app = app();
        let mut terminal = terminal(120, 30);
        draw(&mut app, &mut terminal);

        let bar = app.layout.content_scrollbar_area.unwrap();
        let bottom = bar.y + bar.height - 1;
        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), bar.x, bar.y));
        assert_eq!(app.viewport.offset, 0);

        app.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), bar.x + 5, bottom));
        assert_eq!(app.viewport.offset, app.viewport.max_scroll);

        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), bar.x, bottom));
        assert_eq!(app.layout.dragging, None);
    }
}

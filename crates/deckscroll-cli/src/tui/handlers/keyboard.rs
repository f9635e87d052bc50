//! Keyboard event handlers
//!
//! Minimap keys are handled first while the panel has focus; everything
//! else scrolls or navigates the document.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use deckscroll_core::MinimapInput;

use crate::tui::app::App;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        let code = key_event.code;
        let modifiers = key_event.modifiers;
        let is_press =
            key_event.kind == KeyEventKind::Press || key_event.kind == KeyEventKind::Repeat;
        if !is_press {
            return;
        }

        // Ctrl+C always quits
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.minimap_panel.focused && self.handle_minimap_key(code) {
            return;
        }

        let step = self.config.scroll_step();
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.viewport.scroll_down(step),
            KeyCode::Char('k') | KeyCode::Up => self.viewport.scroll_up(step),
            KeyCode::PageDown | KeyCode::Char(' ') => {
                let page = self.viewport.page();
                self.viewport.scroll_down(page);
            }
            KeyCode::PageUp => {
                let page = self.viewport.page();
                self.viewport.scroll_up(page);
            }
            KeyCode::Char('g') | KeyCode::Home => self.viewport.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.viewport.scroll_to_end(),
            KeyCode::Char('[') => self.page_active_carousel(false),
            KeyCode::Char(']') => self.page_active_carousel(true),
            KeyCode::Char('m') => self.minimap_panel.toggle(),
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('b') => self.follow_back_link(),
            KeyCode::Char('n') => self.follow_next_link(),
            KeyCode::Enter => self.follow_active_cta(),
            KeyCode::Tab => self.focus_minimap(),
            _ => {}
        }
    }

    /// Keys for the focused minimap. Returns true if consumed.
    fn handle_minimap_key(&mut self, code: KeyCode) -> bool {
        let input = match code {
            KeyCode::Esc | KeyCode::Tab => {
                self.minimap_panel.focused = false;
                return true;
            }
            KeyCode::Char('j') | KeyCode::Down => MinimapInput::FocusNext,
            KeyCode::Char('k') | KeyCode::Up => MinimapInput::FocusPrev,
            KeyCode::Enter => MinimapInput::Enter,
            KeyCode::Char(' ') => MinimapInput::Space,
            _ => return false,
        };
        self.minimap_input(input);
        true
    }

    /// Give the minimap keyboard focus, opening it if hidden
    fn focus_minimap(&mut self) {
        if !self.minimap_panel.visible {
            self.minimap_panel.toggle();
        }
        self.minimap_panel.focused = true;
        self.minimap.focus_active();
    }

    /// Page the carousel of the active section, if it has one
    fn page_active_carousel(&mut self, forward: bool) {
        let Some(index) = self.active_index() else {
            return;
        };
        let Some(Some(carousel)) = self.carousels.get_mut(index) else {
            return;
        };
        let before = carousel.index();
        if forward {
            carousel.scroll_next();
        } else {
            carousel.scroll_prev();
        }
        if carousel.index() != before {
            tracing::debug!(section = index, item = carousel.index(), "Carousel paged");
            self.invalidate_layout();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tui::app::test_support::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_line_and_page_scrolling() {
        let mut app = app();
        let mut terminal = terminal(100, 30);
        draw(&mut app, &mut terminal);

        app.handle_key(press(KeyCode::Char('j')));
        assert_eq!(app.viewport.offset, 3);
        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.viewport.offset, 0);

        app.handle_key(press(KeyCode::PageDown));
        assert_eq!(app.viewport.offset, app.viewport.page());

        app.handle_key(press(KeyCode::Char('G')));
        assert_eq!(app.viewport.offset, app.viewport.max_scroll);
        app.handle_key(press(KeyCode::Char('g')));
        assert_eq!(app.viewport.offset, 0);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let mut terminal = terminal(100, 30);
        draw(&mut app, &mut terminal);

        let release = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        app.handle_key(release);
        assert_eq!(app.viewport.offset, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut first = app();
        first.handle_key(press(KeyCode::Char('q')));
        assert!(first.should_quit);

        let mut second = app();
        second.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(second.should_quit);
    }

    #[test]
    fn test_minimap_focus_and_activation() {
        let mut app = app();
        let mut terminal = terminal(100, 30);
        draw(&mut app, &mut terminal);

        app.handle_key(press(KeyCode::Tab));
        assert!(app.minimap_panel.focused);
        assert_eq!(app.minimap.focused(), 0);

        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Enter));
        // Highlight moves before the scroll lands
        assert_eq!(app.minimap.active_index(), Some(2));
        assert!(app.viewport.is_animating());

        // Scrolling keys go to the minimap while it has focus
        let offset = app.viewport.offset;
        app.handle_key(press(KeyCode::Char('j')));
        assert_eq!(app.viewport.offset, offset);

        app.handle_key(press(KeyCode::Esc));
        assert!(!app.minimap_panel.focused);
    }

    #[test]
    fn test_carousel_keys_page_active_section() {
        let mut app = app();
        let mut terminal = terminal(100, 30);
        draw(&mut app, &mut terminal);

        // Not on the carousel section yet
        app.handle_key(press(KeyCode::Char(']')));
        assert_eq!(app.carousels[2].as_ref().map(|c| c.index()), Some(0));

        assert!(app.jump_to_section(&"cards".into()));
        app.handle_key(press(KeyCode::Char(']')));
        app.handle_key(press(KeyCode::Char(']')));
        assert_eq!(app.carousels[2].as_ref().map(|c| c.index()), Some(2));

        // Non-looping carousel clamps at the end
        for _ in 0..5 {
            app.handle_key(press(KeyCode::Char(']')));
        }
        assert_eq!(app.carousels[2].as_ref().map(|c| c.index()), Some(3));
        app.handle_key(press(KeyCode::Char('[')));
        assert_eq!(app.carousels[2].as_ref().map(|c| c.index()), Some(2));
    }

    #[test]
    fn test_toggle_minimap() {
        let mut app = app();
        assert!(app.minimap_panel.visible);
        app.handle_key(press(KeyCode::Char('m')));
        assert!(!app.minimap_panel.visible);
    }
}

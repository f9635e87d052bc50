//! Content and chrome rendering

use std::sync::Arc;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, CONTENT_PAD_X};
use crate::tui::components::{
    render_minimap, render_nav_bar, render_progress_bar, render_scrollbar, NavBarInfo,
};

impl App {
    /// Draw the visible slice of the painted document
    pub(super) fn render_content(&mut self, f: &mut Frame, area: Rect) {
        self.layout.content_area = Some(area);
        if area.width < 2 || area.height == 0 {
            self.layout.content_scrollbar_area = None;
            return;
        }

        if self.views.is_empty() {
            self.layout.content_scrollbar_area = None;
            let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
            f.render_widget(
                Paragraph::new("This deck has no sections")
                    .style(Style::default().fg(self.theme.dim_color))
                    .alignment(Alignment::Center),
                middle,
            );
            return;
        }

        let width = Self::text_width(area.width);
        let text_x = area.x + CONTENT_PAD_X;
        let max_width = area.width.saturating_sub(1 + CONTENT_PAD_X);
        let offset = self.viewport.offset;

        // (section, row within it) for every visible row
        let rows: Vec<Option<(usize, u32)>> = match self.tracker.layout() {
            Some(layout) => (0..u32::from(area.height))
                .map(|row| {
                    let doc_row = offset + row;
                    layout
                        .section_at(doc_row)
                        .map(|(i, s)| (i, doc_row - s.top))
                })
                .collect(),
            None => Vec::new(),
        };

        let mut current: Option<(usize, Arc<Vec<Line<'static>>>)> = None;
        for (y, slot) in rows.into_iter().enumerate() {
            let Some((index, line_no)) = slot else {
                continue;
            };
            let lines = match &current {
                Some((i, lines)) if *i == index => lines.clone(),
                _ => {
                    let lines = self.section_lines(index, width);
                    current = Some((index, lines.clone()));
                    lines
                }
            };
            if let Some(line) = lines.get(line_no as usize) {
                f.buffer_mut()
                    .set_line(text_x, area.y + y as u16, line, max_width);
            }
        }

        let scrollbar = Rect::new(area.x + area.width - 1, area.y, 1, area.height);
        let total = self.tracker.layout().map_or(0, |l| l.height()) as usize;
        render_scrollbar(
            f.buffer_mut(),
            scrollbar,
            offset as usize,
            total,
            area.height as usize,
            self.theme.accent_color,
            self.theme.scrollbar_bg_color,
        );
        self.layout.content_scrollbar_area = Some(scrollbar);
    }

    pub(super) fn render_progress(&self, f: &mut Frame, area: Rect) {
        let percent = self.tracker.state().map_or(0.0, |s| s.progress_percent);
        render_progress_bar(f.buffer_mut(), area, percent, &self.theme);
    }

    pub(super) fn render_minimap_panel(&mut self, f: &mut Frame, area: Option<Rect>) {
        self.layout.minimap_area = area;
        let result = area.map(|area| {
            render_minimap(
                f.buffer_mut(),
                area,
                &self.minimap,
                &self.theme,
                &mut self.minimap_panel,
            )
        });
        self.layout.minimap_entries_area = result.as_ref().and_then(|r| r.entries_area);
        self.layout.minimap_scrollbar_area = result.as_ref().and_then(|r| r.scrollbar_area);
    }

    pub(super) fn render_nav(&mut self, f: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let active = self.active_index();
        let info = NavBarInfo {
            back: self.document.navigation.back.as_ref(),
            next: self.document.navigation.next.as_ref(),
            section_title: active
                .and_then(|i| self.views.get(i))
                .map_or("", |view| view.title.as_str()),
            position: active.map(|i| i + 1),
            total: self.views.len(),
            progress_percent: self.tracker.state().map_or(0.0, |s| s.progress_percent),
        };
        let areas = render_nav_bar(f, area, &self.theme, &info);
        self.layout.nav_back_area = areas.back;
        self.layout.nav_next_area = areas.next;
    }
}

#[cfg(test)]
mod tests {
    use crate::tui::app::test_support::*;
    use deckscroll_core::{DeckConfig, Document};

    use crate::tui::app::{App, ViewOptions};

    #[test]
    fn test_first_frame_shows_cover() {
        let mut app = app();
        let mut terminal = terminal(120, 30);
        draw(&mut app, &mut terminal);

        let text = screen(&terminal);
        assert!(text.contains("Welcome"));
        assert!(text.contains("Sections"));
        assert!(text.contains("01 Welcome"));
        assert!(text.contains("‹ Overview"));
        assert!(text.contains("1/4"));
    }

    #[test]
    fn test_scrolled_frame_shows_later_section() {
        let mut app = app();
        let mut terminal = terminal(120, 30);
        draw(&mut app, &mut terminal);
        app.jump_to_section(&"closing".into());
        draw(&mut app, &mut terminal);

        let text = screen(&terminal);
        assert!(text.contains("Thanks"));
        assert!(text.contains("4/4"));
        assert!(text.contains("100%"));
    }

    #[test]
    fn test_empty_document() {
        let document = Document::from_json_str(r#"{"sections": []}"#).unwrap();
        let mut app = App::new(document, None, DeckConfig::default(), ViewOptions::default());
        let mut terminal = terminal(100, 20);
        draw(&mut app, &mut terminal);

        assert!(screen(&terminal).contains("This deck has no sections"));
        assert!(app.layout.content_scrollbar_area.is_none());
    }

    #[test]
    fn test_narrow_terminal_hides_minimap() {
        let mut app = app();
        let mut terminal = terminal(60, 20);
        draw(&mut app, &mut terminal);
        assert!(app.layout.minimap_area.is_none());
        assert!(!screen(&terminal).contains("Sections"));
    }
}

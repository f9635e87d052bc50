//! Navigation bar - bottom row with back/next links, position and key hints

use deckscroll_core::document::Link;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// What the nav bar shows
pub struct NavBarInfo<'a> {
    pub back: Option<&'a Link>,
    pub next: Option<&'a Link>,
    /// Title of the active section
    pub section_title: &'a str,
    /// 1-based position of the active section
    pub position: Option<usize>,
    pub total: usize,
    pub progress_percent: f64,
}

/// Clickable regions produced by a render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavBarAreas {
    pub back: Option<Rect>,
    pub next: Option<Rect>,
}

/// Widest a link label gets before it is truncated
const MAX_LINK_WIDTH: usize = 24;

pub fn render_nav_bar(f: &mut Frame, area: Rect, theme: &Theme, info: &NavBarInfo) -> NavBarAreas {
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let back_text = info
        .back
        .map(|link| format!(" ‹ {} ", truncate_ellipsis(&link.label, MAX_LINK_WIDTH)));
    let next_text = info
        .next
        .map(|link| format!(" {} › ", truncate_ellipsis(&link.label, MAX_LINK_WIDTH)));
    let back_width = back_text.as_deref().map_or(0, UnicodeWidthStr::width) as u16;
    let next_width = next_text.as_deref().map_or(0, UnicodeWidthStr::width) as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(back_width),
            Constraint::Fill(1),
            Constraint::Length(next_width),
        ])
        .split(area);

    let link_style = Style::default()
        .fg(theme.link_color)
        .add_modifier(Modifier::UNDERLINED);
    let mut areas = NavBarAreas::default();

    if let Some(text) = back_text {
        f.render_widget(Paragraph::new(Span::styled(text, link_style)), chunks[0]);
        areas.back = Some(chunks[0]);
    }
    if let Some(text) = next_text {
        f.render_widget(
            Paragraph::new(Span::styled(text, link_style)).alignment(Alignment::Right),
            chunks[2],
        );
        areas.next = Some(chunks[2]);
    }

    // Position on the left of the middle, key hints right-aligned
    let middle = chunks[1];
    let position = position_spans(info, theme, middle.width as usize);
    let position_width: usize = position.iter().map(|s| s.content.width()).sum();
    let hint_space = (middle.width as usize).saturating_sub(position_width);

    let inner = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(position_width as u16), Constraint::Fill(1)])
        .split(middle);
    f.render_widget(Paragraph::new(Line::from(position)), inner[0]);
    f.render_widget(
        Paragraph::new(Line::from(build_hints_for_width(hint_space, theme))).alignment(Alignment::Right),
        inner[1],
    );

    areas
}

fn position_spans<'a>(info: &NavBarInfo, theme: &'a Theme, width: usize) -> Vec<Span<'a>> {
    let dim = Style::default().fg(theme.dim_color);
    let counter = match info.position {
        Some(n) => format!("{}/{}", n, info.total),
        None => format!("-/{}", info.total),
    };
    // Fixed width so the hints don't jump as progress changes
    let percent = format!("{:>3.0}%", info.progress_percent.clamp(0.0, 100.0));
    let fixed = 1 + counter.width() + 3 + percent.width() + 3;
    let title_width = width.saturating_sub(fixed).min(40);

    let mut spans = vec![Span::raw(" ")];
    if title_width >= 4 {
        spans.push(Span::styled(
            truncate_ellipsis(info.section_title, title_width),
            Style::default().fg(theme.text_color),
        ));
        spans.push(Span::styled(" · ", dim));
    }
    spans.push(Span::styled(counter, dim));
    spans.push(Span::styled(" · ", dim));
    spans.push(Span::styled(percent, Style::default().fg(theme.accent_color)));
    spans
}

/// Key hints that fit in `width`, highest priority kept first
fn build_hints_for_width<'a>(width: usize, theme: &'a Theme) -> Vec<Span<'a>> {
    let hints: [(&str, &str); 5] = [
        (" q ", "quit "),
        (" j/k ", "scroll "),
        (" Tab ", "sections "),
        (" m ", "minimap "),
        (" [ ] ", "carousel "),
    ];

    let mut spans = Vec::new();
    let mut used = 0;
    for (key, desc) in hints {
        let w = key.width() + desc.width();
        if used + w > width {
            break;
        }
        spans.push(Span::styled(
            key,
            Style::default().bg(theme.border_color).fg(theme.text_color),
        ));
        spans.push(Span::styled(desc, Style::default().fg(theme.dim_color)));
        used += w;
    }
    spans
}

//! Card painting: bordered agent and doc cards, and card grids
//!
//! Cards in one row share a height so borders line up.

use deckscroll_core::render::{AgentCardView, CardView, DocCardView, StatusTone};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::compose::{blank, column_width, compose_columns, fit_columns, pad_line};
use crate::tui::themes::Theme;
use crate::tui::utils::{display_width, truncate_ellipsis, wrap_text};

/// Narrowest card worth drawing
pub const MIN_CARD_WIDTH: usize = 24;

/// Columns between cards
pub const CARD_GAP: usize = 2;

/// Border plus one column of padding on each side
const FRAME_OVERHEAD: usize = 4;

/// Wrap `body` lines in a rounded border `width` columns wide.
///
/// `label` is drawn into the top border on the right. The body is padded
/// with empty rows up to `min_body` rows.
pub fn frame(
    body: Vec<Line<'static>>,
    width: usize,
    min_body: usize,
    border: Color,
    label: Option<(String, Style)>,
) -> Vec<Line<'static>> {
    let width = width.max(FRAME_OVERHEAD);
    let inner = width - FRAME_OVERHEAD;
    let border_style = Style::default().fg(border);

    let mut lines = Vec::with_capacity(body.len().max(min_body) + 2);

    let top_fill = width - 2;
    match label {
        Some((text, style)) if display_width(&text) + 4 <= top_fill => {
            let text = format!(" {} ", text);
            let fill = top_fill - display_width(&text) - 1;
            lines.push(Line::from(vec![
                Span::styled(format!("╭{}", "─".repeat(fill)), border_style),
                Span::styled(text, style),
                Span::styled("─╮", border_style),
            ]));
        }
        _ => lines.push(Line::from(Span::styled(
            format!("╭{}╮", "─".repeat(top_fill)),
            border_style,
        ))),
    }

    let rows = body.len().max(min_body);
    let mut body = body.into_iter();
    for _ in 0..rows {
        let content = body.next().unwrap_or_default();
        let mut spans = vec![Span::styled("│ ", border_style)];
        spans.extend(pad_line(content, inner).spans);
        spans.push(Span::styled(" │", border_style));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(width - 2)),
        border_style,
    )));
    lines
}

/// Icon + title heading, wrapped with a hanging indent under the title
fn heading(glyph: &str, title: &str, inner: usize, theme: &Theme) -> Vec<Line<'static>> {
    let prefix = format!("{} ", glyph);
    let prefix_width = display_width(&prefix);
    let title_style = Style::default()
        .fg(theme.title_color)
        .add_modifier(Modifier::BOLD);

    wrap_text(title, inner.saturating_sub(prefix_width).max(1))
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 {
                Span::styled(prefix.clone(), Style::default().fg(theme.accent_color))
            } else {
                Span::raw(" ".repeat(prefix_width))
            };
            Line::from(vec![lead, Span::styled(line, title_style)])
        })
        .collect()
}

fn paragraph(text: &str, inner: usize, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, inner)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect()
}

/// `in  a · b · c` chip rows, wrapped under the label
fn chips(label: &str, items: &[String], inner: usize, color: Color, theme: &Theme) -> Vec<Line<'static>> {
    let label = format!("{:<4}", label);
    let label_width = display_width(&label);
    wrap_text(&items.join(" · "), inner.saturating_sub(label_width).max(1))
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 {
                Span::styled(label.clone(), Style::default().fg(theme.dim_color))
            } else {
                Span::raw(" ".repeat(label_width))
            };
            Line::from(vec![lead, Span::styled(line, Style::default().fg(color))])
        })
        .collect()
}

fn agent_body(card: &AgentCardView, inner: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = heading(&card.icon.glyph, &card.title, inner, theme);
    if !card.body.is_empty() {
        lines.push(blank());
        lines.extend(paragraph(&card.body, inner, Style::default().fg(theme.text_color)));
    }
    if !card.inputs.is_empty() || !card.outputs.is_empty() {
        lines.push(blank());
    }
    if !card.inputs.is_empty() {
        lines.extend(chips("in", &card.inputs, inner, theme.link_color, theme));
    }
    if !card.outputs.is_empty() {
        lines.extend(chips("out", &card.outputs, inner, theme.accent_color, theme));
    }
    lines
}

fn doc_body(card: &DocCardView, inner: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = heading(&card.icon.glyph, &card.title, inner, theme);
    if !card.body.is_empty() {
        lines.push(blank());
        lines.extend(paragraph(&card.body, inner, Style::default().fg(theme.dim_color)));
    }
    lines
}

fn status_color(tone: StatusTone, theme: &Theme) -> Color {
    match tone {
        StatusTone::Active => theme.success_color,
        StatusTone::Beta => theme.warning_color,
        StatusTone::Planned => theme.dim_color,
        StatusTone::Neutral => theme.link_color,
    }
}

fn card_parts(card: &CardView, width: usize, theme: &Theme) -> (Vec<Line<'static>>, Option<(String, Style)>) {
    let inner = width.saturating_sub(FRAME_OVERHEAD).max(1);
    match card {
        CardView::Agent(agent) => {
            let label = agent.status.as_ref().map(|status| {
                let text = truncate_ellipsis(&status.label, inner / 2);
                let style = Style::default()
                    .fg(status_color(status.tone, theme))
                    .add_modifier(Modifier::BOLD);
                (text, style)
            });
            (agent_body(agent, inner, theme), label)
        }
        CardView::Doc(doc) => (doc_body(doc, inner, theme), None),
    }
}

/// Paint a single card
pub fn paint_card(card: &CardView, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let (body, label) = card_parts(card, width, theme);
    frame(body, width, 0, theme.border_color, label)
}

/// Paint cards side by side with a shared height
pub fn paint_card_row(cards: &[&CardView], card_width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let parts: Vec<_> = cards
        .iter()
        .map(|card| card_parts(card, card_width, theme))
        .collect();
    let rows = parts.iter().map(|(body, _)| body.len()).max().unwrap_or(0);
    let framed = parts
        .into_iter()
        .map(|(body, label)| frame(body, card_width, rows, theme.border_color, label))
        .collect();
    compose_columns(framed, card_width, CARD_GAP)
}

/// Paint cards into rows of up to `columns` cards, fewer when `width`
/// cannot fit them
pub fn paint_card_grid(cards: &[CardView], columns: usize, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    if cards.is_empty() {
        return Vec::new();
    }
    let columns = fit_columns(columns, width, MIN_CARD_WIDTH, CARD_GAP);
    let card_width = column_width(columns, width, CARD_GAP);

    let mut lines = Vec::new();
    for (i, row) in cards.chunks(columns).enumerate() {
        if i > 0 {
            lines.push(blank());
        }
        let row: Vec<&CardView> = row.iter().collect();
        lines.extend(paint_card_row(&row, card_width, theme));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;
    use deckscroll_core::icons::IconRegistry;
    use deckscroll_core::render::StatusTag;

    fn agent(title: &str, body: &str) -> CardView {
        CardView::Agent(AgentCardView {
            icon: IconRegistry::builtin().resolve("brain"),
            title: title.to_string(),
            body: body.to_string(),
            inputs: vec!["briefing".to_string()],
            outputs: vec!["copy".to_string(), "ads".to_string()],
            status: Some(StatusTag {
                label: "Active".to_string(),
                tone: StatusTone::Active,
            }),
        })
    }

    fn doc(title: &str) -> CardView {
        CardView::Doc(DocCardView {
            icon: IconRegistry::builtin().resolve("file-text"),
            title: title.to_string(),
            body: String::new(),
        })
    }

    #[test]
    fn test_card_has_fixed_width_and_status() {
        let theme = THEME_REGISTRY.get_or_default("deck");
        let lines = paint_card(&agent("Writer", "Writes every landing page"), 30, theme);

        assert!(lines.iter().all(|l| l.width() == 30));
        let top = lines[0].to_string();
        assert!(top.starts_with('╭') && top.contains("Active"));
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.contains("in  briefing")));
        assert!(text.iter().any(|l| l.contains("out copy · ads")));
    }

    #[test]
    fn test_row_shares_height() {
        let theme = THEME_REGISTRY.get_or_default("deck");
        let a = agent("Long", "a body that wraps across several lines in a narrow card");
        let b = doc("Short");
        let lines = paint_card_row(&[&a, &b], 26, theme);

        let last = lines.last().map(|l| l.to_string()).unwrap_or_default();
        assert_eq!(last.matches('╰').count(), 2);
    }

    #[test]
    fn test_grid_reduces_columns_to_fit() {
        let theme = THEME_REGISTRY.get_or_default("deck");
        let cards = vec![doc("a"), doc("b"), doc("c")];
        let narrow = paint_card_grid(&cards, 3, 30, theme);
        let tops = narrow.iter().filter(|l| l.to_string().contains('╭')).count();
        assert_eq!(tops, 3);

        let wide = paint_card_grid(&cards, 3, 90, theme);
        assert_eq!(wide[0].to_string().matches('╭').count(), 3);
    }
}

//! Painting for each view node kind

use deckscroll_core::carousel::CarouselState;
use deckscroll_core::document::{Header, Link, Metric, TwoColumn};
use deckscroll_core::icons::IconRegistry;
use deckscroll_core::render::bespoke::Feature;
use deckscroll_core::render::{
    CarouselView, GridView, Hero, PlatformDiagram, PlatformFeatures, StepperView, Timeline,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::cards::{paint_card_grid, paint_card_row, CARD_GAP, MIN_CARD_WIDTH};
use super::compose::{
    blank, center, center_block, column_width, compose_columns, fit_columns, indent, pad_line,
};
use super::PaintContext;
use crate::tui::utils::{display_width, pad_to_width, wrap_text};

/// Widest a prose block is allowed to get
const PROSE_WIDTH: usize = 72;

/// Width of the timeline, stepper and diagram blocks
const NARROW_BLOCK_WIDTH: usize = 60;

/// Minimum width before a two-column layout goes side by side
const TWO_COLUMN_MIN_WIDTH: usize = 60;

const MIN_METRIC_WIDTH: usize = 16;

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn centered_text(text: &str, width: usize, wrap: usize, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, wrap.min(width).max(1))
        .into_iter()
        .map(|line| center(Line::from(Span::styled(line, style)), width))
        .collect()
}

fn glyph(icons: &IconRegistry, key: &str) -> String {
    icons.resolve(key).glyph
}

pub fn paint_header(header: &Header, ctx: &PaintContext<'_>) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let mut lines = centered_text(&header.title, ctx.width, ctx.width, bold(theme.title_color));
    if let Some(subtitle) = &header.subtitle {
        lines.push(blank());
        lines.extend(centered_text(
            subtitle,
            ctx.width,
            PROSE_WIDTH,
            Style::default().fg(theme.dim_color),
        ));
    }
    lines
}

pub fn paint_hero(hero: &Hero, ctx: &PaintContext<'_>) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let badge_width = 16;
    let per_row = (ctx.width.saturating_sub(4) / badge_width).clamp(1, 3);
    let block_width = (badge_width * per_row + 4).min(ctx.width);

    let badge = |icon: &str, label: &str, color: Color| {
        Line::from(vec![
            Span::styled(format!("{} ", glyph(ctx.icons, icon)), Style::default().fg(theme.accent_color)),
            Span::styled(label.to_string(), Style::default().fg(color)),
        ])
    };

    let mut body = Vec::new();
    for row in hero.modules.chunks(per_row) {
        let columns = row
            .iter()
            .map(|b| vec![badge(b.icon, b.label, theme.text_color)])
            .collect();
        body.extend(compose_columns(columns, badge_width, 0));
    }

    let mut lines = super::cards::frame(
        body,
        block_width,
        0,
        theme.accent_color,
        Some(("platform".to_string(), bold(theme.title_color))),
    );
    let tools: Vec<Span<'static>> = hero
        .tools
        .iter()
        .flat_map(|b| badge(b.icon, b.label, theme.dim_color).spans.into_iter().chain([Span::raw("   ")]))
        .collect();
    lines.push(pad_line(center(Line::from(tools), block_width), block_width));

    center_block(lines, block_width, ctx.width)
}

pub fn paint_timeline(timeline: &Timeline, ctx: &PaintContext<'_>) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let block_width = NARROW_BLOCK_WIDTH.min(ctx.width);
    let bar_width = block_width.saturating_sub(8).max(4);

    let mut lines = Vec::new();
    for (i, stage) in timeline.stages.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(Span::styled("  ↓", Style::default().fg(theme.dim_color))));
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyph(ctx.icons, stage.icon)), Style::default().fg(theme.accent_color)),
            Span::styled(stage.title.to_string(), bold(theme.title_color)),
            Span::raw("  "),
            Span::styled(stage.value.to_string(), bold(theme.text_color)),
        ]));
        for line in wrap_text(stage.description, block_width.saturating_sub(2)) {
            lines.push(indent(
                Line::from(Span::styled(line, Style::default().fg(theme.dim_color))),
                2,
            ));
        }
        let filled = bar_width * usize::from(stage.percentage.min(100)) / 100;
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("█".repeat(filled), Style::default().fg(theme.accent_color)),
            Span::styled("░".repeat(bar_width - filled), Style::default().fg(theme.scrollbar_bg_color)),
            Span::styled(format!(" {:>3}%", stage.percentage), Style::default().fg(theme.dim_color)),
        ]));
    }

    let mut lines = center_block(lines, block_width, ctx.width);
    lines.push(blank());

    let mut summary = Vec::new();
    for (i, item) in timeline.summary.iter().enumerate() {
        if i > 0 {
            summary.push(Span::styled("   ·   ", Style::default().fg(theme.border_color)));
        }
        summary.push(Span::styled(format!("{} ", item.label), Style::default().fg(theme.dim_color)));
        summary.push(Span::styled(item.value.to_string(), bold(theme.accent_color)));
    }
    let summary = Line::from(summary);
    if summary.width() <= ctx.width {
        lines.push(center(summary, ctx.width));
    } else {
        for item in timeline.summary {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", item.label), Style::default().fg(theme.dim_color)),
                Span::styled(item.value.to_string(), bold(theme.accent_color)),
            ]));
        }
    }
    lines
}

pub fn paint_platform_diagram(diagram: &PlatformDiagram, ctx: &PaintContext<'_>) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let block_width = NARROW_BLOCK_WIDTH.min(ctx.width);
    let node_label = |id: &str| {
        diagram
            .node(id)
            .map(|n| format!("{} {}", glyph(ctx.icons, n.icon), n.label))
            .unwrap_or_else(|| id.to_string())
    };

    let mut lines = Vec::new();
    for edge in diagram.edges {
        let from = pad_to_width(&node_label(edge.from), 18);
        lines.push(Line::from(vec![
            Span::styled(from, bold(theme.title_color)),
            Span::styled(format!(" ─{}─▶ ", edge.label), Style::default().fg(theme.dim_color)),
            Span::styled(node_label(edge.to), Style::default().fg(theme.text_color)),
        ]));
    }
    lines.push(blank());
    for node in diagram.nodes {
        let label = pad_to_width(&format!("{} {}", glyph(ctx.icons, node.icon), node.label), 18);
        lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(theme.accent_color)),
            Span::styled(node.description.to_string(), Style::default().fg(theme.dim_color)),
        ]));
    }

    let width = lines.iter().map(Line::width).max().unwrap_or(0).min(block_width);
    center_block(lines, width, ctx.width)
}

pub fn paint_platform_features(features: &PlatformFeatures, ctx: &PaintContext<'_>) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let mut lines = centered_text(features.heading, ctx.width, ctx.width, bold(theme.title_color));
    lines.push(blank());

    let columns = fit_columns(features.features.len(), ctx.width, MIN_CARD_WIDTH, CARD_GAP);
    let col_width = column_width(columns, ctx.width, CARD_GAP);

    let feature_lines = |f: &Feature| {
        let mut out = vec![Line::from(vec![
            Span::styled(format!("{} ", f.number), bold(theme.accent_color)),
            Span::styled(format!("{} ", glyph(ctx.icons, f.icon)), Style::default().fg(theme.accent_color)),
            Span::styled(f.title.to_string(), bold(theme.text_color)),
        ])];
        for line in wrap_text(f.description, col_width.saturating_sub(3).max(1)) {
            out.push(indent(Line::from(Span::styled(line, Style::default().fg(theme.dim_color))), 3));
        }
        out
    };

    for (i, row) in features.features.chunks(columns).enumerate() {
        if i > 0 {
            lines.push(blank());
        }
        lines.extend(compose_columns(row.iter().map(&feature_lines).collect(), col_width, CARD_GAP));
    }
    lines
}

pub fn paint_two_column(layout: &TwoColumn, ctx: &PaintContext<'_>) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let side_by_side = ctx.width >= TWO_COLUMN_MIN_WIDTH;
    let col_width = if side_by_side {
        column_width(2, ctx.width, 4)
    } else {
        ctx.width
    };

    let mut left = Vec::new();
    if !layout.title.is_empty() {
        for line in wrap_text(&layout.title, col_width) {
            left.push(Line::from(Span::styled(line, bold(theme.title_color))));
        }
        left.push(blank());
    }
    for line in wrap_text(&layout.body, col_width) {
        left.push(Line::from(Span::styled(line, Style::default().fg(theme.text_color))));
    }

    let mut right = Vec::new();
    for item in &layout.items {
        for (i, line) in wrap_text(item, col_width.saturating_sub(2).max(1)).into_iter().enumerate() {
            let bullet = if i == 0 { "• " } else { "  " };
            right.push(Line::from(vec![
                Span::styled(bullet, Style::default().fg(theme.accent_color)),
                Span::styled(line, Style::default().fg(theme.text_color)),
            ]));
        }
    }

    if side_by_side {
        compose_columns(vec![left, right], col_width, 4)
    } else {
        let mut lines = left;
        if !right.is_empty() {
            lines.push(blank());
            lines.extend(right);
        }
        lines
    }
}

pub fn paint_grid(grid: &GridView, ctx: &PaintContext<'_>) -> Vec<Line<'static>> {
    paint_card_grid(&grid.cards, usize::from(grid.columns), ctx.width, ctx.theme)
}

/// Visible cards for the carousel's current position, plus a position
/// indicator row
pub fn paint_carousel(carousel: &CarouselView, state: Option<&CarouselState>, ctx: &PaintContext<'_>) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    if carousel.cards.is_empty() {
        return Vec::new();
    }

    let per_view = fit_columns(ctx.per_view.max(1), ctx.width, MIN_CARD_WIDTH, CARD_GAP);
    let fallback = CarouselState::new(carousel.cards.len(), carousel.options);
    let state = state.unwrap_or(&fallback);

    let window = state.visible_window(per_view);
    let card_width = column_width(window.len(), ctx.width, CARD_GAP);
    let cards: Vec<_> = window.iter().filter_map(|&i| carousel.cards.get(i)).collect();
    let mut lines = paint_card_row(&cards, card_width, theme);

    let arrow = |enabled: bool, s: &'static str| {
        let color = if enabled { theme.accent_color } else { theme.border_color };
        Span::styled(s, bold(color))
    };
    let mut indicator = vec![arrow(state.can_scroll_prev(), "‹  ")];
    for i in 0..state.len() {
        let (dot, color) = if i == state.index() {
            ("●", theme.accent_color)
        } else {
            ("○", theme.dim_color)
        };
        indicator.push(Span::styled(dot, Style::default().fg(color)));
    }
    indicator.push(arrow(state.can_scroll_next(), "  ›"));
    lines.push(blank());
    lines.push(center(Line::from(indicator), ctx.width));
    lines
}

pub fn paint_stepper(stepper: &StepperView, ctx: &PaintContext<'_>) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let block_width = NARROW_BLOCK_WIDTH.min(ctx.width);
    let text_width = block_width.saturating_sub(5).max(1);

    let mut lines = Vec::new();
    for (i, step) in stepper.steps.iter().enumerate() {
        if i > 0 {
            let connector = stepper.connector(i - 1);
            lines.push(Line::from(vec![
                Span::styled("  │ ", Style::default().fg(theme.border_color)),
                Span::styled(
                    connector.map(str::to_string).unwrap_or_default(),
                    Style::default().fg(theme.dim_color).add_modifier(Modifier::ITALIC),
                ),
            ]));
        }
        let badge = format!(" {} ", step.index);
        let badge_width = display_width(&badge);
        for (j, line) in wrap_text(&step.title, text_width).into_iter().enumerate() {
            let lead = if j == 0 {
                Span::styled(badge.clone(), Style::default().fg(theme.bg_color).bg(theme.accent_color))
            } else {
                Span::raw(" ".repeat(badge_width))
            };
            lines.push(Line::from(vec![lead, Span::raw(" "), Span::styled(line, bold(theme.text_color))]));
        }
        if let Some(caption) = &step.caption {
            for line in wrap_text(caption, text_width) {
                lines.push(indent(
                    Line::from(Span::styled(line, Style::default().fg(theme.dim_color))),
                    badge_width + 1,
                ));
            }
        }
    }
    center_block(lines, block_width, ctx.width)
}

pub fn paint_metrics(metrics: &[Metric], ctx: &PaintContext<'_>) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    if metrics.is_empty() {
        return Vec::new();
    }
    let columns = fit_columns(metrics.len(), ctx.width, MIN_METRIC_WIDTH, CARD_GAP);
    let col_width = column_width(columns, ctx.width, CARD_GAP);

    let metric_lines = |m: &Metric| {
        let mut out = centered_text(&m.value, col_width, col_width, bold(theme.accent_color));
        out.extend(centered_text(
            &m.caption,
            col_width,
            col_width,
            Style::default().fg(theme.dim_color),
        ));
        out
    };

    let mut lines = Vec::new();
    for (i, row) in metrics.chunks(columns).enumerate() {
        if i > 0 {
            lines.push(blank());
        }
        lines.extend(compose_columns(row.iter().map(&metric_lines).collect(), col_width, CARD_GAP));
    }
    lines
}

pub fn paint_teaser(text: &str, ctx: &PaintContext<'_>) -> Vec<Line<'static>> {
    centered_text(
        text,
        ctx.width,
        PROSE_WIDTH,
        Style::default()
            .fg(ctx.theme.dim_color)
            .add_modifier(Modifier::ITALIC),
    )
}

pub fn paint_tagline(text: &str, ctx: &PaintContext<'_>) -> Vec<Line<'static>> {
    centered_text(text, ctx.width, PROSE_WIDTH, bold(ctx.theme.title_color))
}

pub fn paint_cta(link: &Link, ctx: &PaintContext<'_>) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let button = Line::from(Span::styled(
        format!("  {} →  ", link.label),
        Style::default()
            .fg(theme.bg_color)
            .bg(theme.accent_color)
            .add_modifier(Modifier::BOLD),
    ));
    vec![center(button, ctx.width)]
}

//! Section painting
//!
//! Turns a rendered [`SectionView`] into styled terminal lines at a given
//! width. The painted line count is the section's measured height.

mod blocks;
mod cache;
mod cards;
mod compose;

pub use cache::PaintCache;

use deckscroll_core::carousel::CarouselState;
use deckscroll_core::icons::IconRegistry;
use deckscroll_core::render::{SectionView, ViewNode};
use ratatui::text::Line;

use crate::tui::themes::Theme;

/// Everything painting depends on besides the section itself
pub struct PaintContext<'a> {
    pub theme: &'a Theme,
    pub icons: &'a IconRegistry,
    /// Text width in columns
    pub width: usize,
    /// Cards per carousel page
    pub per_view: usize,
}

/// Paint one section. Blocks are separated by a blank row, with one blank
/// row of top padding.
pub fn paint_section(
    view: &SectionView,
    carousel: Option<&CarouselState>,
    ctx: &PaintContext<'_>,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    for node in &view.nodes {
        let painted = paint_node(node, carousel, ctx);
        if painted.is_empty() {
            continue;
        }
        lines.extend(painted);
        lines.push(Line::default());
    }
    lines
}

fn paint_node(node: &ViewNode, carousel: Option<&CarouselState>, ctx: &PaintContext<'_>) -> Vec<Line<'static>> {
    match node {
        ViewNode::Hero(hero) => blocks::paint_hero(hero, ctx),
        ViewNode::Header(header) => blocks::paint_header(header, ctx),
        ViewNode::Timeline(timeline) => blocks::paint_timeline(timeline, ctx),
        ViewNode::PlatformDiagram(diagram) => blocks::paint_platform_diagram(diagram, ctx),
        ViewNode::PlatformFeatures(features) => blocks::paint_platform_features(features, ctx),
        ViewNode::TwoColumn(layout) => blocks::paint_two_column(layout, ctx),
        ViewNode::Grid(grid) | ViewNode::Agents(grid) => blocks::paint_grid(grid, ctx),
        ViewNode::Carousel(view) => blocks::paint_carousel(view, carousel, ctx),
        ViewNode::Stepper(stepper) => blocks::paint_stepper(stepper, ctx),
        ViewNode::Metrics(metrics) => blocks::paint_metrics(metrics, ctx),
        ViewNode::Teaser(text) => blocks::paint_teaser(text, ctx),
        ViewNode::Tagline(text) => blocks::paint_tagline(text, ctx),
        ViewNode::Cta(link) => blocks::paint_cta(link, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;
    use deckscroll_core::render::render_section;
    use deckscroll_core::Document;

    fn painted_text(json: &str, width: usize) -> Vec<String> {
        let doc = Document::from_json_str(json).unwrap();
        let icons = IconRegistry::builtin();
        let view = render_section(&doc.sections[0], &icons);
        let ctx = PaintContext {
            theme: THEME_REGISTRY.get_or_default("deck"),
            icons: &icons,
            width,
            per_view: 2,
        };
        paint_section(&view, None, &ctx)
            .iter()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn test_lines_fit_width() {
        let json = r#"{"sections": [{
            "id": "everything",
            "header": {"title": "A fairly long section title", "subtitle": "And a subtitle that goes on"},
            "layout": {"left": {"title": "Why", "body": "Because it matters a lot"}, "right": {"items": ["one", "two"]}},
            "grid": {"columns": 3, "cards": [{"title": "A"}, {"component": "AgentCard", "title": "B", "chipsIn": ["x"]}]},
            "carousel": {"items": [{"title": "C1"}, {"title": "C2"}, {"title": "C3"}]},
            "stepper": {"steps": [{"title": "Plan"}, {"title": "Ship"}], "connectors": ["then"]},
            "metrics": {"items": [{"value": "3x", "caption": "faster"}, {"value": "40%", "caption": "cheaper"}]},
            "teaser": "Coming next",
            "tagline": "Built to scale",
            "cta": {"href": "/next", "label": "Continue"}
        }]}"#;
        for width in [30, 60, 100] {
            for line in painted_text(json, width) {
                assert!(
                    crate::tui::utils::display_width(&line) <= width,
                    "line wider than {}: {:?}",
                    width,
                    line
                );
            }
        }
    }

    #[test]
    fn test_bespoke_content_is_painted() {
        let text = painted_text(r#"{"sections": [{"id": "intro"}]}"#, 80).join("\n");
        assert!(text.contains("Traffic"));
        assert!(text.contains("ROI"));

        let text = painted_text(r#"{"sections": [{"id": "model"}]}"#, 80).join("\n");
        assert!(text.contains("Templates"));
        assert!(text.contains("Smart orchestration"));
    }

    #[test]
    fn test_carousel_shows_position() {
        let text = painted_text(
            r#"{"sections": [{"id": "c", "carousel": {"items": [{"title": "One"}, {"title": "Two"}, {"title": "Three"}]}}]}"#,
            80,
        )
        .join("\n");
        assert!(text.contains("One"));
        assert!(text.contains("Two"));
        assert!(!text.contains("Three"));
        assert!(text.contains("●○○"));
    }

    #[test]
    fn test_empty_section_is_padding_only() {
        let lines = painted_text(r#"{"sections": [{"id": "nothing"}]}"#, 40);
        assert_eq!(lines, vec![String::new()]);
    }
}

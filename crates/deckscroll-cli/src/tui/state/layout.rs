//! Layout State - screen areas recorded each frame
//!
//! Written during rendering, read by mouse hit testing.

use ratatui::layout::Rect;

/// Screen split for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAreas {
    pub progress: Rect,
    pub content: Rect,
    pub minimap: Option<Rect>,
    pub nav_bar: Rect,
}

impl FrameAreas {
    /// Progress bar on top, nav bar at the bottom, content in between with
    /// the minimap panel docked right when it has any width.
    pub fn split(area: Rect, minimap_width: u16) -> Self {
        let progress = Rect::new(area.x, area.y, area.width, area.height.min(1));
        let nav_y = area.y + area.height.saturating_sub(1);
        let nav_bar = Rect::new(area.x, nav_y, area.width, area.height.saturating_sub(1).min(1));

        let body_y = progress.y + progress.height;
        let body_height = area.height.saturating_sub(progress.height + nav_bar.height);
        let minimap_width = minimap_width.min(area.width / 2);

        let content = Rect::new(
            area.x,
            body_y,
            area.width.saturating_sub(minimap_width),
            body_height,
        );
        let minimap = (minimap_width > 0).then(|| {
            Rect::new(
                area.x + content.width,
                body_y,
                minimap_width,
                body_height,
            )
        });

        Self {
            progress,
            content,
            minimap,
            nav_bar,
        }
    }
}

/// Scrollbar being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Content,
    Minimap,
}

/// Cached layout areas for hit testing
#[derive(Debug, Default)]
pub struct LayoutState {
    /// Document content area
    pub content_area: Option<Rect>,
    /// Content scrollbar track
    pub content_scrollbar_area: Option<Rect>,
    /// Minimap panel bounds
    pub minimap_area: Option<Rect>,
    /// Rows holding minimap entries, one entry per row
    pub minimap_entries_area: Option<Rect>,
    /// Minimap scrollbar track
    pub minimap_scrollbar_area: Option<Rect>,
    /// "Back" link in the nav bar
    pub nav_back_area: Option<Rect>,
    /// "Next" link in the nav bar
    pub nav_next_area: Option<Rect>,
    /// Active scrollbar drag, set on press and cleared on release
    pub dragging: Option<DragTarget>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_minimap() {
        let areas = FrameAreas::split(Rect::new(0, 0, 120, 40), 30);
        assert_eq!(areas.progress, Rect::new(0, 0, 120, 1));
        assert_eq!(areas.nav_bar, Rect::new(0, 39, 120, 1));
        assert_eq!(areas.content, Rect::new(0, 1, 90, 38));
        assert_eq!(areas.minimap, Some(Rect::new(90, 1, 30, 38)));
    }

    #[test]
    fn test_split_without_minimap() {
        let areas = FrameAreas::split(Rect::new(0, 0, 80, 24), 0);
        assert_eq!(areas.content.width, 80);
        assert_eq!(areas.minimap, None);
    }
}

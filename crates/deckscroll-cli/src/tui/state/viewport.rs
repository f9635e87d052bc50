//! Viewport State - scroll position over the painted document
//!
//! Owns the document scroll offset and its bounds, plus the optional
//! smooth-scroll animation toward a jump target.

use deckscroll_core::minimap::{AnchorNavigator, ScrollBehavior};
use deckscroll_core::tracking::{DocumentLayout, Viewport};
use deckscroll_core::SectionKey;

/// Manages the scroll offset of the document view
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    /// Document row at the top of the view
    pub offset: u32,
    /// Maximum scroll offset for bounds checking
    pub max_scroll: u32,
    /// Visible rows
    pub height: u32,
    /// Pending smooth-scroll target
    target: Option<u32>,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll up by the given amount, cancelling any animation
    pub fn scroll_up(&mut self, amount: u32) {
        self.target = None;
        self.offset = self.offset.saturating_sub(amount);
    }

    /// Scroll down by the given amount, cancelling any animation
    pub fn scroll_down(&mut self, amount: u32) {
        self.target = None;
        self.offset = self.offset.saturating_add(amount).min(self.max_scroll);
    }

    /// Jump to a specific line
    pub fn scroll_to_line(&mut self, line: u32) {
        self.target = None;
        self.offset = line.min(self.max_scroll);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to_line(0);
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_to_line(self.max_scroll);
    }

    /// Page size: the visible height minus two rows of overlap
    pub fn page(&self) -> u32 {
        self.height.saturating_sub(2).max(1)
    }

    /// Start a smooth scroll toward `line`
    pub fn animate_to(&mut self, line: u32) {
        let line = line.min(self.max_scroll);
        self.target = (line != self.offset).then_some(line);
    }

    /// Advance the smooth scroll by one frame.
    /// Returns true if the offset moved.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        // Adaptive speed: faster when far from target
        let remaining = target.abs_diff(self.offset);
        let step = (remaining / 5).clamp(2, 24);

        if remaining <= step {
            self.offset = target;
        } else if self.offset < target {
            self.offset += step;
        } else {
            self.offset -= step;
        }

        if self.offset == target {
            self.target = None;
        }
        true
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Update bounds from the document and view heights
    pub fn update_max_scroll(&mut self, total_lines: u32, viewport_height: u16) {
        self.height = u32::from(viewport_height);
        self.max_scroll = total_lines.saturating_sub(self.height);

        if self.offset > self.max_scroll {
            self.offset = self.max_scroll;
        }
        if let Some(target) = self.target {
            self.target = Some(target.min(self.max_scroll));
        }
    }

    /// Tracker-facing viewport
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.offset, self.height)
    }
}

/// Anchor navigation over the measured layout and this viewport
pub struct ViewportNavigator<'a> {
    pub layout: Option<&'a DocumentLayout>,
    pub viewport: &'a mut ViewportState,
    /// Honor smooth requests; jumps land instantly otherwise
    pub smooth: bool,
}

impl AnchorNavigator for ViewportNavigator<'_> {
    fn locate(&self, key: &SectionKey) -> Option<u32> {
        self.layout?.anchor(key)
    }

    fn scroll_to(&mut self, offset: u32, behavior: ScrollBehavior) {
        match behavior {
            ScrollBehavior::Smooth if self.smooth => self.viewport.animate_to(offset),
            _ => self.viewport.scroll_to_line(offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(total: u32, height: u16) -> ViewportState {
        let mut state = ViewportState::new();
        state.update_max_scroll(total, height);
        state
    }

    #[test]
    fn test_scroll_bounds() {
        let mut state = viewport(100, 20);
        assert_eq!(state.max_scroll, 80);

        state.scroll_up(5);
        assert_eq!(state.offset, 0);
        state.scroll_down(500);
        assert_eq!(state.offset, 80);

        state.update_max_scroll(50, 20);
        assert_eq!(state.offset, 30);
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut state = viewport(1000, 20);
        state.animate_to(500);

        let mut frames = 0;
        while state.tick() {
            frames += 1;
            assert!(frames < 200, "animation did not settle");
        }
        assert_eq!(state.offset, 500);
        assert!(!state.is_animating());

        state.animate_to(3);
        while state.tick() {}
        assert_eq!(state.offset, 3);
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut state = viewport(1000, 20);
        state.animate_to(900);
        state.tick();
        state.scroll_up(1);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_navigator_honors_smooth_flag() {
        let layout = DocumentLayout::sequential([("a", 40), ("b", 40)]);
        let mut state = viewport(80, 20);

        let mut nav = ViewportNavigator {
            layout: Some(&layout),
            viewport: &mut state,
            smooth: false,
        };
        assert_eq!(nav.locate(&"b".into()), Some(40));
        nav.scroll_to(40, ScrollBehavior::Smooth);
        assert_eq!(state.offset, 40);

        let mut nav = ViewportNavigator {
            layout: Some(&layout),
            viewport: &mut state,
            smooth: true,
        };
        nav.scroll_to(0, ScrollBehavior::Smooth);
        assert!(state.is_animating());
        assert_eq!(state.offset, 40);
    }
}

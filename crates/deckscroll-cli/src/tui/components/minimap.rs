//! Minimap panel component
//!
//! Renders the collapsible right-hand section index: one row per section,
//! the active section highlighted. Uses caching to avoid rebuilding rows
//! every frame.

use std::hash::{Hash, Hasher};

use deckscroll_core::minimap::Minimap;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use super::scrollbars::render_scrollbar;
use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Panel width when fully expanded
pub const MINIMAP_WIDTH: u16 = 30;

/// Minimum terminal width to show the panel
pub const MIN_TERMINAL_WIDTH: u16 = 80;

/// Horizontal padding inside the panel
const PAD_X: u16 = 1;

/// Rows above the entries: heading and separator
const HEADING_ROWS: u16 = 2;

/// Result of rendering the minimap panel
pub struct MinimapRenderResult {
    /// Rows holding entries, one entry per row starting at `scroll_offset`
    pub entries_area: Option<Rect>,
    /// Scrollbar area (if scrolling is needed)
    pub scrollbar_area: Option<Rect>,
}

impl MinimapRenderResult {
    fn empty() -> Self {
        Self {
            entries_area: None,
            scrollbar_area: None,
        }
    }
}

/// Minimap panel state with row caching
#[derive(Debug, Clone, Default)]
pub struct MinimapPanelState {
    /// Whether the panel is visible
    pub visible: bool,
    /// Whether the panel has keyboard focus
    pub focused: bool,
    /// Current animated width (0 to MINIMAP_WIDTH)
    pub current_width: u16,
    /// Target width (0 or MINIMAP_WIDTH)
    pub target_width: u16,
    /// First entry shown
    pub scroll_offset: usize,
    /// Entry count (calculated during render)
    pub total_lines: usize,

    cached_lines: Vec<Line<'static>>,
    cached_hash: u64,
}

impl MinimapPanelState {
    /// Panel starting open or closed, without animation
    pub fn new(visible: bool) -> Self {
        let width = if visible { MINIMAP_WIDTH } else { 0 };
        Self {
            visible,
            current_width: width,
            target_width: width,
            ..Self::default()
        }
    }

    /// Toggle panel visibility
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.target_width = if self.visible { MINIMAP_WIDTH } else { 0 };
        if !self.visible {
            self.focused = false;
        }
    }

    /// Animate width towards target.
    /// Returns true if animation is still in progress
    pub fn tick(&mut self) -> bool {
        if self.current_width == self.target_width {
            return false;
        }

        // Adaptive animation speed: faster when far from target
        let remaining = self.target_width.abs_diff(self.current_width);
        let step = (remaining / 5).clamp(2, 8);

        if self.current_width < self.target_width {
            self.current_width = (self.current_width + step).min(self.target_width);
        } else {
            self.current_width = self.current_width.saturating_sub(step);
            if self.current_width < step {
                self.current_width = self.target_width;
            }
        }

        self.current_width != self.target_width
    }

    /// Width to reserve given the terminal width
    pub fn width(&self, terminal_width: u16) -> u16 {
        if terminal_width < MIN_TERMINAL_WIDTH {
            0
        } else {
            self.current_width
        }
    }

    pub fn is_animating(&self) -> bool {
        self.current_width != self.target_width
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, visible_height: usize) {
        let max_offset = self.total_lines.saturating_sub(visible_height);
        if self.scroll_offset < max_offset {
            self.scroll_offset += 1;
        }
    }

    /// Keep entry `index` inside the visible window
    pub fn reveal(&mut self, index: usize, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + visible_height {
            self.scroll_offset = index + 1 - visible_height;
        }
    }

    /// Entry index under a click at row `y`, if any
    pub fn entry_at(&self, y: u16, entries_area: Rect) -> Option<usize> {
        if y < entries_area.y || y >= entries_area.y + entries_area.height {
            return None;
        }
        let index = self.scroll_offset + usize::from(y - entries_area.y);
        (index < self.total_lines).then_some(index)
    }

    /// Handle scrollbar click - jump to position
    pub fn handle_scrollbar_click(&mut self, click_y: u16, area: Rect) {
        let max_offset = self.total_lines.saturating_sub(area.height as usize);
        self.scroll_offset = super::scrollbars::scrollbar_click_offset(click_y, area, max_offset);
    }
}

/// Render the minimap panel
pub fn render_minimap(
    buf: &mut Buffer,
    area: Rect,
    minimap: &Minimap,
    theme: &Theme,
    state: &mut MinimapPanelState,
) -> MinimapRenderResult {
    if area.width < 8 || area.height < 4 {
        return MinimapRenderResult::empty();
    }

    let border_color = if state.focused {
        theme.accent_color
    } else {
        theme.border_color
    };
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_color));
    let inner = block.inner(area);
    block.render(area, buf);

    // Always reserve the scrollbar column to avoid reflow jitter
    let content_width = inner.width.saturating_sub(1);
    let text_width = content_width.saturating_sub(PAD_X * 2) as usize;
    if text_width < 4 || inner.height <= HEADING_ROWS {
        return MinimapRenderResult::empty();
    }

    let heading_style = Style::default()
        .fg(theme.title_color)
        .add_modifier(Modifier::BOLD);
    render_line(
        buf,
        inner.x + PAD_X,
        inner.y,
        inner.x + content_width,
        &Line::from(Span::styled("Sections", heading_style)),
    );
    render_line(
        buf,
        inner.x + PAD_X,
        inner.y + 1,
        inner.x + content_width,
        &Line::from(Span::styled(
            "─".repeat(text_width.min(24)),
            Style::default().fg(theme.border_color),
        )),
    );

    let entries_area = Rect::new(
        inner.x,
        inner.y + HEADING_ROWS,
        content_width,
        inner.height - HEADING_ROWS,
    );
    let visible_height = entries_area.height as usize;

    let hash = hash_minimap(minimap, state.focused, text_width);
    if state.cached_hash != hash || state.cached_lines.len() != minimap.entries().len() {
        state.cached_lines = build_lines(minimap, state.focused, text_width, theme);
        state.cached_hash = hash;

        // Follow the highlight (or the focus) when it changes
        let follow = if state.focused {
            Some(minimap.focused())
        } else {
            minimap.active_index()
        };
        if let Some(index) = follow {
            state.reveal(index, visible_height);
        }
    }
    state.total_lines = state.cached_lines.len();

    let max_offset = state.total_lines.saturating_sub(visible_height);
    if state.scroll_offset > max_offset {
        state.scroll_offset = max_offset;
    }

    let start = state.scroll_offset;
    let end = (start + visible_height).min(state.cached_lines.len());
    for (row, line) in state.cached_lines[start..end].iter().enumerate() {
        let y = entries_area.y + row as u16;
        let index = start + row;
        if state.focused && index == minimap.focused() {
            for x in entries_area.x..entries_area.x + entries_area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(theme.highlight_bg_color);
                }
            }
        }
        render_line(buf, entries_area.x + PAD_X, y, entries_area.x + content_width, line);
    }

    let scrollbar_area = if state.total_lines > visible_height {
        let rect = Rect::new(inner.x + inner.width - 1, entries_area.y, 1, entries_area.height);
        render_scrollbar(
            buf,
            rect,
            state.scroll_offset,
            state.total_lines,
            visible_height,
            theme.accent_color,
            theme.scrollbar_bg_color,
        );
        Some(rect)
    } else {
        None
    };

    MinimapRenderResult {
        entries_area: Some(entries_area),
        scrollbar_area,
    }
}

fn build_lines(minimap: &Minimap, focused: bool, text_width: usize, theme: &Theme) -> Vec<Line<'static>> {
    minimap
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let active = minimap.is_active(i);
            let (marker, marker_color) = if active {
                ("●", theme.accent_color)
            } else {
                ("○", theme.dim_color)
            };
            let title_style = if active {
                Style::default()
                    .fg(theme.title_color)
                    .add_modifier(Modifier::BOLD)
            } else if focused && i == minimap.focused() {
                Style::default().fg(theme.text_color)
            } else {
                Style::default().fg(theme.dim_color)
            };
            let number = format!("{:02} ", i + 1);
            let title_width = text_width.saturating_sub(2 + number.len());
            Line::from(vec![
                Span::styled(format!("{} ", marker), Style::default().fg(marker_color)),
                Span::styled(number, Style::default().fg(theme.border_color)),
                Span::styled(truncate_ellipsis(&entry.title, title_width), title_style),
            ])
        })
        .collect()
}

/// Render a line directly to the buffer, clipped at `max_x`
pub fn render_line(buf: &mut Buffer, x: u16, y: u16, max_x: u16, line: &Line) {
    let mut cx = x;

    for span in &line.spans {
        for ch in span.content.chars() {
            let char_width = ch.width().unwrap_or(1) as u16;
            if cx + char_width > max_x {
                return;
            }
            if let Some(cell) = buf.cell_mut((cx, y)) {
                cell.set_char(ch);
                cell.set_style(span.style);
            }
            cx += char_width;
        }
    }
}

/// Hash of everything the entry rows depend on, for cache invalidation
fn hash_minimap(minimap: &Minimap, focused: bool, width: usize) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    let mut hasher = DefaultHasher::new();
    width.hash(&mut hasher);
    focused.hash(&mut hasher);
    if focused {
        minimap.focused().hash(&mut hasher);
    }
    minimap.active().hash(&mut hasher);
    for entry in minimap.entries() {
        entry.key.hash(&mut hasher);
        entry.title.hash(&mut hasher);
    }
    hasher.finish()
}

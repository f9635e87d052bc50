//! Toast notifications
//!
//! Short-lived messages in the top-right corner: followed links, theme
//! changes, documents that failed to load.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthChar;

use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

const MAX_VISIBLE_TOASTS: usize = 3;

const DEFAULT_DURATION: Duration = Duration::from_secs(4);

const TOAST_WIDTH: u16 = 44;

/// Including borders
const TOAST_HEIGHT: u16 = 3;

const TOAST_GAP: u16 = 1;

/// Rows kept clear above the first toast (progress bar)
const TOP_MARGIN: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn color(self, theme: &Theme) -> Color {
        match self {
            ToastKind::Info => theme.link_color,
            ToastKind::Success => theme.success_color,
            ToastKind::Error => theme.error_color,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "→",
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
    pub created_at: Instant,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration: DEFAULT_DURATION,
            created_at: Instant::now(),
        }
    }

    fn age_fraction(&self) -> f32 {
        self.created_at.elapsed().as_secs_f32() / self.duration.as_secs_f32().max(f32::EPSILON)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Remaining lifetime in `[0, 1]`, drawn as the bottom border
    pub fn remaining(&self) -> f32 {
        (1.0 - self.age_fraction()).clamp(0.0, 1.0)
    }
}

/// Oldest first, capped at [`MAX_VISIBLE_TOASTS`]
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast. Repeating a message on screen restarts its timer
    /// instead of stacking a copy.
    pub fn push(&mut self, toast: Toast) {
        if let Some(shown) = self.toasts.iter_mut().find(|t| t.message == toast.message) {
            shown.created_at = toast.created_at;
            return;
        }
        if self.toasts.len() == MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    /// Drop expired toasts. Returns true if any were removed.
    pub fn tick(&mut self) -> bool {
        let shown = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        shown != self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Newest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev()
    }
}

/// Render queued toasts stacked down from the top-right corner of `area`
pub fn render_toasts(buf: &mut Buffer, area: Rect, queue: &ToastQueue, theme: &Theme) {
    if queue.is_empty() || area.width < TOAST_WIDTH + 2 {
        return;
    }

    let x = area.x + area.width - TOAST_WIDTH - 2;
    for (i, toast) in queue.visible().enumerate() {
        let y = area.y + TOP_MARGIN + i as u16 * (TOAST_HEIGHT + TOAST_GAP);
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        render_toast(buf, Rect::new(x, y, TOAST_WIDTH, TOAST_HEIGHT), toast, theme);
    }
}

fn render_toast(buf: &mut Buffer, area: Rect, toast: &Toast, theme: &Theme) {
    let color = toast.kind.color(theme);
    let border = Style::default().fg(color);
    let left = area.x;
    let right = area.x + area.width - 1;
    let top = area.y;
    let bottom = area.y + area.height - 1;
    let middle = area.y + 1;

    let mut put = |x: u16, y: u16, ch: char, style: Style| {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(style);
        }
    };

    put(left, top, '╭', border);
    put(right, top, '╮', border);
    put(left, middle, '│', border);
    put(right, middle, '│', border);
    put(left, bottom, '╰', border);
    put(right, bottom, '╯', border);

    let body = Style::default().fg(theme.text_color).bg(theme.bg_color);
    let remaining = ((area.width - 2) as f32 * toast.remaining()) as u16;
    for (i, x) in (left + 1..right).enumerate() {
        put(x, top, '─', border);
        put(x, middle, ' ', body);
        if (i as u16) < remaining {
            put(x, bottom, '━', Style::default().fg(color));
        } else {
            put(x, bottom, '─', Style::default().fg(theme.dim_color));
        }
    }

    let mut cx = left + 2;
    for ch in toast.kind.icon().chars() {
        put(cx, middle, ch, body.fg(color));
        cx += ch.width().unwrap_or(1) as u16;
    }
    cx += 1;

    let message = truncate_ellipsis(&toast.message, (area.width - 6) as usize);
    for ch in message.chars() {
        let w = ch.width().unwrap_or(1) as u16;
        if cx + w > right - 1 {
            break;
        }
        put(cx, middle, ch, body);
        cx += w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;

    #[test]
    fn test_queue_dedupes_and_caps() {
        let mut queue = ToastQueue::new();
        let mut first = Toast::info("one");
        first.created_at -= Duration::from_secs(3);
        queue.push(first);
        queue.push(Toast::info("one"));
        assert_eq!(queue.len(), 1);
        // The repeat restarted the timer
        assert!(queue.visible().all(|t| t.remaining() > 0.5));

        for msg in ["two", "three", "four"] {
            queue.push(Toast::success(msg));
        }
        assert_eq!(queue.len(), MAX_VISIBLE_TOASTS);
        let newest: Vec<&str> = queue.visible().map(|t| t.message.as_str()).collect();
        assert_eq!(newest, vec!["four", "three", "two"]);
    }

    #[test]
    fn test_tick_removes_expired() {
        let mut queue = ToastQueue::new();
        let mut toast = Toast::error("gone");
        toast.duration = Duration::ZERO;
        queue.push(toast);
        queue.push(Toast::info("stays"));

        assert!(queue.tick());
        assert_eq!(queue.len(), 1);
        assert!(!queue.tick());
    }

    #[test]
    fn test_render_draws_message() {
        let theme = THEME_REGISTRY.get_or_default("deck");
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        let mut queue = ToastQueue::new();
        queue.push(Toast::info("Next: pricing.json"));

        render_toasts(&mut buf, area, &queue, theme);
        let row: String = (0..80).map(|x| buf[(x, 3)].symbol().to_string()).collect();
        assert!(row.contains("→ Next: pricing.json"));
        assert_eq!(buf[(34, 2)].symbol(), "╭");
    }

    #[test]
    fn test_skipped_when_too_narrow() {
        let theme = THEME_REGISTRY.get_or_default("deck");
        let area = Rect::new(0, 0, 20, 12);
        let mut buf = Buffer::empty(area);
        let mut queue = ToastQueue::new();
        queue.push(Toast::info("hidden"));
        render_toasts(&mut buf, area, &queue, theme);
        assert_eq!(buf[(0, 2)].symbol(), " ");
    }
}

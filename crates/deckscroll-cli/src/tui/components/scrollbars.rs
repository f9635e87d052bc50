//! Scrollbar rendering
//!
//! 1-char wide, filled track with a solid thumb.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// Render a scrollbar into `area` (only its first column is used).
///
/// Visual: ░ (track) and █ (thumb)
pub fn render_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    thumb_color: Color,
    track_color: Color,
) {
    // Clear first so no stale glyphs remain when the scrollbar disappears
    for y in 0..area.height {
        if let Some(cell) = buf.cell_mut((area.x, area.y + y)) {
            cell.set_char(' ');
            cell.set_fg(Color::Reset);
        }
    }

    if total <= visible || area.height == 0 {
        return;
    }

    let height = area.height as usize;

    // Thumb is at least 2 rows for visibility
    let thumb_size = ((visible as f32 / total as f32) * height as f32)
        .max(2.0)
        .min(height as f32)
        .round() as usize;

    let max_offset = total.saturating_sub(visible);
    let thumb_pos = if max_offset > 0 {
        ((offset.min(max_offset) as f32 / max_offset as f32) * (height.saturating_sub(thumb_size)) as f32)
            .round() as usize
    } else {
        0
    };

    for y in 0..height {
        let is_thumb = y >= thumb_pos && y < thumb_pos + thumb_size;
        let (ch, color) = if is_thumb {
            ('█', thumb_color)
        } else {
            ('░', track_color)
        };
        if let Some(cell) = buf.cell_mut((area.x, area.y + y as u16)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

/// Offset for a click on a scrollbar track, scaled over `max_offset`
pub fn scrollbar_click_offset(click_y: u16, area: Rect, max_offset: usize) -> usize {
    if area.height == 0 || max_offset == 0 {
        return 0;
    }
    let relative_y = click_y.saturating_sub(area.y).min(area.height - 1) as f32;
    let span = area.height.saturating_sub(1).max(1) as f32;
    ((relative_y / span) * max_offset as f32).round() as usize
}

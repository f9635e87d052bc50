//! Reading progress bar, one row across the top of the screen

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::tui::themes::Theme;

/// Fill `area`'s first row in proportion to `percent` (clamped to 0..=100)
pub fn render_progress_bar(buf: &mut Buffer, area: Rect, percent: f64, theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let filled = filled_cells(area.width, percent);
    for i in 0..area.width {
        let (ch, style) = if i < filled {
            ('━', Style::default().fg(theme.accent_color))
        } else {
            ('─', Style::default().fg(theme.border_color))
        };
        if let Some(cell) = buf.cell_mut((area.x + i, area.y)) {
            cell.set_char(ch).set_style(style.bg(theme.bg_color));
        }
    }
}

fn filled_cells(width: u16, percent: f64) -> u16 {
    let ratio = percent.clamp(0.0, 100.0) / 100.0;
    (f64::from(width) * ratio).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;

    #[test]
    fn test_filled_cells() {
        assert_eq!(filled_cells(40, 0.0), 0);
        assert_eq!(filled_cells(40, 50.0), 20);
        assert_eq!(filled_cells(40, 100.0), 40);
        assert_eq!(filled_cells(40, 250.0), 40);
        assert_eq!(filled_cells(40, -3.0), 0);
    }

    #[test]
    fn test_render_half() {
        let theme = THEME_REGISTRY.get_or_default("deck");
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        render_progress_bar(&mut buf, area, 50.0, theme);
        assert_eq!(buf[(4, 0)].symbol(), "━");
        assert_eq!(buf[(5, 0)].symbol(), "─");
    }
}

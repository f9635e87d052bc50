//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Default theme: violet accents on near-black
pub fn deck() -> Theme {
    Theme {
        name: "deck".to_string(),
        display_name: "Deck".to_string(),
        bg_color: Color::Rgb(12, 10, 20),
        text_color: Color::Rgb(230, 228, 240),
        dim_color: Color::Rgb(130, 124, 150),
        title_color: Color::Rgb(196, 181, 253),
        accent_color: Color::Rgb(107, 67, 239),
        border_color: Color::Rgb(67, 56, 102),
        link_color: Color::Rgb(167, 139, 250),
        success_color: Color::Rgb(34, 197, 94),
        warning_color: Color::Rgb(234, 179, 8),
        error_color: Color::Rgb(239, 68, 68),
        highlight_bg_color: Color::Rgb(40, 30, 72),
        scrollbar_bg_color: Color::Rgb(30, 26, 44),
        status_bar_bg_color: Color::Rgb(20, 17, 32),
    }
}

pub fn midnight() -> Theme {
    Theme {
        name: "midnight".to_string(),
        display_name: "Midnight".to_string(),
        bg_color: Color::Rgb(13, 17, 23),
        text_color: Color::Rgb(201, 209, 217),
        dim_color: Color::Rgb(110, 118, 129),
        title_color: Color::Rgb(121, 192, 255),
        accent_color: Color::Rgb(59, 130, 246),
        border_color: Color::Rgb(48, 54, 61),
        link_color: Color::Rgb(88, 166, 255),
        success_color: Color::Rgb(63, 185, 80),
        warning_color: Color::Rgb(210, 153, 34),
        error_color: Color::Rgb(248, 81, 73),
        highlight_bg_color: Color::Rgb(22, 38, 62),
        scrollbar_bg_color: Color::Rgb(22, 27, 34),
        status_bar_bg_color: Color::Rgb(22, 27, 34),
    }
}

pub fn paper() -> Theme {
    Theme {
        name: "paper".to_string(),
        display_name: "Paper".to_string(),
        bg_color: Color::Rgb(250, 248, 243),
        text_color: Color::Rgb(40, 38, 48),
        dim_color: Color::Rgb(120, 116, 128),
        title_color: Color::Rgb(76, 29, 149),
        accent_color: Color::Rgb(124, 58, 237),
        border_color: Color::Rgb(214, 208, 224),
        link_color: Color::Rgb(109, 40, 217),
        success_color: Color::Rgb(22, 163, 74),
        warning_color: Color::Rgb(202, 138, 4),
        error_color: Color::Rgb(220, 38, 38),
        highlight_bg_color: Color::Rgb(237, 233, 254),
        scrollbar_bg_color: Color::Rgb(232, 228, 238),
        status_bar_bg_color: Color::Rgb(240, 236, 230),
    }
}

/// Native terminal palette, for terminals without truecolor
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),
        bg_color: Color::Reset,
        text_color: Color::Reset,
        dim_color: Color::DarkGray,
        title_color: Color::White,
        accent_color: Color::Magenta,
        border_color: Color::DarkGray,
        link_color: Color::Cyan,
        success_color: Color::Green,
        warning_color: Color::Yellow,
        error_color: Color::Red,
        highlight_bg_color: Color::DarkGray,
        scrollbar_bg_color: Color::Reset,
        status_bar_bg_color: Color::Reset,
    }
}

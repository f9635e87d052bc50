//! Text measuring, wrapping and truncation in display columns

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Word-wrap text to `max_width` columns. Paragraph breaks are kept; an
/// empty input yields no lines.
pub fn wrap_text(s: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    for paragraph in s.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let options = textwrap::Options::new(max_width).break_words(true);
        lines.extend(
            textwrap::wrap(paragraph.trim_end(), options)
                .into_iter()
                .map(|line| line.into_owned()),
        );
    }
    lines
}

/// Truncate to `max_width` columns, ending with `…` when anything was cut
pub fn truncate_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Right-pad with spaces to exactly `width` columns (truncating if longer)
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current > width {
        return truncate_ellipsis(s, width);
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - current));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| display_width(l) <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_wrap_breaks_long_words_and_keeps_paragraphs() {
        let lines = wrap_text("abcdefghijkl\n\nend", 5);
        assert_eq!(lines, vec!["abcde", "fghij", "kl", "", "end"]);
        assert!(wrap_text("", 5).is_empty());
    }

    #[test]
    fn test_truncate_ellipsis() {
        assert_eq!(truncate_ellipsis("short", 10), "short");
        assert_eq!(truncate_ellipsis("overflowing", 5), "over…");
        assert_eq!(truncate_ellipsis("abc", 0), "");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abc…");
    }
}

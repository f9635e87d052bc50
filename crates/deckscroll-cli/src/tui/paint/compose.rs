//! Line composition helpers: centering, padding and side-by-side columns

use ratatui::text::{Line, Span};

pub fn blank() -> Line<'static> {
    Line::default()
}

fn spaces(n: usize) -> Span<'static> {
    Span::raw(" ".repeat(n))
}

/// Center one line within `width` columns
pub fn center(line: Line<'static>, width: usize) -> Line<'static> {
    let w = line.width();
    if w >= width {
        return line;
    }
    let mut spans = vec![spaces((width - w) / 2)];
    spans.extend(line.spans);
    Line::from(spans)
}

/// Shift a block of lines so the block, `block_width` wide, sits centered
pub fn center_block(lines: Vec<Line<'static>>, block_width: usize, width: usize) -> Vec<Line<'static>> {
    if block_width >= width {
        return lines;
    }
    let pad = (width - block_width) / 2;
    lines.into_iter().map(|line| indent(line, pad)).collect()
}

pub fn indent(line: Line<'static>, pad: usize) -> Line<'static> {
    if pad == 0 {
        return line;
    }
    let mut spans = vec![spaces(pad)];
    spans.extend(line.spans);
    Line::from(spans)
}

/// Pad a line with trailing spaces to `width` columns
pub fn pad_line(mut line: Line<'static>, width: usize) -> Line<'static> {
    let w = line.width();
    if w < width {
        line.spans.push(spaces(width - w));
    }
    line
}

/// Lay out columns side by side, each `col_width` wide with `gap` columns
/// between them. Shorter columns are padded with blank rows.
pub fn compose_columns(columns: Vec<Vec<Line<'static>>>, col_width: usize, gap: usize) -> Vec<Line<'static>> {
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
    (0..rows)
        .map(|row| {
            let mut spans = Vec::new();
            for (i, column) in columns.iter().enumerate() {
                if i > 0 && gap > 0 {
                    spans.push(spaces(gap));
                }
                match column.get(row) {
                    Some(line) => spans.extend(pad_line(line.clone(), col_width).spans),
                    None => spans.push(spaces(col_width)),
                }
            }
            Line::from(spans)
        })
        .collect()
}

/// How many columns of at least `min_width` fit, capped at `wanted`
pub fn fit_columns(wanted: usize, width: usize, min_width: usize, gap: usize) -> usize {
    let fit = (width + gap) / (min_width + gap);
    wanted.min(fit).max(1)
}

/// Column width for `columns` equal columns across `width`
pub fn column_width(columns: usize, width: usize, gap: usize) -> usize {
    let columns = columns.max(1);
    width.saturating_sub(gap * (columns - 1)) / columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'static>]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_center() {
        assert_eq!(center(Line::from("ab"), 6).to_string(), "  ab");
        assert_eq!(center(Line::from("toolong"), 3).to_string(), "toolong");
    }

    #[test]
    fn test_compose_columns_pads_short_columns() {
        let lines = compose_columns(
            vec![
                vec![Line::from("a"), Line::from("bb")],
                vec![Line::from("c")],
            ],
            3,
            1,
        );
        assert_eq!(text(&lines), vec!["a   c  ", "bb     "]);
    }

    #[test]
    fn test_fit_columns() {
        assert_eq!(fit_columns(3, 80, 24, 2), 3);
        assert_eq!(fit_columns(3, 40, 24, 2), 1);
        assert_eq!(fit_columns(6, 10, 24, 2), 1);
        assert_eq!(column_width(3, 80, 2), 25);
    }
}

//! Line-building helpers shared by the section widgets.
//!
//! Sections are laid out as plain lists of [`Line`]s so the page can measure
//! its exact height before rendering. Wrapping, padding, card borders and
//! column grids all work on display width (via `unicode-width`).

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap to `width` display columns.
///
/// Words longer than the width are split. Always returns at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > width {
            for c in word.chars() {
                let cw = c.width().unwrap_or(0);
                if current_width + cw > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += cw;
            }
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap `text` and style every resulting line
pub fn paragraph(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, style)))
        .collect()
}

/// Cut a string to at most `width` display columns
pub fn truncate(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let cw = c.width().unwrap_or(0);
        if used + cw > width {
            break;
        }
        out.push(c);
        used += cw;
    }
    out
}

/// Keep the end of a string, at most `width` display columns
pub fn tail(text: &str, width: usize) -> String {
    let mut kept = Vec::new();
    let mut used = 0;
    for c in text.chars().rev() {
        let cw = c.width().unwrap_or(0);
        if used + cw > width {
            break;
        }
        kept.push(c);
        used += cw;
    }
    kept.into_iter().rev().collect()
}

/// Pad a line with trailing spaces up to `width` columns
pub fn pad_line(mut line: Line<'static>, width: usize, style: Style) -> Line<'static> {
    let current = line.width();
    if current < width {
        line.spans.push(Span::styled(" ".repeat(width - current), style));
    }
    line
}

/// Center a line within `width` columns
pub fn center(mut line: Line<'static>, width: usize) -> Line<'static> {
    let current = line.width();
    if current < width {
        line.spans
            .insert(0, Span::raw(" ".repeat((width - current) / 2)));
    }
    line
}

/// Draw a rounded border around `body`, `width` columns wide overall.
///
/// Body lines must already fit `width - 4` columns.
pub fn boxed(body: Vec<Line<'static>>, width: usize, border: Style) -> Vec<Line<'static>> {
    let width = width.max(4);
    let inner = width - 4;
    let mut out = Vec::with_capacity(body.len() + 2);

    out.push(Line::from(Span::styled(
        format!("╭{}╮", "─".repeat(width - 2)),
        border,
    )));
    for line in body {
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(pad_line(line, inner, Style::default()).spans);
        spans.push(Span::styled(" │", border));
        out.push(Line::from(spans));
    }
    out.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(width - 2)),
        border,
    )));
    out
}

/// Number of grid columns that fit `width` with cards at least `min_card` wide
pub fn column_count(width: usize, min_card: usize, max_columns: usize) -> usize {
    let mut columns = max_columns.max(1);
    while columns > 1 && card_width(width, columns) < min_card {
        columns -= 1;
    }
    columns
}

const GRID_GAP: usize = 2;

fn card_width(width: usize, columns: usize) -> usize {
    width.saturating_sub(GRID_GAP * (columns - 1)) / columns
}

/// Lay items out in rows of cards.
///
/// `build` renders one item at the given card width. Cards in the same row
/// are padded to equal height and joined side by side, with a blank line
/// between rows.
pub fn grid<T>(
    items: &[T],
    width: usize,
    min_card: usize,
    max_columns: usize,
    build: impl Fn(&T, usize) -> Vec<Line<'static>>,
) -> Vec<Line<'static>> {
    let columns = column_count(width, min_card, max_columns);
    let card = card_width(width, columns);
    let mut out = Vec::new();

    for (row_index, row) in items.chunks(columns).enumerate() {
        if row_index > 0 {
            out.push(Line::default());
        }

        let cards: Vec<Vec<Line<'static>>> = row.iter().map(|item| build(item, card)).collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);

        for y in 0..height {
            let mut spans = Vec::new();
            for (i, lines) in cards.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" ".repeat(GRID_GAP)));
                }
                let line = lines.get(y).cloned().unwrap_or_default();
                spans.extend(pad_line(line, card, Style::default()).spans);
            }
            out.push(Line::from(spans));
        }
    }
    out
}

/// Join spans with a separator span between each pair
pub fn join(parts: Vec<Span<'static>>, separator: Span<'static>) -> Line<'static> {
    let mut spans = Vec::with_capacity(parts.len() * 2);
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            spans.push(separator.clone());
        }
        spans.push(part);
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.width() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap("info@aspireukadvisers.co.uk", 8);
        assert!(lines.iter().all(|l| l.width() <= 8));
        assert_eq!(lines.concat(), "info@aspireukadvisers.co.uk");
    }

    #[test]
    fn test_wrap_empty_is_one_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_counts_display_width() {
        let lines = wrap("£12M+ Tax Saved", 6);
        assert_eq!(lines[0], "£12M+");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Aspire UK Advisers", 6), "Aspire");
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn test_tail_keeps_end() {
        assert_eq!(tail("Aspire UK Advisers", 8), "Advisers");
        assert_eq!(tail("abc", 10), "abc");
        assert_eq!(tail("", 3), "");
    }

    #[test]
    fn test_boxed_lines_have_equal_width() {
        let body = vec![Line::from("hello"), Line::from("a longer line")];
        let lines = boxed(body, 20, Style::default());
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.width() == 20));
    }

    #[test]
    fn test_column_count() {
        assert_eq!(column_count(120, 34, 3), 3);
        assert_eq!(column_count(80, 34, 3), 2);
        assert_eq!(column_count(40, 34, 3), 1);
        assert_eq!(column_count(10, 34, 3), 1);
    }

    #[test]
    fn test_grid_joins_rows() {
        let items = ["a", "b", "c"];
        let lines = grid(&items, 20, 9, 2, |s, w| {
            vec![Line::from(s.to_string()), Line::from("-".repeat(w))]
        });
        // Row of two cards (2 lines), blank, row of one card (2 lines)
        assert_eq!(lines.len(), 5);
        assert!(lines[0].to_string().starts_with("a"));
        assert!(lines[0].to_string().contains("b"));
        assert!(lines[2].to_string().trim().is_empty());
        assert!(lines[3].to_string().starts_with("c"));
    }
}

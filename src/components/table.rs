//! Table rendering for a page of records
//!
//! Renders headers, a separator, and one line per row with column alignment.
//! Widths are measured in terminal cells so multi-byte text lines up.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a column may grow before its cells are truncated
const MAX_COLUMN_WIDTH: usize = 40;

const COLUMN_SEPARATOR: &str = " │ ";

/// Builds table lines for one page of a dataset
pub struct TableComponent;

impl TableComponent {
    /// Column widths fitting every header and cell, capped at `MAX_COLUMN_WIDTH`
    pub fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.width());
                }
            }
        }
        for width in &mut widths {
            *width = (*width).min(MAX_COLUMN_WIDTH);
        }
        widths
    }

    /// Build table lines. `selected` highlights one row of `rows`.
    pub fn build_table_lines(
        headers: &[&str],
        rows: &[Vec<String>],
        selected: Option<usize>,
    ) -> Vec<Line<'static>> {
        let widths = Self::column_widths(headers, rows);
        let mut lines = Vec::with_capacity(rows.len() + 2);

        let header_spans: Vec<Span> = headers
            .iter()
            .enumerate()
            .flat_map(|(i, h)| {
                vec![
                    Span::styled(
                        pad(h, widths[i]),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(COLUMN_SEPARATOR),
                ]
            })
            .collect();
        lines.push(Line::from(header_spans));

        let separator: String = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        lines.push(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        )));

        for (row_index, row) in rows.iter().enumerate() {
            let is_selected = selected == Some(row_index);
            let row_spans: Vec<Span> = row
                .iter()
                .enumerate()
                .flat_map(|(i, cell)| {
                    let width = widths.get(i).copied().unwrap_or(10);
                    let mut style = cell_style(cell);
                    if is_selected {
                        style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
                    }
                    vec![
                        Span::styled(pad(cell, width), style),
                        Span::raw(COLUMN_SEPARATOR),
                    ]
                })
                .collect();
            lines.push(Line::from(row_spans));
        }

        lines
    }
}

/// Status words get their badge colour, everything else is plain
fn cell_style(cell: &str) -> Style {
    match cell {
        "Success" | "Completed" => Style::default().fg(Color::Green),
        "Failed" => Style::default().fg(Color::Red),
        "Pending" => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::White),
    }
}

/// Truncate to `width` cells (with an ellipsis) and pad with spaces
pub fn pad(text: &str, width: usize) -> String {
    let fitted = truncate(text, width);
    let fill = width.saturating_sub(fitted.width());
    format!("{}{}", fitted, " ".repeat(fill))
}

/// Cut `text` down to at most `width` cells, ending in "…" when shortened
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

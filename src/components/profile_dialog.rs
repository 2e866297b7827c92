//! Profile editor popup
//!
//! One row per editable field; the highlighted row takes typed input.

use crate::components::centered_popup;
use crate::model::client::ProfileField;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Longest value a profile field accepts
pub const MAX_FIELD_LEN: usize = 64;

const LABEL_WIDTH: usize = 16;

/// Whether `c` may be typed into a profile field
pub fn accepts_char(value: &str, c: char) -> bool {
    !c.is_control() && value.chars().count() < MAX_FIELD_LEN
}

/// Draw the editor. Input editing happens in the App against the modal state.
pub fn draw_profile_editor(frame: &mut Frame, area: Rect, values: &[String], selected: usize) {
    let height = ProfileField::ALL.len() as u16 + 6;
    let popup_area = centered_popup(area, 72, height);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Edit Profile ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Fields
            Constraint::Length(1), // Help
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(field_lines(values, selected)), chunks[0]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(" ↑/↓ ", Style::default().fg(Color::Cyan)),
        Span::raw("Field  "),
        Span::styled(" Enter ", Style::default().fg(Color::Green)),
        Span::raw("Save  "),
        Span::styled(" Esc ", Style::default().fg(Color::Red)),
        Span::raw("Cancel"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}

fn field_lines(values: &[String], selected: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for (index, (field, value)) in ProfileField::ALL.iter().zip(values).enumerate() {
        let active = index == selected;
        let marker = if active { "▶ " } else { "  " };
        let label_style = if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{:width$}", field.label(), width = LABEL_WIDTH),
                label_style,
            ),
            Span::styled(value.clone(), Style::default().fg(Color::White)),
        ];
        if active {
            spans.push(Span::styled("_", Style::default().fg(Color::DarkGray)));
        }
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::client::sample_client;

    #[test]
    fn test_cursor_only_on_selected_field() {
        let values = sample_client().profile_values();
        let lines = field_lines(&values, 2);
        assert_eq!(lines.len(), ProfileField::ALL.len() + 1);

        let with_cursor: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.spans.last().is_some_and(|s| s.content == "_"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(with_cursor, vec![3]);
        assert_eq!(lines[3].spans[2].content, "+91 98765 43210");
    }

    #[test]
    fn test_accepts_printable_characters() {
        assert!(accepts_char("Jane", ' '));
        assert!(accepts_char("Jane", '@'));
        assert!(!accepts_char("Jane", '\t'));
        assert!(!accepts_char(&"x".repeat(MAX_FIELD_LEN), 'y'));
    }
}

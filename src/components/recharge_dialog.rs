//! Wallet recharge prompt

use crate::components::centered_popup;
use crate::services::recharge::PRESET_AMOUNTS;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the prompt. Input editing happens in the App against the modal state.
pub fn draw_recharge(frame: &mut Frame, area: Rect, input: &str) {
    let popup_area = centered_popup(area, 50, 11);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" Recharge Wallet ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Presets
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Amount (USD):",
            Style::default().fg(Color::White),
        ))),
        chunks[0],
    );

    let input_box = Paragraph::new(Line::from(vec![
        Span::styled("$", Style::default().fg(Color::DarkGray)),
        Span::styled(
            input.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("_", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(input_box, chunks[1]);

    frame.render_widget(Paragraph::new(preset_line(input)), chunks[2]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(" Enter ", Style::default().fg(Color::Green)),
        Span::raw("Recharge  "),
        Span::styled(" Tab ", Style::default().fg(Color::Cyan)),
        Span::raw("Preset  "),
        Span::styled(" Esc ", Style::default().fg(Color::Red)),
        Span::raw("Cancel"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

/// Preset amounts, with the one matching the input highlighted
fn preset_line(input: &str) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "Quick pick: ",
        Style::default().fg(Color::DarkGray),
    )];
    for amount in PRESET_AMOUNTS {
        let style = if amount == input {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        spans.push(Span::styled(format!(" ${} ", amount), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_line_highlights_current_amount() {
        let line = preset_line("50");
        let highlighted: Vec<&str> = line
            .spans
            .iter()
            .filter(|s| s.style.bg == Some(Color::Green))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(highlighted, vec![" $50 "]);
    }
}

//! Registration number prompt for the vehicle lookup

use crate::components::centered_popup;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Longest registration number the prompt accepts
pub const MAX_REGISTRATION_LEN: usize = 15;

/// Whether `c` may be typed into the registration prompt
pub fn accepts_char(input: &str, c: char) -> bool {
    input.chars().count() < MAX_REGISTRATION_LEN && (c.is_ascii_alphanumeric() || c == ' ' || c == '-')
}

/// Draw the prompt. Input editing happens in the App against the modal state.
pub fn draw_vehicle_lookup(frame: &mut Frame, area: Rect, input: &str) {
    let popup_area = centered_popup(area, 56, 10);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Vehicle Lookup ")
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
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Input box
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Enter a registration number (e.g. MH12AB1234):",
            Style::default().fg(Color::White),
        ))),
        chunks[0],
    );

    let input_box = Paragraph::new(Line::from(vec![
        Span::styled(
            input.to_uppercase(),
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

    let help = Paragraph::new(Line::from(vec![
        Span::styled(" Enter ", Style::default().fg(Color::Green)),
        Span::raw("Search  "),
        Span::styled(" Esc ", Style::default().fg(Color::Red)),
        Span::raw("Cancel"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

//! Client profile screen
//!
//! Shows the signed-in client's account, contact and billing details.
//! `e` opens the profile editor.

use crate::action::Action;
use crate::component::Component;
use crate::model::ClientInfo;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width of the label column
const LABEL_WIDTH: usize = 18;

pub struct ClientInfoComponent {
    content: Vec<Line<'static>>,
}

impl ClientInfoComponent {
    pub fn new(client: &ClientInfo) -> Self {
        Self {
            content: render_client_info(client),
        }
    }

    /// Rebuild the cached lines after the profile changed
    pub fn set_client(&mut self, client: &ClientInfo) {
        self.content = render_client_info(client);
    }
}

impl Component for ClientInfoComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('e') => Some(Action::OpenProfileEditor),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let paragraph = Paragraph::new(self.content.clone())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Client Info ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
            );
        frame.render_widget(paragraph, area);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper functions
// ─────────────────────────────────────────────────────────────────────────────

fn render_client_info(client: &ClientInfo) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} ({})", client.company, client.account_type),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "═".repeat(48),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (label, value) in client.fields() {
        let value_style = match label {
            "Wallet Balance" => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            "Account Type" => Style::default().fg(Color::Magenta),
            _ => Style::default().fg(Color::White),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:width$}", format!("{}:", label), width = LABEL_WIDTH),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, value_style),
        ]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::client::sample_client;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_edit_key_opens_editor() {
        let mut component = ClientInfoComponent::new(&sample_client());
        let press = |c: &mut ClientInfoComponent, code| {
            c.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
        };
        assert_eq!(press(&mut component, KeyCode::Char('e')), Some(Action::OpenProfileEditor));
        assert_eq!(press(&mut component, KeyCode::Char('x')), None);
    }

    #[test]
    fn test_set_client_refreshes_lines() {
        let mut client = sample_client();
        let mut component = ClientInfoComponent::new(&client);
        client.company = "Acme Mobility".to_string();
        component.set_client(&client);
        assert_eq!(component.content[0].spans[0].content, "Acme Mobility (Pro)");
    }

    #[test]
    fn test_one_line_per_field_after_heading() {
        let client = sample_client();
        let lines = render_client_info(&client);
        assert_eq!(lines.len(), client.fields().len() + 3);

        let balance: String = lines
            .iter()
            .find(|l| {
                l.spans
                    .first()
                    .is_some_and(|s| s.content.contains("Wallet Balance"))
            })
            .map(|l| l.spans[1].content.to_string())
            .unwrap();
        assert_eq!(balance, "$98.50");
    }
}

//! API keys screen

use crate::action::Action;
use crate::component::Component;
use crate::model::ApiKeys;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct KeysComponent {
    keys: ApiKeys,
    /// Show keys in full instead of masked
    pub revealed: bool,
    pub list_state: ListState,
}

impl KeysComponent {
    pub fn new(keys: ApiKeys) -> Self {
        let mut list_state = ListState::default();
        if !keys.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            keys,
            revealed: false,
            list_state,
        }
    }

    pub fn keys(&self) -> &ApiKeys {
        &self.keys
    }

    /// Put a new key at the top of the list and highlight it
    pub fn add_key(&mut self, key: String) {
        self.keys.prepend(key);
        self.list_state.select(Some(0));
    }

    /// Key text as currently displayed
    pub fn display_key(&self, key: &str) -> String {
        if self.revealed {
            key.to_string()
        } else {
            ApiKeys::masked(key)
        }
    }
}

impl Component for KeysComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('g') => Some(Action::GenerateKey),
            KeyCode::Char('s') => Some(Action::ToggleKeyReveal),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextRow => {
                let i = self.list_state.selected().map_or(0, |i| i + 1);
                if i < self.keys.len() {
                    self.list_state.select(Some(i));
                }
            }
            Action::PrevRow => {
                let i = self.list_state.selected().unwrap_or(0);
                self.list_state.select(Some(i.saturating_sub(1)));
            }
            Action::ToggleKeyReveal => self.revealed = !self.revealed,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        let summary = Paragraph::new(Line::from(vec![
            Span::styled("Active keys: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.keys.len().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(" g ", Style::default().fg(Color::Yellow)),
            Span::raw("Generate  "),
            Span::styled(" s ", Style::default().fg(Color::Yellow)),
            Span::raw(if self.revealed { "Hide" } else { "Show" }),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(summary, chunks[0]);

        let items: Vec<ListItem> = self
            .keys
            .keys()
            .iter()
            .enumerate()
            .map(|(i, key)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(self.display_key(key), Style::default().fg(Color::Green)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" API Keys ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_keys_masked_until_revealed() {
        let mut component = KeysComponent::new(ApiKeys::default());
        let key = component.keys().keys()[0].clone();
        assert_ne!(component.display_key(&key), key);
        assert!(component.display_key(&key).starts_with("sk-live-"));

        component.update(Action::ToggleKeyReveal).unwrap();
        assert_eq!(component.display_key(&key), key);
    }

    #[test]
    fn test_add_key_selects_it() {
        let mut component = KeysComponent::new(ApiKeys::default());
        component.update(Action::NextRow).unwrap();
        assert_eq!(component.list_state.selected(), Some(1));

        component.add_key("sk-live-fresh".to_string());
        assert_eq!(component.keys().keys()[0], "sk-live-fresh");
        assert_eq!(component.list_state.selected(), Some(0));
    }

    #[test]
    fn test_generate_key_binding() {
        let mut component = KeysComponent::new(ApiKeys::default());
        let action = component
            .handle_key_event(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::GenerateKey));
    }
}

//! Filter dialog component
//!
//! Two steps: pick which discrete filter to change, then pick its value.

use crate::action::Action;
use crate::component::Component;
use crate::model::table::ALL;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Label of the first entry in the filter list
const CLEAR_ALL: &str = "Clear all filters";

/// What the list currently offers
#[derive(Debug, Clone, PartialEq, Eq)]
enum Stage {
    /// Filter keys, preceded by "Clear all filters"
    Keys(Vec<(&'static str, &'static str)>),
    /// Values for one filter, "All" first
    Values { key: &'static str, label: &'static str },
}

/// What confirming the highlighted entry means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChoice {
    ClearAll,
    Key(&'static str),
    Value { key: &'static str, value: String },
}

pub struct FilterDialog {
    stage: Stage,
    /// Entries shown in the list, in order
    pub entries: Vec<String>,
    /// Value marked as active (● marker)
    pub current: Option<String>,
    pub selected_index: usize,
    pub list_state: ListState,
}

impl Default for FilterDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            stage: Stage::Keys(Vec::new()),
            entries: Vec::new(),
            current: None,
            selected_index: 0,
            list_state,
        }
    }

    /// Offer the filters of the active table. `selections` holds the current
    /// value of each key and is shown next to its label.
    pub fn show_keys(&mut self, keys: Vec<(&'static str, &'static str)>, selections: &[String]) {
        self.entries = std::iter::once(CLEAR_ALL.to_string())
            .chain(
                keys.iter()
                    .zip(selections)
                    .map(|((_, label), value)| format!("{}: {}", label, value)),
            )
            .collect();
        self.current = None;
        self.stage = Stage::Keys(keys);
        self.select(if self.entries.len() > 1 { 1 } else { 0 });
    }

    /// Offer the values of one filter, highlighting the current selection
    pub fn show_values(
        &mut self,
        key: &'static str,
        label: &'static str,
        options: Vec<String>,
        current: &str,
    ) {
        let index = options.iter().position(|o| o == current).unwrap_or(0);
        self.entries = options;
        self.current = Some(current.to_string());
        self.stage = Stage::Values { key, label };
        self.select(index);
    }

    /// Key being edited, `None` while choosing a filter
    pub fn editing_key(&self) -> Option<&'static str> {
        match self.stage {
            Stage::Keys(_) => None,
            Stage::Values { key, .. } => Some(key),
        }
    }

    /// Interpret the highlighted entry
    pub fn choice(&self) -> Option<FilterChoice> {
        match &self.stage {
            Stage::Keys(keys) => {
                if self.selected_index == 0 {
                    Some(FilterChoice::ClearAll)
                } else {
                    keys.get(self.selected_index - 1)
                        .map(|(key, _)| FilterChoice::Key(key))
                }
            }
            Stage::Values { key, .. } => self
                .entries
                .get(self.selected_index)
                .map(|value| FilterChoice::Value {
                    key,
                    value: value.clone(),
                }),
        }
    }

    fn select(&mut self, index: usize) {
        self.selected_index = index;
        self.list_state.select(Some(index));
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < self.entries.len() {
            self.select(self.selected_index + 1);
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.select(self.selected_index - 1);
        }
    }
}

impl Component for FilterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_width = 50u16.min(area.width.saturating_sub(4));
        let content_height = self.entries.len() as u16 + 2;
        let popup_height = (content_height + 6).min(area.height.saturating_sub(4)).max(10);

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Entries
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let (title, header_text) = match &self.stage {
            Stage::Keys(_) => (" Filters ".to_string(), "Choose a filter".to_string()),
            Stage::Values { label, .. } => (
                format!(" Filter by {} ", label),
                format!(
                    "Current: {}",
                    self.current.as_deref().unwrap_or(ALL)
                ),
            ),
        };

        let header = Paragraph::new(Line::from(Span::styled(
            header_text,
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, main_chunks[0]);

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let is_current = self.current.as_deref() == Some(entry.as_str());
                let is_clear = matches!(self.stage, Stage::Keys(_)) && i == 0;
                let style = if is_clear {
                    Style::default().fg(Color::DarkGray)
                } else if is_current {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        if is_current { "● " } else { "  " },
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(entry.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, main_chunks[1], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc/f ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[2]);

        Ok(())
    }
}

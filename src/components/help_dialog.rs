//! Help dialog component
//!
//! Lists the dashboard key bindings.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let dialog_area = centered_popup(area, 64, area.height.saturating_sub(4));
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Dashboard");
    add_shortcut(&mut lines, "Tab", "Next view");
    add_shortcut(&mut lines, "Shift+Tab", "Previous view");
    add_shortcut(&mut lines, "1-6", "Jump to view");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");

    add_section(&mut lines, "Tables (Logs, Wallet, Vehicles)");
    add_shortcut(&mut lines, "j / ↓", "Next row");
    add_shortcut(&mut lines, "k / ↑", "Previous row");
    add_shortcut(&mut lines, "h / l", "Scroll wide tables");
    add_shortcut(&mut lines, "n / →", "Next page");
    add_shortcut(&mut lines, "p / ←", "Previous page");
    add_shortcut(&mut lines, "g / G", "First / last page");

    add_section(&mut lines, "Search & Filters");
    add_shortcut(&mut lines, "/", "Edit search term");
    add_shortcut(&mut lines, "Esc/Enter", "Leave search");
    add_shortcut(&mut lines, "f", "Choose a filter value");
    add_shortcut(&mut lines, "c", "Clear search and filters");

    add_section(&mut lines, "Data");
    add_shortcut(&mut lines, "x", "Export filtered rows as CSV");
    add_shortcut(&mut lines, "v", "Look up a vehicle (Vehicle Details)");
    add_shortcut(&mut lines, "g", "Generate API key (API Keys)");
    add_shortcut(&mut lines, "s", "Show / hide API keys");
    add_shortcut(&mut lines, "r", "Recharge wallet (Wallet & Billing)");
    add_shortcut(&mut lines, "e", "Edit profile (Client Info)");

    add_section(&mut lines, "Prompts");
    add_shortcut(&mut lines, "Enter", "Submit / save");
    add_shortcut(&mut lines, "Esc", "Cancel");
    add_shortcut(&mut lines, "↑ / ↓", "Move between profile fields");
    add_shortcut(&mut lines, "Tab", "Cycle recharge presets");

    // Footer
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_help_lists_export_binding() {
        let text: Vec<String> = build_help_content()
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text.iter().any(|l| l.contains("Export filtered rows as CSV")));
    }

    #[test]
    fn test_scroll_keys() {
        let mut dialog = HelpDialog::default();
        let press = |d: &mut HelpDialog, code| d.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
        assert_eq!(press(&mut dialog, KeyCode::Char('j')), None);
        assert_eq!(press(&mut dialog, KeyCode::PageDown), None);
        assert_eq!(dialog.scroll_offset, 11);
        press(&mut dialog, KeyCode::PageUp);
        assert_eq!(dialog.scroll_offset, 1);
        assert_eq!(press(&mut dialog, KeyCode::Char('?')), Some(Action::CloseModal));
    }
}

//! Splash screen component
//!
//! Shows the API Hub banner briefly before the dashboard.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const ACCENT: Color = Color::Rgb(56, 189, 248);

const LOGO: [&str; 6] = [
    "   ▄▄▄   ████▄  ██       ██  ██  ██  ██  ████▄ ",
    "  ██ ██  ██ ██  ██       ██  ██  ██  ██  ██ ██ ",
    " ██   ██ ████▀  ██       ██████  ██  ██  ████▄ ",
    " ███████ ██     ██       ██  ██  ██  ██  ██ ██ ",
    " ██   ██ ██     ██       ██  ██   ████   ████▀ ",
    "                                               ",
];

pub struct SplashComponent {
    start_time: Option<Instant>,
    /// How long the splash stays up without input
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashComponent {
    pub fn new() -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1500),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);

        let logo_height = LOGO.len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(logo_height + 3) / 2),
                Constraint::Length(logo_height),
                Constraint::Length(1), // Title
                Constraint::Length(1), // Subtitle
                Constraint::Min(0),
            ])
            .split(area);

        let logo: Vec<Line> = LOGO
            .iter()
            .map(|line| Line::from(Span::styled(*line, Style::default().fg(ACCENT).bg(Color::Black))))
            .collect();
        frame.render_widget(Paragraph::new(logo).alignment(Alignment::Center), chunks[1]);

        let title = Line::from(vec![
            Span::styled(
                "apihub",
                Style::default()
                    .fg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "-tui",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[2]);

        let subtitle = Line::from(Span::styled(
            "Your API marketplace account, in the terminal",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(subtitle).alignment(Alignment::Center), chunks[3]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_not_complete_before_init() {
        let splash = SplashComponent::new();
        assert!(!splash.is_complete());
    }

    #[test]
    fn test_any_key_skips_and_q_quits() {
        let mut splash = SplashComponent::new();
        let press = |s: &mut SplashComponent, code| s.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
        assert_eq!(press(&mut splash, KeyCode::Enter), Some(Action::SplashComplete));
        assert_eq!(press(&mut splash, KeyCode::Char('q')), Some(Action::ForceQuit));
    }

    #[test]
    fn test_tick_completes_after_duration() {
        let mut splash = SplashComponent {
            start_time: None,
            duration: Duration::ZERO,
        };
        splash.init().unwrap();
        assert_eq!(splash.update(Action::Tick).unwrap(), Some(Action::SplashComplete));
    }
}

//! Overview screen: headline figures and the latest API activity

use crate::component::Component;
use crate::components::data_view::render_stat_cards;
use crate::model::log::LogStatus;
use crate::model::{ApiLog, StatCard};
use anyhow::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Entries shown in the recent activity list
pub const RECENT_ACTIVITY_LEN: usize = 5;

/// Figures gathered from the other views
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewSummary {
    pub total_api_calls: u64,
    pub wallet_balance: f64,
    pub active_keys: usize,
    pub vehicle_searches: usize,
    /// Newest first
    pub recent: Vec<ApiLog>,
}

impl OverviewSummary {
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total API Calls", self.total_api_calls.to_string()),
            StatCard::new("Wallet Balance", format!("${:.2}", self.wallet_balance)),
            StatCard::new("Active API Keys", self.active_keys.to_string()),
            StatCard::new("Vehicle Searches", self.vehicle_searches.to_string()),
        ]
    }
}

#[derive(Default)]
pub struct OverviewComponent {
    summary: OverviewSummary,
}

impl OverviewComponent {
    pub fn set_summary(&mut self, summary: OverviewSummary) {
        self.summary = summary;
    }

    pub fn summary(&self) -> &OverviewSummary {
        &self.summary
    }
}

impl Component for OverviewComponent {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(3)])
            .split(area);

        render_stat_cards(frame, chunks[0], &self.summary.cards());

        let items: Vec<ListItem> = self
            .summary
            .recent
            .iter()
            .map(|log| {
                let status_color = match log.status {
                    LogStatus::Success => Color::Green,
                    LogStatus::Failed => Color::Red,
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{}  ", log.timestamp),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("{:<18}", log.api_name),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:<8}", log.status),
                        Style::default().fg(status_color),
                    ),
                    Span::styled(
                        format!("{}ms", log.latency_ms),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recent Activity ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(list, chunks[1]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_format_balance() {
        let summary = OverviewSummary {
            total_api_calls: 45230,
            wallet_balance: 98.5,
            active_keys: 2,
            vehicle_searches: 5,
            recent: Vec::new(),
        };
        let cards = summary.cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "45230");
        assert_eq!(cards[1].value, "$98.50");
        assert_eq!(cards[3].label, "Vehicle Searches");
    }
}

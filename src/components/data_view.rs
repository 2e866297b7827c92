//! Data view component - one screen per tabular dataset
//!
//! Wraps a `TableView` with the presentation state the dashboard needs:
//! search mode, row highlight, and horizontal scroll. Renders stat cards,
//! the active query, the current page, and the pagination footer.

use crate::action::Action;
use crate::component::Component;
use crate::components::table::TableComponent;
use crate::model::table::ALL;
use crate::model::{Dataset, ExportQuoting, StatCard, StatSummary, TableView};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the App needs from a data view without knowing its record type
pub trait DataScreen: Component {
    fn title(&self) -> &'static str;

    /// Dataset label, the export file prefix
    fn label(&self) -> &'static str;

    fn search_mode(&self) -> bool;

    /// `(key, label)` for every discrete filter
    fn filter_keys(&self) -> Vec<(&'static str, &'static str)>;

    /// Allowed values, "All" first
    fn filter_options(&self, key: &str) -> Vec<String>;

    fn filter_selection(&self, key: &str) -> String;

    /// CSV bytes of the filtered set and the number of records in it
    fn export(&self, quoting: ExportQuoting) -> Result<(Vec<u8>, usize)>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// Data View Component
// ═══════════════════════════════════════════════════════════════════════════════

pub struct DataViewComponent<R: Dataset> {
    view: TableView<R>,

    /// Whether typed characters edit the search term
    pub search_mode: bool,

    /// Highlighted row within the visible page
    pub selected_row: usize,

    /// Horizontal scroll offset for tables wider than the screen
    pub h_scroll: u16,

    /// Cards shown after the dataset's own stats
    extra_cards: Vec<StatCard>,

    /// Whether `v` opens the vehicle lookup prompt
    lookup_enabled: bool,

    /// Whether `r` opens the wallet recharge prompt
    recharge_enabled: bool,
}

impl<R: Dataset> DataViewComponent<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            view: TableView::new(records),
            search_mode: false,
            selected_row: 0,
            h_scroll: 0,
            extra_cards: Vec::new(),
            lookup_enabled: false,
            recharge_enabled: false,
        }
    }

    pub fn with_extra_cards(mut self, cards: Vec<StatCard>) -> Self {
        self.extra_cards = cards;
        self
    }

    pub fn with_lookup(mut self) -> Self {
        self.lookup_enabled = true;
        self
    }

    pub fn with_recharge(mut self) -> Self {
        self.recharge_enabled = true;
        self
    }

    pub fn view(&self) -> &TableView<R> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut TableView<R> {
        &mut self.view
    }

    /// The record under the row highlight
    pub fn selected_record(&self) -> Option<&R> {
        self.view.visible().get(self.selected_row).copied()
    }

    fn clamp_selection(&mut self) {
        let visible = self.view.visible().len();
        self.selected_row = self.selected_row.min(visible.saturating_sub(1));
    }

    fn reset_selection(&mut self) {
        self.selected_row = 0;
    }
}

impl<R: Dataset> DataScreen for DataViewComponent<R> {
    fn title(&self) -> &'static str {
        self.view.schema().title
    }

    fn label(&self) -> &'static str {
        self.view.schema().label
    }

    fn search_mode(&self) -> bool {
        self.search_mode
    }

    fn filter_keys(&self) -> Vec<(&'static str, &'static str)> {
        self.view
            .schema()
            .filters
            .iter()
            .map(|f| (f.key, f.label))
            .collect()
    }

    fn filter_options(&self, key: &str) -> Vec<String> {
        self.view.filter_options(key)
    }

    fn filter_selection(&self, key: &str) -> String {
        self.view.state().selection(key).to_string()
    }

    fn export(&self, quoting: ExportQuoting) -> Result<(Vec<u8>, usize)> {
        let bytes = self.view.export_csv(quoting)?;
        Ok((bytes, self.view.filtered().len()))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl<R: Dataset> Component for DataViewComponent<R> {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Rows
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('h') => Some(Action::ScrollLeft),
            KeyCode::Char('l') => Some(Action::ScrollRight),

            // Pages
            KeyCode::Char('n') | KeyCode::Right => Some(Action::NextPage),
            KeyCode::Char('p') | KeyCode::Left => Some(Action::PrevPage),
            KeyCode::Char('g') => Some(Action::FirstPage),
            KeyCode::Char('G') => Some(Action::LastPage),

            // Query
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('f') => Some(Action::OpenFilter),
            KeyCode::Char('c') => Some(Action::ClearFilters),

            // Output
            KeyCode::Char('x') => Some(Action::Export),
            KeyCode::Char('v') if self.lookup_enabled => Some(Action::OpenVehicleLookup),
            KeyCode::Char('r') if self.recharge_enabled => Some(Action::OpenRecharge),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextRow => {
                let visible = self.view.visible().len();
                if self.selected_row + 1 < visible {
                    self.selected_row += 1;
                }
            }
            Action::PrevRow => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            Action::ScrollLeft => {
                self.h_scroll = self.h_scroll.saturating_sub(8);
            }
            Action::ScrollRight => {
                self.h_scroll = self.h_scroll.saturating_add(8);
            }

            Action::NextPage => {
                self.view.next_page();
                self.reset_selection();
            }
            Action::PrevPage => {
                self.view.previous_page();
                self.reset_selection();
            }
            Action::FirstPage => {
                self.view.first_page();
                self.reset_selection();
            }
            Action::LastPage => {
                self.view.last_page();
                self.reset_selection();
            }

            Action::EnterSearchMode => self.search_mode = true,
            Action::ExitSearchMode => self.search_mode = false,
            Action::SearchInput(c) => {
                let mut term = self.view.search_term().to_string();
                term.push(c);
                self.view.set_search_term(term);
                self.reset_selection();
            }
            Action::SearchBackspace => {
                let mut term = self.view.search_term().to_string();
                term.pop();
                self.view.set_search_term(term);
                self.reset_selection();
            }
            Action::SetFilter { key, value } => {
                if self.view.set_filter(key, &value) {
                    tracing::debug!(dataset = self.label(), key, value = %value, "filter changed");
                }
                self.reset_selection();
            }
            Action::ClearFilters => {
                self.view.clear_filters();
                self.reset_selection();
            }
            _ => {}
        }
        self.clamp_selection();
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Stat cards
                Constraint::Length(3), // Query bar
                Constraint::Min(3),    // Table
                Constraint::Length(3), // Pagination
            ])
            .split(area);

        let mut cards = self.view.compute_stats().cards();
        cards.extend(self.extra_cards.iter().cloned());
        render_stat_cards(frame, chunks[0], &cards);

        self.render_query_bar(frame, chunks[1]);
        self.render_table(frame, chunks[2]);
        self.render_pagination(frame, chunks[3]);

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

impl<R: Dataset> DataViewComponent<R> {
    fn render_query_bar(&self, frame: &mut Frame, area: Rect) {
        let term = self.view.search_term();
        let mut spans = vec![Span::styled("Search: ", Style::default().fg(Color::DarkGray))];
        if self.search_mode {
            spans.push(Span::styled(
                format!("{}_", term),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
        } else if term.is_empty() {
            spans.push(Span::styled("(press /)", Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::styled(term.to_string(), Style::default().fg(Color::Cyan)));
        }

        for def in &self.view.schema().filters {
            let selected = self.view.state().selection(def.key);
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                format!("{}: ", def.label),
                Style::default().fg(Color::DarkGray),
            ));
            let style = if selected == ALL {
                Style::default().fg(Color::White)
            } else {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled(selected.to_string(), style));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if self.search_mode {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let schema = self.view.schema();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", schema.title))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::DarkGray));

        let rows: Vec<Vec<String>> = self
            .view
            .visible()
            .into_iter()
            .map(|record| schema.row(record))
            .collect();

        if rows.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    schema.empty_message,
                    Style::default().fg(Color::Yellow),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let lines =
            TableComponent::build_table_lines(&schema.headers(), &rows, Some(self.selected_row));
        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((0, self.h_scroll));
        frame.render_widget(paragraph, area);
    }

    fn render_pagination(&self, frame: &mut Frame, area: Rect) {
        let (first, last, total) = self.view.showing_range();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let showing = Paragraph::new(Line::from(Span::styled(
            format!("Showing {} to {} of {} results", first, last, total),
            Style::default().fg(Color::DarkGray),
        )))
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM | Borders::LEFT));
        frame.render_widget(showing, chunks[0]);

        let enabled = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let disabled = Style::default().fg(Color::DarkGray);
        let controls = Paragraph::new(Line::from(vec![
            Span::styled(
                "◀ Previous",
                if self.view.has_previous() { enabled } else { disabled },
            ),
            Span::raw("   "),
            Span::styled(
                format!("Page {} of {}", self.view.page(), self.view.total_pages()),
                Style::default().fg(Color::White),
            ),
            Span::raw("   "),
            Span::styled(
                "Next ▶",
                if self.view.has_next() { enabled } else { disabled },
            ),
            Span::raw(" "),
        ]))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM | Borders::RIGHT));
        frame.render_widget(controls, chunks[1]);
    }
}

/// Render labelled figures side by side, one bordered box each
pub fn render_stat_cards(frame: &mut Frame, area: Rect, cards: &[StatCard]) {
    if cards.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Ratio(1, cards.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(
                card.label,
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, *chunk);
    }
}

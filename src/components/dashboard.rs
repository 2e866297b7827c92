//! Dashboard chrome: header, sidebar navigation, status line and help bar
//!
//! The active view's content is drawn by the App into `MainLayout::content`.

use crate::model::ui::DashboardView;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// State the chrome needs from the App
pub struct DashboardRenderContext<'a> {
    pub view: DashboardView,
    pub client_name: &'a str,
    pub company: &'a str,
    pub search_mode: bool,
    pub lookup_enabled: bool,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

pub fn render_header(frame: &mut Frame, area: Rect, ctx: &DashboardRenderContext) {
    let line = Line::from(vec![
        Span::styled(
            " API Hub ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            ctx.view.name(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("{} · {}", ctx.client_name, ctx.company),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, ctx: &DashboardRenderContext) {
    let items: Vec<ListItem> = DashboardView::all()
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let active = *view == ctx.view;
            let style = if active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!(" {} ", view.name()), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Dashboard ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &DashboardRenderContext) {
    let mut spans = Vec::new();

    if let Some(error) = ctx.error {
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    }
    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_help_bar(frame: &mut Frame, area: Rect, ctx: &DashboardRenderContext) {
    let key = |text: &str, color: Color| {
        Span::styled(
            format!(" {} ", text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };

    let mut spans = if ctx.search_mode {
        vec![
            key("Esc/Enter", Color::Yellow),
            Span::raw("Done  "),
            key("Backspace", Color::Cyan),
            Span::raw("Delete  "),
            Span::styled("Type to search", Style::default().fg(Color::DarkGray)),
        ]
    } else {
        let mut spans = vec![key("Tab/1-6", Color::Cyan), Span::raw("Views  ")];
        match ctx.view {
            DashboardView::ApiLogs | DashboardView::Wallet | DashboardView::Vehicles => {
                spans.extend([
                    key("/", Color::Cyan),
                    Span::raw("Search  "),
                    key("f", Color::Cyan),
                    Span::raw("Filter  "),
                    key("n/p", Color::Cyan),
                    Span::raw("Page  "),
                    key("x", Color::Green),
                    Span::raw("Export  "),
                ]);
                if ctx.lookup_enabled {
                    spans.extend([key("v", Color::Green), Span::raw("Lookup  ")]);
                }
                if ctx.view == DashboardView::Wallet {
                    spans.extend([key("r", Color::Green), Span::raw("Recharge  ")]);
                }
            }
            DashboardView::ApiKeys => {
                spans.extend([
                    key("g", Color::Green),
                    Span::raw("Generate  "),
                    key("s", Color::Cyan),
                    Span::raw("Show/Hide  "),
                ]);
            }
            DashboardView::ClientInfo => {
                spans.extend([key("e", Color::Green), Span::raw("Edit Profile  ")]);
            }
            DashboardView::Overview => {}
        }
        spans
    };
    spans.extend([
        key("?", Color::Magenta),
        Span::raw("Help  "),
        key("q", Color::Red),
        Span::raw("Quit"),
    ]);

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

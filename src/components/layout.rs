//! Layout calculations for the dashboard

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the navigation sidebar in cells
const SIDEBAR_WIDTH: u16 = 24;

/// Dashboard screen areas
pub struct MainLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the dashboard layout: header, sidebar and content, optional
/// status line, help bar
pub fn calculate_main_layout(area: Rect, has_status: bool) -> MainLayout {
    let main_chunks = if has_status {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area)
    };

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(main_chunks[1]);

    let (status_area, help_area) = if has_status {
        (Some(main_chunks[2]), main_chunks[3])
    } else {
        (None, main_chunks[2])
    };

    MainLayout {
        header: main_chunks[0],
        sidebar: body[0],
        content: body[1],
        status: status_area,
        help: help_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_is_clamped() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_popup(area, 40, 7);
        assert_eq!(popup, Rect::new(0, 1, 30, 7));
    }

    #[test]
    fn test_layout_with_status_line() {
        let layout = calculate_main_layout(Rect::new(0, 0, 120, 40), true);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.content.width, 120 - SIDEBAR_WIDTH);
        assert_eq!(layout.status.map(|s| s.height), Some(1));
        assert_eq!(layout.help.y, 37);
    }

    #[test]
    fn test_layout_without_status_line() {
        let layout = calculate_main_layout(Rect::new(0, 0, 120, 40), false);
        assert!(layout.status.is_none());
        assert_eq!(layout.content.height, 34);
    }
}

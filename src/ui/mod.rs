//! Terminal UI panels. Tightly coupled to ratatui/crossterm; everything
//! here renders from immutable session snapshots.

pub mod add_mission;
pub mod confirm_reset;
pub mod hero_panel;
pub mod mission_list;

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// The two top-level tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Missions,
    Hero,
}

/// Splits the whole frame into header, body, and status areas.
pub fn root_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with tabs
            Constraint::Min(0),    // Active tab body
            Constraint::Length(3), // Status line
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draws the header bar: tab labels and today's date.
pub fn draw_header(frame: &mut Frame, area: Rect, active: Tab) {
    let tab_style = |tab: Tab| {
        if tab == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let header_text = vec![Line::from(vec![
        Span::styled(" Missions ", tab_style(Tab::Missions)),
        Span::raw("|"),
        Span::styled(" Hero ", tab_style(Tab::Hero)),
        Span::raw("  "),
        Span::styled(
            Local::now().format("%a %d %b %Y").to_string(),
            Style::default().fg(Color::Gray),
        ),
    ])];

    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title("LifeQuest"))
        .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// Draws the status line: the latest event message, or a persistence
/// warning when the last save failed.
pub fn draw_status(frame: &mut Frame, area: Rect, message: Option<&str>, store_error: Option<&str>) {
    let line = if let Some(error) = store_error {
        Line::from(Span::styled(
            format!("⚠ {}", error),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(message) = message {
        Line::from(Span::styled(message, Style::default().fg(Color::Yellow)))
    } else {
        Line::from(Span::styled(
            "Tab = Switch | Q = Quit",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let status = Paragraph::new(vec![line])
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Returns a centered rectangle for modal dialogs.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

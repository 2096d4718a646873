use crate::core::hero::Hero;
use crate::core::mission::{Difficulty, Mission};
use crate::core::rules::effective_reward;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draws the missions tab: the selectable mission list and key hints.
pub fn draw_mission_list(
    frame: &mut Frame,
    area: Rect,
    hero: &Hero,
    missions: &[Mission],
    selected: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // List
            Constraint::Length(3), // Controls
        ])
        .split(area);

    draw_list(frame, chunks[0], hero, missions, selected);
    draw_controls(frame, chunks[1]);
}

fn draw_list(frame: &mut Frame, area: Rect, hero: &Hero, missions: &[Mission], selected: usize) {
    let items: Vec<ListItem> = missions
        .iter()
        .map(|mission| ListItem::new(mission_line(hero, mission)))
        .collect();

    let title = format!(
        "Missions ({} open)",
        missions.iter().filter(|m| !m.completed).count()
    );

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !missions.is_empty() {
        state.select(Some(selected.min(missions.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn mission_line(hero: &Hero, mission: &Mission) -> Line<'static> {
    let (mark, mark_style) = if mission.completed {
        ("[x] ", Style::default().fg(Color::DarkGray))
    } else {
        ("[ ] ", Style::default())
    };

    let title_style = if mission.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    let reward = if mission.completed {
        Span::styled(
            format!("  +{} XP", mission.xp_reward),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        // Shows what the current hero would actually earn
        Span::styled(
            format!("  +{} XP", effective_reward(hero, mission)),
            Style::default().fg(Color::Yellow),
        )
    };

    Line::from(vec![
        Span::styled(mark, mark_style),
        Span::styled(
            format!("[{:6}] ", mission.difficulty.label()),
            Style::default().fg(difficulty_color(mission.difficulty)),
        ),
        Span::styled(mission.title.clone(), title_style),
        reward,
    ])
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(
        "Enter = Complete | A = Add | C = Clear completed | R = Reset",
    )
    .block(Block::default().borders(Borders::ALL).title("Help"))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Gray));

    frame.render_widget(controls, area);
}

pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

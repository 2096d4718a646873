use crate::core::hero::{Attribute, Hero};
use crate::core::mission::Difficulty;
use crate::core::rules::{bonus_attribute, progress_fraction};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the hero tab: level header, XP gauge, attributes, and controls.
pub fn draw_hero_panel(frame: &mut Frame, area: Rect, hero: &Hero) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Level header
            Constraint::Length(3), // XP gauge
            Constraint::Length(5), // Attributes (3 rows + borders)
            Constraint::Length(3), // Unspent points
            Constraint::Length(3), // Controls
            Constraint::Min(0),    // Filler
        ])
        .split(area);

    draw_level_header(frame, chunks[0], hero);
    draw_xp_gauge(frame, chunks[1], hero);
    draw_attributes(frame, chunks[2], hero);
    draw_unspent_points(frame, chunks[3], hero);
    draw_controls(frame, chunks[4], hero);
}

fn draw_level_header(frame: &mut Frame, area: Rect, hero: &Hero) {
    let header_text = vec![Line::from(vec![
        Span::styled(
            format!("Level {}", hero.level),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("XP: {}/{}", hero.current_xp, hero.xp_to_next_level),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title("Hero"))
        .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

fn draw_xp_gauge(frame: &mut Frame, area: Rect, hero: &Hero) {
    let fraction = progress_fraction(hero).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::Yellow))
        .ratio(fraction)
        .label(format!("{:.0}%", fraction * 100.0));

    frame.render_widget(gauge, area);
}

fn draw_attributes(frame: &mut Frame, area: Rect, hero: &Hero) {
    let attrs_block = Block::default().borders(Borders::ALL).title("Attributes");
    let inner = attrs_block.inner(area);
    frame.render_widget(attrs_block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // STR
            Constraint::Length(1), // INT
            Constraint::Length(1), // VIT
        ])
        .split(inner);

    for (i, attr) in Attribute::all().iter().enumerate() {
        if i < rows.len() {
            draw_attribute_row(frame, rows[i], hero, *attr);
        }
    }
}

fn draw_attribute_row(frame: &mut Frame, area: Rect, hero: &Hero, attr: Attribute) {
    let value = hero.attribute(attr);
    let boosted = boosted_difficulty(attr);

    let text = vec![Line::from(vec![
        Span::styled(
            format!("{}: ", attr.abbrev()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:3}", value),
            Style::default()
                .fg(attribute_color(attr))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  +{}% XP on {} missions", value * 2, boosted.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    frame.render_widget(Paragraph::new(text), area);
}

fn draw_unspent_points(frame: &mut Frame, area: Rect, hero: &Hero) {
    let style = if hero.unspent_points > 0 {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = vec![Line::from(Span::styled(
        format!("Unspent points: {}", hero.unspent_points),
        style,
    ))];

    let points = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Points"))
        .alignment(Alignment::Center);

    frame.render_widget(points, area);
}

fn draw_controls(frame: &mut Frame, area: Rect, hero: &Hero) {
    let allocate_hint = if hero.unspent_points > 0 {
        Span::styled(
            "1 = +STR | 2 = +INT | 3 = +VIT",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "Level up to earn attribute points",
            Style::default().fg(Color::DarkGray),
        )
    };

    let footer = Paragraph::new(vec![Line::from(allocate_hint)])
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

pub fn attribute_color(attr: Attribute) -> Color {
    match attr {
        Attribute::Strength => Color::Red,
        Attribute::Intelligence => Color::Blue,
        Attribute::Vitality => Color::Green,
    }
}

/// The difficulty tier an attribute grants its bonus on (inverse of
/// `bonus_attribute`).
fn boosted_difficulty(attr: Attribute) -> Difficulty {
    Difficulty::all()
        .into_iter()
        .find(|d| bonus_attribute(*d) == attr)
        .unwrap_or(Difficulty::Easy)
}

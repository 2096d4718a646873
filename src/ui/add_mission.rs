use crate::core::mission::Difficulty;
use crate::ui::mission_list::difficulty_color;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Input form for a new mission: a title field with cursor and a
/// difficulty selector.
pub struct AddMissionScreen {
    pub title_input: String,
    pub cursor_position: usize,
    pub difficulty_index: usize,
}

impl AddMissionScreen {
    pub fn new() -> Self {
        Self {
            title_input: String::new(),
            cursor_position: 0,
            difficulty_index: 0,
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let popup = super::centered_rect(60, 12, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" New Mission ");
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Title label
                Constraint::Length(1), // Title input
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Difficulty selector
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Validation
                Constraint::Length(1), // Controls
            ])
            .split(inner);

        let label = Paragraph::new("Title:");
        f.render_widget(label, chunks[0]);

        // Input with a visible cursor
        let input_text = {
            let char_count = self.title_input.chars().count();
            if self.cursor_position < char_count {
                let chars: Vec<char> = self.title_input.chars().collect();
                let before: String = chars[..self.cursor_position].iter().collect();
                let after: String = chars[self.cursor_position..].iter().collect();
                format!("{}_{}", before, after)
            } else {
                format!("{}_", self.title_input)
            }
        };
        let input = Paragraph::new(input_text).style(Style::default().fg(Color::White));
        f.render_widget(input, chunks[1]);

        // Difficulty selector with the active tier highlighted
        let mut spans = vec![Span::raw("Difficulty: ")];
        for (i, difficulty) in Difficulty::all().iter().enumerate() {
            let style = if i == self.difficulty_index {
                Style::default()
                    .fg(difficulty_color(*difficulty))
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ", difficulty.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!("(+{} XP)", self.difficulty().xp_reward()),
            Style::default().fg(Color::Yellow),
        ));
        f.render_widget(Paragraph::new(vec![Line::from(spans)]), chunks[3]);

        // Validation feedback
        let validation = if self.is_valid() {
            Line::from(Span::styled(
                "✓ Ready to add",
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from(Span::styled(
                "Title must not be empty",
                Style::default().fg(Color::DarkGray),
            ))
        };
        f.render_widget(Paragraph::new(validation), chunks[5]);

        let controls = Paragraph::new("[Enter] Add    [←/→] Difficulty    [Esc] Cancel")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[6]);
    }

    pub fn handle_char_input(&mut self, c: char) {
        self.title_input.insert(self.byte_cursor(), c);
        self.cursor_position += 1;
    }

    pub fn handle_backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_cursor();
            self.title_input.remove(at);
        }
    }

    pub fn next_difficulty(&mut self) {
        self.difficulty_index = (self.difficulty_index + 1) % Difficulty::all().len();
    }

    pub fn prev_difficulty(&mut self) {
        let count = Difficulty::all().len();
        self.difficulty_index = (self.difficulty_index + count - 1) % count;
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::all()[self.difficulty_index]
    }

    pub fn is_valid(&self) -> bool {
        !self.title_input.trim().is_empty()
    }

    pub fn title(&self) -> String {
        self.title_input.trim().to_string()
    }

    /// Byte offset for the character cursor, for String::insert/remove.
    fn byte_cursor(&self) -> usize {
        self.title_input
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.title_input.len())
    }
}

impl Default for AddMissionScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace() {
        let mut screen = AddMissionScreen::new();
        for c in "Read".chars() {
            screen.handle_char_input(c);
        }
        assert_eq!(screen.title_input, "Read");
        screen.handle_backspace();
        assert_eq!(screen.title_input, "Rea");
        assert_eq!(screen.cursor_position, 3);
    }

    #[test]
    fn test_difficulty_cycles() {
        let mut screen = AddMissionScreen::new();
        assert_eq!(screen.difficulty(), Difficulty::Easy);
        screen.next_difficulty();
        assert_eq!(screen.difficulty(), Difficulty::Medium);
        screen.next_difficulty();
        screen.next_difficulty();
        assert_eq!(screen.difficulty(), Difficulty::Easy);
        screen.prev_difficulty();
        assert_eq!(screen.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_blank_title_is_invalid() {
        let mut screen = AddMissionScreen::new();
        assert!(!screen.is_valid());
        screen.handle_char_input(' ');
        assert!(!screen.is_valid());
        screen.handle_char_input('x');
        assert!(screen.is_valid());
        assert_eq!(screen.title(), "x");
    }

    #[test]
    fn test_multibyte_input() {
        let mut screen = AddMissionScreen::new();
        screen.handle_char_input('é');
        screen.handle_char_input('!');
        assert_eq!(screen.title_input, "é!");
        screen.handle_backspace();
        screen.handle_backspace();
        assert_eq!(screen.title_input, "");
    }
}

//! New-quest form: title, difficulty, optional deadline.

use crate::errors::VoyageError;
use crate::quests::Difficulty;
use crate::ui::{centered_rect, difficulty_color};
use chrono::NaiveDate;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Difficulty,
    Deadline,
}

/// What a key press did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    Cancel,
}

/// Input state for the quest creation modal.
pub struct QuestForm {
    pub title: String,
    pub difficulty: Difficulty,
    pub deadline: String,
    pub focus: FormField,
}

impl QuestForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            difficulty: Difficulty::Easy,
            deadline: String::new(),
            focus: FormField::Title,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> FormAction {
        match code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Left if self.focus == FormField::Difficulty => self.cycle_difficulty(-1),
            KeyCode::Right if self.focus == FormField::Difficulty => self.cycle_difficulty(1),
            KeyCode::Backspace => {
                match self.focus {
                    FormField::Title => {
                        self.title.pop();
                    }
                    FormField::Deadline => {
                        self.deadline.pop();
                    }
                    FormField::Difficulty => {}
                };
            }
            KeyCode::Char(c) => match self.focus {
                FormField::Title => self.title.push(c),
                FormField::Deadline => self.deadline.push(c),
                FormField::Difficulty => {}
            },
            _ => {}
        }
        FormAction::None
    }

    /// The deadline as a date: empty means none, anything unparsable is a
    /// validation error.
    pub fn deadline_date(&self) -> Result<Option<NaiveDate>, VoyageError> {
        let text = self.deadline.trim();
        if text.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                VoyageError::Validation(format!("deadline '{text}' is not a YYYY-MM-DD date"))
            })
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Difficulty,
            FormField::Difficulty => FormField::Deadline,
            FormField::Deadline => FormField::Title,
        };
    }

    fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Deadline,
            FormField::Difficulty => FormField::Title,
            FormField::Deadline => FormField::Difficulty,
        };
    }

    fn cycle_difficulty(&mut self, step: i32) {
        let index = Difficulty::ALL
            .iter()
            .position(|d| *d == self.difficulty)
            .unwrap_or(0) as i32;
        let len = Difficulty::ALL.len() as i32;
        self.difficulty = Difficulty::ALL[((index + step).rem_euclid(len)) as usize];
    }
}

impl Default for QuestForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws the modal over the given area.
pub fn draw_quest_form(frame: &mut Frame, area: Rect, form: &QuestForm) {
    let modal = centered_rect(54, 16, area);
    frame.render_widget(Clear, modal);

    let block = Block::default().borders(Borders::ALL).title("New Quest");
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title input
            Constraint::Length(3), // Difficulty selector
            Constraint::Length(3), // Deadline input
            Constraint::Length(2), // Hints
        ])
        .split(inner);

    draw_text_field(
        frame,
        chunks[0],
        "Title",
        &form.title,
        form.focus == FormField::Title,
    );
    draw_difficulty_row(frame, chunks[1], form);
    draw_text_field(
        frame,
        chunks[2],
        "Deadline (YYYY-MM-DD, optional)",
        &form.deadline,
        form.focus == FormField::Deadline,
    );

    let hints = Paragraph::new(Line::from(Span::styled(
        "tab next field  ←/→ difficulty  enter create  esc cancel",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints, chunks[3]);
}

fn draw_text_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if focused {
        format!("{value}_")
    } else {
        value.to_string()
    };

    let field = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(label),
    );
    frame.render_widget(field, area);
}

fn draw_difficulty_row(frame: &mut Frame, area: Rect, form: &QuestForm) {
    let mut spans = Vec::new();
    for difficulty in Difficulty::ALL {
        let selected = difficulty == form.difficulty;
        let style = if selected {
            Style::default()
                .fg(difficulty_color(difficulty))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", difficulty.name()), style));
        spans.push(Span::raw(" "));
    }

    let border_style = if form.focus == FormField::Difficulty {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let row = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Difficulty"),
    );
    frame.render_widget(row, area);
}

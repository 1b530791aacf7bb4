//! Active quest list with selection.

use crate::quests::Quest;
use crate::ui::difficulty_color;
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the active quests in insertion order, highlighting the selected
/// row. Overdue deadlines turn red but never block anything.
pub fn draw_quest_panel(
    frame: &mut Frame,
    area: Rect,
    quests: &[&Quest],
    selected: usize,
    today: NaiveDate,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Active Quests ({})", quests.len()));

    if quests.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No active quests.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Chart a new course with 'n'.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut lines = Vec::with_capacity(quests.len());
    for (i, quest) in quests.iter().enumerate() {
        let is_selected = i == selected;
        let marker = if is_selected { "▶ " } else { "  " };

        let title_style = if is_selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("[{}] ", quest.difficulty.name()),
                Style::default().fg(difficulty_color(quest.difficulty)),
            ),
            Span::styled(quest.title.clone(), title_style),
        ];

        if let Some(deadline) = quest.deadline {
            let overdue = deadline < today;
            spans.push(Span::styled(
                format!("  due {deadline}"),
                if overdue {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            ));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

//! Achievement browser: the full catalog with lock state and unlock dates.

use crate::achievements::{AchievementId, ALL_ACHIEVEMENTS};
use crate::progress::UserProgress;
use chrono::DateTime;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws every achievement, unlocked ones bright with their unlock date.
pub fn draw_achievements_scene(frame: &mut Frame, area: Rect, progress: &UserProgress) {
    let block = Block::default().borders(Borders::ALL).title(format!(
        "Achievements ({}/{})",
        progress.unlocked_count(),
        AchievementId::ALL.len()
    ));

    let mut lines = Vec::new();
    for def in ALL_ACHIEVEMENTS {
        let unlocked_at = progress.unlocked_achievements.get(&def.id).copied();

        let name_style = if unlocked_at.is_some() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut title_spans = vec![
            Span::raw(format!("{} ", def.icon)),
            Span::styled(def.name, name_style),
        ];
        match unlocked_at {
            Some(ts) => {
                if let Some(date) = DateTime::from_timestamp(ts, 0) {
                    title_spans.push(Span::styled(
                        format!("  unlocked {}", date.format("%Y-%m-%d")),
                        Style::default().fg(Color::Green),
                    ));
                }
            }
            None => title_spans.push(Span::styled(
                "  locked",
                Style::default().fg(Color::DarkGray),
            )),
        }

        lines.push(Line::from(title_spans));
        lines.push(Line::from(Span::styled(
            format!("   {}", def.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "esc to return",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

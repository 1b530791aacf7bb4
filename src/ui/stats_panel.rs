//! Voyage log: totals, streaks, and the difficulty distribution.

use crate::achievements::AchievementId;
use crate::progress::UserProgress;
use crate::weather::Weather;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the stats panel summarizing the progress record.
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, progress: &UserProgress, weather: Weather) {
    let distribution = &progress.quest_distribution;

    let lines = vec![
        Line::from(vec![
            Span::raw("Coins        "),
            Span::styled(
                progress.coins.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Streak       "),
            Span::styled(
                format!("{} days", progress.current_streak),
                Style::default().fg(Color::LightRed),
            ),
            Span::styled(
                format!("  (best {})", progress.longest_streak),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::raw("Completed    "),
            Span::styled(
                progress.total_quests_completed.to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::raw("Breakdown    "),
            Span::styled(
                format!("{} easy", distribution.easy),
                Style::default().fg(Color::Green),
            ),
            Span::raw(" / "),
            Span::styled(
                format!("{} medium", distribution.medium),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" / "),
            Span::styled(
                format!("{} hard", distribution.hard),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::raw("Weather      "),
            Span::styled(
                format!("{} ×{:.2}", weather.name(), weather.multiplier()),
                Style::default().fg(Color::LightBlue),
            ),
        ]),
        Line::from(vec![
            Span::raw("Achievements "),
            Span::styled(
                format!(
                    "{}/{}",
                    progress.unlocked_count(),
                    AchievementId::ALL.len()
                ),
                Style::default().fg(Color::Magenta),
            ),
        ]),
    ];

    let widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Voyage Log"));
    frame.render_widget(widget, area);
}

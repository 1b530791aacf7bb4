//! Terminal scenes: the sea chart, side panels, browsers, and forms.
//!
//! Scenes only read core state; every mutation goes through the
//! progression engine in the binary's event loop.

pub mod achievements_scene;
pub mod map_scene;
pub mod quest_form;
pub mod quest_panel;
pub mod shop_scene;
pub mod stats_panel;

use crate::progress::UserProgress;
use crate::quests::Difficulty;
use crate::weather::Weather;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Marker and tag color for a difficulty.
pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

/// A centered sub-rectangle, for modal forms.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Header bar: app name, coins, streak, weather.
pub fn draw_header(frame: &mut Frame, area: Rect, progress: &UserProgress, weather: Weather) {
    let header = vec![Line::from(vec![
        Span::styled(
            "⚓ Voyage",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("💰 {} coins", progress.coins),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!(
                "🔥 streak {} (best {})",
                progress.current_streak, progress.longest_streak
            ),
            Style::default().fg(Color::LightRed),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!(
                "{} {} ×{:.2}",
                weather.icon(),
                weather.name(),
                weather.multiplier()
            ),
            Style::default().fg(Color::LightBlue),
        ),
    ])];

    let widget = Paragraph::new(header)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// Footer: key hints plus the most recent notifications.
pub fn draw_footer(frame: &mut Frame, area: Rect, notifications: &[String]) {
    let mut lines = vec![Line::from(Span::styled(
        "n new  enter complete  d delete  a achievements  s shop  w weather  q quit",
        Style::default().fg(Color::DarkGray),
    ))];
    for message in notifications.iter().rev().take(area.height.saturating_sub(3) as usize) {
        lines.push(Line::from(Span::styled(
            format!("» {message}"),
            Style::default().fg(Color::White),
        )));
    }

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log"));
    frame.render_widget(widget, area);
}

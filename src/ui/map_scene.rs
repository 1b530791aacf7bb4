//! The sea chart: active quest markers scattered over a wave-textured
//! map, tinted by the current weather.

use crate::quests::Quest;
use crate::ui::difficulty_color;
use crate::weather::Weather;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::collections::HashMap;

/// Draws the chart with one marker per active quest.
pub fn draw_map_scene(frame: &mut Frame, area: Rect, quests: &[&Quest], weather: Weather) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Sea Chart — {}", weather.name()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Quest markers and the ship overlay the water grid
    let mut overlays: HashMap<(u16, u16), (char, Style)> = HashMap::new();
    for quest in quests {
        if let Some(pos) = quest.position {
            let x = (pos.x * (inner.width - 1) as f64) as u16;
            let y = (pos.y * (inner.height - 1) as f64) as u16;
            overlays.insert(
                (x, y),
                (
                    '◆',
                    Style::default()
                        .fg(difficulty_color(quest.difficulty))
                        .add_modifier(Modifier::BOLD),
                ),
            );
        }
    }
    overlays.insert(
        (inner.width / 2, inner.height / 2),
        ('⛵', Style::default().fg(Color::White)),
    );

    let water = water_style(weather);
    let mut rows: Vec<Line> = Vec::with_capacity(inner.height as usize);
    for y in 0..inner.height {
        let mut spans: Vec<Span> = Vec::with_capacity(inner.width as usize);
        for x in 0..inner.width {
            match overlays.get(&(x, y)) {
                Some((glyph, style)) => spans.push(Span::styled(glyph.to_string(), *style)),
                None => spans.push(Span::styled(wave_char(x, y, weather).to_string(), water)),
            }
        }
        rows.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(rows), inner);
}

/// Deterministic wave texture so the chart is stable between frames.
fn wave_char(x: u16, y: u16, weather: Weather) -> char {
    let seed = x as u32 * 7 + y as u32 * 13;
    match weather {
        Weather::Clear => match seed % 19 {
            0 | 1 => '~',
            2 => '≈',
            _ => ' ',
        },
        Weather::Storm => match seed % 9 {
            0 | 1 | 2 => '~',
            3 => '≈',
            4 => '/',
            _ => ' ',
        },
        Weather::Fog => match seed % 11 {
            0 | 1 | 2 => '░',
            3 => '~',
            _ => ' ',
        },
    }
}

fn water_style(weather: Weather) -> Style {
    match weather {
        Weather::Clear => Style::default().fg(Color::Blue),
        Weather::Storm => Style::default().fg(Color::DarkGray),
        Weather::Fog => Style::default().fg(Color::Gray),
    }
}

//! Harbor shop: spend coins on cosmetic gear.

use crate::progress::UserProgress;
use crate::shop::SHOP_CATALOG;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the shop catalog with affordability and owned counts.
pub fn draw_shop_scene(frame: &mut Frame, area: Rect, progress: &UserProgress) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Harbor Shop — {} coins", progress.coins));

    let mut lines = vec![Line::from("")];
    for (i, item) in SHOP_CATALOG.iter().enumerate() {
        let affordable = progress.coins >= item.cost;
        let owned = progress.owned_count(item.id);

        let name_style = if affordable {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = vec![
            Span::styled(
                format!(" {}. ", i + 1),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!("{} ", item.icon)),
            Span::styled(item.name, name_style),
            Span::styled(
                format!("  {} coins", item.cost),
                Style::default().fg(Color::Yellow),
            ),
        ];
        if owned > 0 {
            spans.push(Span::styled(
                format!("  (owned {owned})"),
                Style::default().fg(Color::Green),
            ));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        " press 1-5 to buy, esc to return",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

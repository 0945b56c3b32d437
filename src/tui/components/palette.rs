//! Palette panel: color frequency bar chart and swatch cards.

use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use crate::data::PALETTE_USAGE;

use super::panel::hex_color;

const BAR_WIDTH: u16 = 8;

/// Draw the palette frequency chart (left) and swatch cards (right).
pub fn draw(frame: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_chart(frame, cols[0]);
    draw_cards(frame, cols[1]);
}

fn draw_chart(frame: &mut Frame, area: Rect) {
    let bars: Vec<Bar> = PALETTE_USAGE
        .iter()
        .map(|entry| {
            Bar::default()
                .value(u64::from(entry.frequency))
                .label(Line::from(short_label(entry.name)))
                .text_value(format!("{}%", entry.frequency))
                .style(Style::default().fg(hex_color(entry.hex)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Frecuencia de Uso ")
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .max(100);

    frame.render_widget(chart, area);
}

fn draw_cards(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Códigos de Color ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(PALETTE_USAGE.len() * 2);
    for entry in &PALETTE_USAGE {
        let swatch = hex_color(entry.hex);
        lines.push(Line::from(vec![
            Span::styled("██ ", Style::default().fg(swatch)),
            Span::styled(
                format!("{:<18}", entry.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>4}%", entry.frequency),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", entry.usage),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Axis label that fits under one bar.
fn short_label(name: &str) -> String {
    name.chars().take(BAR_WIDTH as usize).collect()
}

//! Visual elements panel: horizontal frequency bars and per-element cards.

use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::data::VISUAL_ELEMENTS;

use super::panel::{hex_color, ratio_bar};

/// Accent used by the source dashboard for this section.
const ACCENT: &str = "#EC4899";

/// Draw the horizontal frequency chart (left) and element cards (right).
pub fn draw(frame: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_chart(frame, cols[0]);
    draw_cards(frame, cols[1]);
}

fn draw_chart(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Frecuencia de Aparición ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let accent = hex_color(ACCENT);
    let bar_width = usize::from(inner.width).saturating_sub(34).clamp(10, 30);

    let mut lines = Vec::with_capacity(VISUAL_ELEMENTS.len() * 2);
    for entry in &VISUAL_ELEMENTS {
        let mut spans = vec![Span::raw(format!("{:<26} ", entry.name))];
        spans.extend(ratio_bar(bar_width, entry.frequency, accent));
        spans.push(Span::styled(
            format!(" {:>3}%", entry.frequency),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_cards(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Análisis de Elementos ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let accent = hex_color(ACCENT);

    let mut lines = Vec::with_capacity(VISUAL_ELEMENTS.len() * 3);
    for entry in &VISUAL_ELEMENTS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<26}", entry.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>4}%", entry.frequency),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]));
        let mut bar = Vec::with_capacity(2);
        bar.extend(ratio_bar(24, entry.frequency, accent));
        lines.push(Line::from(bar));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

//! Cultural approach panel: proportional distribution bar and approach cards.

use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::data::{CULTURAL_APPROACHES, SECTION_COLORS};

use super::panel::hex_color;

/// Draw the distribution bar with legend (left) and approach cards (right).
pub fn draw(frame: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_distribution(frame, cols[0]);
    draw_cards(frame, cols[1]);
}

fn draw_distribution(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Distribución Cultural ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width);

    // One stacked bar, each segment sized by its share of the corpus
    let mut segments = Vec::with_capacity(CULTURAL_APPROACHES.len());
    for (entry, hex) in CULTURAL_APPROACHES.iter().zip(SECTION_COLORS) {
        let cells = (usize::from(entry.percentage) * width).div_euclid(100);
        segments.push(Span::styled(
            "█".repeat(cells),
            Style::default().fg(hex_color(hex)),
        ));
    }

    let mut lines = vec![Line::from(segments.clone()), Line::from(segments), Line::from("")];

    for (entry, hex) in CULTURAL_APPROACHES.iter().zip(SECTION_COLORS) {
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(hex_color(hex))),
            Span::raw(format!("{:<12} ", entry.name)),
            Span::styled(
                format!("{:>3}%", entry.percentage),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_cards(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Enfoques ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(CULTURAL_APPROACHES.len() * 3);
    for (entry, hex) in CULTURAL_APPROACHES.iter().zip(SECTION_COLORS) {
        let color = hex_color(hex);
        lines.push(Line::from(vec![
            Span::styled("▌ ", Style::default().fg(color)),
            Span::styled(
                format!("{:<12}", entry.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>4}%", entry.percentage),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.description),
            Style::default().add_modifier(Modifier::DIM),
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

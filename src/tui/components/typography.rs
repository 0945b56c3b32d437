//! Typography panel: canvas radar chart and per-aspect score rows.

use std::f64::consts::PI;

use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use crate::data::TYPOGRAPHY_SCORES;

use super::panel::{hex_color, ratio_bar};

/// Accent used by the source dashboard for this section.
const ACCENT: &str = "#F59E0B";

/// Draw the radar chart (left) and score rows (right).
pub fn draw(frame: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_radar(frame, cols[0]);
    draw_scores(frame, cols[1]);
}

/// Point on the radar at axis `i` and radius `r` (r = 1.0 is the outer ring).
fn vertex(i: usize, r: f64) -> (f64, f64) {
    let n = TYPOGRAPHY_SCORES.len() as f64;
    let angle = PI / 2.0 - (i as f64) * 2.0 * PI / n;
    (r * angle.cos(), r * angle.sin())
}

fn draw_radar(frame: &mut Frame, area: Rect) {
    let accent = hex_color(ACCENT);
    let n = TYPOGRAPHY_SCORES.len();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(" Perfil Tipográfico ")
                .borders(Borders::ALL),
        )
        .x_bounds([-1.8, 1.8])
        .y_bounds([-1.3, 1.3])
        .paint(|ctx| {
            // Grid rings at 50 and 100
            for ring in [0.5, 1.0] {
                for i in 0..n {
                    let (x1, y1) = vertex(i, ring);
                    let (x2, y2) = vertex((i + 1) % n, ring);
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: Color::DarkGray,
                    });
                }
            }

            // Axes
            for i in 0..n {
                let (x, y) = vertex(i, 1.0);
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: x,
                    y2: y,
                    color: Color::DarkGray,
                });
            }

            // Score polygon
            for i in 0..n {
                let a = TYPOGRAPHY_SCORES[i];
                let b = TYPOGRAPHY_SCORES[(i + 1) % n];
                let (x1, y1) = vertex(i, f64::from(a.score) / 100.0);
                let (x2, y2) = vertex((i + 1) % n, f64::from(b.score) / 100.0);
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: accent,
                });
            }

            // Axis labels (first word only, the canvas is narrow)
            for (i, entry) in TYPOGRAPHY_SCORES.iter().enumerate() {
                let (x, y) = vertex(i, 1.12);
                let label = entry.aspect.split_whitespace().next().unwrap_or(entry.aspect);
                ctx.print(
                    x,
                    y,
                    Line::from(Span::styled(
                        label.to_string(),
                        Style::default().add_modifier(Modifier::DIM),
                    )),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_scores(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Evaluación Tipográfica ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let accent = hex_color(ACCENT);

    let mut lines = Vec::with_capacity(TYPOGRAPHY_SCORES.len() * 3);
    for entry in &TYPOGRAPHY_SCORES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<22}", entry.aspect),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>3}/100", entry.score),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(ratio_bar(24, entry.score, accent)));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

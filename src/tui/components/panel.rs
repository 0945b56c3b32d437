//! Panel renderer: the pure mapping from the active tab to its visual tree.
//!
//! [`draw_panel`] is a deterministic function of the tab value and the static
//! datasets; rendering has no side effects beyond painting the frame, so
//! repeated renders of the same tab produce identical buffers.

use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tuirealm::{
    Component, Event, MockComponent, State,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use crate::data::{self, Tab};
use crate::tui::activities::Msg;
use crate::tui::activities::dashboard::UserEvent;

use super::{cultural, elements, palette, typography};

/// Render the panel for `tab`: heading, chart + card columns, commentary.
///
/// Exactly one of the four panels appears in the produced tree.
pub fn draw_panel(frame: &mut Frame, area: Rect, tab: Tab) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Min(8),    // Chart + cards
            Constraint::Length(5), // Commentary
        ])
        .split(area);

    let heading =
        Paragraph::new(format!(" {}", tab.heading())).style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(heading, rows[0]);

    match tab {
        Tab::Palette => palette::draw(frame, rows[1]),
        Tab::Elements => elements::draw(frame, rows[1]),
        Tab::Cultural => cultural::draw(frame, rows[1]),
        Tab::Typography => typography::draw(frame, rows[1]),
    }

    let (title, bullets, color) = match tab {
        Tab::Palette => (
            data::PALETTE_INSIGHTS_TITLE,
            &data::PALETTE_INSIGHTS,
            Color::Blue,
        ),
        Tab::Elements => (
            data::ELEMENT_OBSERVATIONS_TITLE,
            &data::ELEMENT_OBSERVATIONS,
            Color::Magenta,
        ),
        Tab::Cultural => (
            data::CULTURAL_FINDINGS_TITLE,
            &data::CULTURAL_FINDINGS,
            Color::Red,
        ),
        Tab::Typography => (
            data::TYPOGRAPHY_NOTES_TITLE,
            &data::TYPOGRAPHY_NOTES,
            Color::Yellow,
        ),
    };
    draw_commentary(frame, rows[2], title, bullets, color);
}

/// Fixed editorial commentary block under each chart.
fn draw_commentary(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    bullets: &[&'static str],
    color: Color,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = bullets
        .iter()
        .map(|b| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(color)),
                Span::raw(*b),
            ])
        })
        .collect();

    let commentary = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(commentary, inner);
}

/// Resolve one of the fixture hex codes to a terminal color.
pub(crate) fn hex_color(hex: &str) -> Color {
    data::parse_color(hex)
        .map(|c| Color::Rgb(c.red, c.green, c.blue))
        .unwrap_or(Color::Reset)
}

/// Proportional fill bar of `width` cells for a 0-100 value.
pub(crate) fn ratio_bar(width: usize, value: u8, color: Color) -> Vec<Span<'static>> {
    let filled = (usize::from(value) * width).div_euclid(100).min(width);
    vec![
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(width - filled),
            Style::default().fg(Color::DarkGray),
        ),
    ]
}

/// Display panel component for the active tab (read-only).
pub struct Panel {
    props: Props,
    tab: Tab,
}

impl Panel {
    pub fn new(tab: Tab) -> Self {
        Self {
            props: Props::default(),
            tab,
        }
    }
}

impl MockComponent for Panel {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        draw_panel(frame, area, self.tab);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, UserEvent> for Panel {
    fn on(&mut self, _ev: Event<UserEvent>) -> Option<Msg> {
        // Read-only component, no events handled
        None
    }
}

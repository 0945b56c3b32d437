//! Conclusions activity - full-screen summary of the analysis findings.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    Terminal,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tuirealm::{
    Application, Component, Event, EventListenerCfg, MockComponent, PollStrategy, State,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use crate::data::{
    CONCLUSIONS_TITLE, IMPROVEMENTS, IMPROVEMENTS_TITLE, STRENGTHS, STRENGTHS_TITLE,
};
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{CONCLUSIONS_FOOTER_ACTIONS, format_footer};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

// ============================================================================
// Component identifiers (scoped to ConclusionsActivity)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Summary,
}

// ============================================================================
// Messages (scoped to ConclusionsActivity)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Quit,
    Back,
}

// ============================================================================
// User events (required by tui-realm)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

// ============================================================================
// Summary Component
// ============================================================================

/// Two-column strengths / improvements summary, as in the source study.
pub struct Summary {
    props: Props,
}

impl Summary {
    pub fn new() -> Self {
        Self {
            props: Props::default(),
        }
    }

    fn draw_list(
        frame: &mut ratatui::Frame,
        area: Rect,
        title: &'static str,
        marker: &'static str,
        color: Color,
        items: &[&'static str],
    ) {
        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = items
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled(format!("{marker} "), Style::default().fg(color)),
                    Span::raw(*item),
                ])
            })
            .collect();

        let list = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(list, inner);
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::new()
    }
}

impl MockComponent for Summary {
    fn view(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Self::draw_list(frame, cols[0], STRENGTHS_TITLE, "✓", Color::Blue, &STRENGTHS);
        Self::draw_list(
            frame,
            cols[1],
            IMPROVEMENTS_TITLE,
            "•",
            Color::Magenta,
            &IMPROVEMENTS,
        );
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

impl Component<Msg, UserEvent> for Summary {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        // Extract keyboard event
        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        // Handle Esc for going back (not mapped in dispatcher)
        if key_event.code == tuirealm::event::Key::Esc {
            return Some(Msg::Back);
        }

        // Use dispatcher to convert to semantic action
        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            // Convert global Msg to our local Msg
            return match msg {
                crate::tui::activities::Msg::Quit => Some(Msg::Quit),
                crate::tui::activities::Msg::SwitchToConclusions => Some(Msg::Back), // Toggle back
                _ => None,
            };
        }

        match action {
            AppAction::Conclusions => Some(Msg::Back),
            _ => None,
        }
    }
}

// ============================================================================
// ConclusionsActivity
// ============================================================================

#[derive(Default)]
pub struct ConclusionsActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
}

impl ConclusionsActivity {
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }
}

impl Activity for ConclusionsActivity {
    fn on_create(&mut self, context: Context) {
        self.context = Some(context);

        let mut app = Self::create_application();
        let _ = app.mount(Id::Summary, Box::new(Summary::new()), vec![]);
        let _ = app.active(&Id::Summary);

        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app = self.app.as_mut().expect("app should be initialized");

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Min(8),    // Summary
                    Constraint::Length(1), // Status
                ])
                .split(area);

            let title = format!(" {CONCLUSIONS_TITLE}");
            let title_widget =
                Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title_widget, rows[0]);

            app.view(&Id::Summary, frame, rows[1]);

            // Status bar
            let status = format_footer(CONCLUSIONS_FOOTER_ACTIONS, &[("back", "Esc")]);
            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, rows[2]);
        })?;

        // Process events through tui-realm
        match app.tick(PollStrategy::Once) {
            Ok(messages) => {
                for msg in messages {
                    match msg {
                        Msg::Quit => {
                            self.exit_reason = Some(ExitReason::Quit);
                            return Ok(());
                        }
                        Msg::Back => {
                            self.exit_reason = Some(ExitReason::SwitchToDashboard);
                            return Ok(());
                        }
                    }
                }
            }
            Err(_) => {
                // Timeout, continue
            }
        }

        Ok(())
    }

    fn will_umount(&self) -> Option<&ExitReason> {
        self.exit_reason.as_ref()
    }

    fn on_destroy(&mut self) -> Option<Context> {
        self.app = None;
        self.context.take()
    }
}

//! Dashboard activity - the tabbed chart/card panels.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    Terminal,
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::Paragraph,
};
use tuirealm::{Application, EventListenerCfg, PollStrategy, Update};

use crate::data::{DASHBOARD_AUTHOR, DASHBOARD_TITLE, Tab};
use crate::tui::Model;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{
    DASHBOARD_FOOTER_ACTIONS, Panel, TabBar, format_footer, render_help,
};

// ============================================================================
// Component identifiers (scoped to DashboardActivity)
// ============================================================================

/// Unique identifiers for all components in DashboardActivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    /// Tab selection control (the only focusable component)
    TabBar,
    /// Display panel for the active tab (read-only)
    Panel,
}

// ============================================================================
// Messages (scoped to DashboardActivity)
// ============================================================================

/// All possible messages that can be sent in DashboardActivity.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Application control
    Quit,
    ShowHelp,
    HideHelp,

    // Tab selection
    TabSelected(Tab),
    NextTab,
    PrevTab,

    // Activity transition
    SwitchToConclusions,
}

// ============================================================================
// User events (required by tui-realm, currently unused)
// ============================================================================

/// Custom user events (currently unused, but required by tui-realm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

// ============================================================================
// DashboardActivity
// ============================================================================

/// The tabbed dashboard activity.
#[derive(Default)]
pub struct DashboardActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
}

impl DashboardActivity {
    /// Create and configure the tui-realm application.
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    /// Mount all initial components.
    fn mount_components(app: &mut Application<Id, Msg, UserEvent>, model: &Model) -> Result<()> {
        app.mount(Id::TabBar, Box::new(TabBar::new(model.active_tab)), vec![])?;
        app.mount(Id::Panel, Box::new(Panel::new(model.active_tab)), vec![])?;

        // The tab bar is the only interactive component
        app.active(&Id::TabBar)?;

        Ok(())
    }

    /// Remount the tab bar and panel for the model's active tab.
    fn sync_components(app: &mut Application<Id, Msg, UserEvent>, model: &Model) {
        let _ = app.umount(&Id::TabBar);
        let _ = app.mount(Id::TabBar, Box::new(TabBar::new(model.active_tab)), vec![]);

        let _ = app.umount(&Id::Panel);
        let _ = app.mount(Id::Panel, Box::new(Panel::new(model.active_tab)), vec![]);

        let _ = app.active(&Id::TabBar);
    }
}

impl Activity for DashboardActivity {
    fn on_create(&mut self, context: Context) {
        self.context = Some(context);
        let mut app = Self::create_application();

        let model = &self.context.as_ref().unwrap().model;
        if let Err(e) = Self::mount_components(&mut app, model) {
            tracing::error!("Failed to mount components: {}", e);
        }

        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app = self.app.as_mut().expect("app should be initialized");
        let model = &mut self.context.as_mut().expect("context should be set").model;

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2), // Title + attribution
                    Constraint::Length(1), // Tab bar
                    Constraint::Min(12),   // Panel
                    Constraint::Length(1), // Status
                ])
                .split(area);

            // Title bar
            let header = Paragraph::new(vec![
                ratatui::text::Line::styled(
                    format!(" {DASHBOARD_TITLE}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                ratatui::text::Line::styled(
                    format!(" {DASHBOARD_AUTHOR}"),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]);
            frame.render_widget(header, rows[0]);

            app.view(&Id::TabBar, frame, rows[1]);
            app.view(&Id::Panel, frame, rows[2]);

            // Status bar
            let status = model
                .message
                .clone()
                .unwrap_or_else(|| format_footer(DASHBOARD_FOOTER_ACTIONS, &[("tab", "1-4")]));

            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, rows[3]);

            // Help modal overlay
            if model.show_help {
                render_help(frame);
            }
        })?;

        // Handle help modal events separately (intercepts all input when visible)
        if model.show_help {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                        model.show_help = false;
                    }
                    _ => {}
                }
            }
            return Ok(());
        }

        // Use tick() - the canonical tui-realm heartbeat
        match app.tick(PollStrategy::Once) {
            Ok(messages) => {
                let previous_tab = model.active_tab;

                for msg in messages {
                    match &msg {
                        Msg::SwitchToConclusions => {
                            self.exit_reason = Some(ExitReason::SwitchToConclusions);
                            return Ok(());
                        }
                        Msg::Quit => {
                            self.exit_reason = Some(ExitReason::Quit);
                            return Ok(());
                        }
                        _ => {}
                    }

                    // Process through model, handle chained messages
                    let mut current = Some(msg);
                    while let Some(m) = current {
                        current = model.update(Some(m));
                    }
                }

                // Remount the panel only when the selection actually moved
                if model.active_tab != previous_tab {
                    Self::sync_components(app, model);
                }
            }
            Err(_) => {
                // Timeout is fine, just continue
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

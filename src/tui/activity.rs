//! Activity-based architecture for the TUI.
//!
//! Each screen in the TUI is an Activity with its own Application instance,
//! component IDs, and message types. The ActivityManager orchestrates
//! transitions between the dashboard and the conclusions screen.

use std::io::Stdout;

use color_eyre::eyre::Result;
use ratatui::{Terminal, prelude::CrosstermBackend};

use super::Model;
use super::activities::{ConclusionsActivity, DashboardActivity};

/// Shared context passed between activities.
pub struct Context {
    pub model: Model,
}

/// Exit reasons for activity transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum ExitReason {
    Quit,
    SwitchToDashboard,
    SwitchToConclusions,
}

/// Activity lifecycle trait.
///
/// An activity owns its tui-realm Application for the duration of one screen.
pub trait Activity {
    /// Take ownership of the shared context and mount components.
    fn on_create(&mut self, context: Context);

    /// Draw one frame and process one tick of events.
    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()>;

    /// Some(reason) once the activity wants to leave the screen.
    fn will_umount(&self) -> Option<&ExitReason>;

    /// Tear down and hand the context back to the manager.
    fn on_destroy(&mut self) -> Option<Context>;
}

/// Activity types available in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    Dashboard,
    Conclusions,
}

/// Manages activity lifecycle and transitions.
pub struct ActivityManager {
    context: Option<Context>,
    current: ActivityType,
}

impl ActivityManager {
    pub fn new(context: Context) -> Self {
        Self {
            context: Some(context),
            current: ActivityType::Dashboard,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            let mut activity: Box<dyn Activity> = match self.current {
                ActivityType::Dashboard => Box::<DashboardActivity>::default(),
                ActivityType::Conclusions => Box::<ConclusionsActivity>::default(),
            };

            activity.on_create(self.context.take().expect("context should be available"));
            tracing::debug!(activity = ?self.current, "activity created");

            let reason = loop {
                activity.on_draw(terminal)?;
                if let Some(reason) = activity.will_umount() {
                    break reason.clone();
                }
            };

            self.context = activity.on_destroy();
            self.current = match reason {
                ExitReason::Quit => return Ok(()),
                ExitReason::SwitchToDashboard => ActivityType::Dashboard,
                ExitReason::SwitchToConclusions => ActivityType::Conclusions,
            };
        }
    }
}

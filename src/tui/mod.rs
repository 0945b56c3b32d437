//! Interactive TUI dashboard for the corpus analysis datasets.
//!
//! Architecture: Activity-based with tui-realm for components.
//! Each screen (activity) has its own Application instance and message types.

mod activities;
mod activity;
mod components;
mod model;

use std::io::stdout;
use std::sync::LazyLock;

use color_eyre::eyre::Result;
use crossterm_actions::{
    ActionBinding, ActionConfig, AppEvent, EditingMode, TuiEvent, TuiRealmDispatcher, defaults,
    keys,
};
use ratatui::{
    Terminal,
    crossterm::ExecutableCommand,
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    prelude::CrosstermBackend,
};

use crate::data::Tab;

pub use components::draw_panel;
pub use model::Model;

use activities::Msg;
use activity::{ActivityManager, Context};

// ============================================================================
// Event handling (shared across activities)
// ============================================================================

/// Unified application events - wraps TuiEvent + custom actions.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum AppAction {
    /// Standard TUI events (navigation, input, selection, app)
    Tui(TuiEvent),
    /// Jump directly to a tab
    Goto(Tab),
    /// Switch to the conclusions screen
    Conclusions,
}

/// Global dispatcher instance - shared by all components.
pub static DISPATCHER: LazyLock<TuiRealmDispatcher<AppAction>> = LazyLock::new(|| {
    let mut config = ActionConfig::new(EditingMode::Emacs);

    // Import all standard TuiEvent bindings wrapped in AppAction::Tui
    for binding in defaults::emacs_defaults().bindings() {
        config.bind(ActionBinding {
            action: AppAction::Tui(binding.action),
            keys: binding.keys.clone(),
            description: binding.description.clone(),
        });
    }

    // Direct tab access on 1-4, in display order
    config.bind(
        ActionBinding::builder()
            .action(AppAction::Goto(Tab::Palette))
            .key(keys::char('1'))
            .description("Paleta de Colores")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::Goto(Tab::Elements))
            .key(keys::char('2'))
            .description("Elementos Visuales")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::Goto(Tab::Cultural))
            .key(keys::char('3'))
            .description("Enfoque Cultural")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::Goto(Tab::Typography))
            .key(keys::char('4'))
            .description("Tipografía")
            .build(),
    );

    config.bind(
        ActionBinding::builder()
            .action(AppAction::Conclusions)
            .key(keys::char('c'))
            .description("View conclusions")
            .build(),
    );

    config.compile();
    TuiRealmDispatcher::new(config)
});

/// Convenience function for components to access the dispatcher.
pub fn dispatcher() -> &'static TuiRealmDispatcher<AppAction> {
    &DISPATCHER
}

/// Handle global application events that are common across all components.
/// Returns Some(Msg) if the action was handled, None otherwise.
pub fn handle_global_app_events(action: &AppAction) -> Option<Msg> {
    match action {
        AppAction::Tui(TuiEvent::App(AppEvent::Quit)) => Some(Msg::Quit),
        AppAction::Tui(TuiEvent::App(AppEvent::Help)) => Some(Msg::ShowHelp),
        AppAction::Goto(tab) => Some(Msg::TabSelected(*tab)),
        AppAction::Conclusions => Some(Msg::SwitchToConclusions),
        _ => None,
    }
}

// ============================================================================
// TUI entry point
// ============================================================================

/// Run the interactive dashboard using activity-based architecture.
pub fn run(start_tab: Tab) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let model = Model::new(start_tab);

    // Create context and activity manager
    let context = Context { model };
    let mut manager = ActivityManager::new(context);

    // Run the activity loop
    let result = manager.run(&mut terminal);

    // Cleanup terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

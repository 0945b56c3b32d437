//! Application model for the TUI.
//!
//! The whole view state is one [`Tab`] value plus a couple of UI flags; the
//! datasets themselves are constants and never enter the model.

use tuirealm::Update;

use crate::data::Tab;

use super::activities::Msg;

/// Application model containing all state.
pub struct Model {
    /// Currently active tab. Written only by [`Model::select_tab`].
    pub active_tab: Tab,

    // UI state
    pub quit: bool,
    pub show_help: bool,
    pub message: Option<String>,
}

impl Model {
    /// Create the model with the given starting tab.
    pub fn new(start_tab: Tab) -> Self {
        Self {
            active_tab: start_tab,
            quit: false,
            show_help: false,
            message: None,
        }
    }

    /// Replace the active tab unconditionally.
    ///
    /// The tab set is closed, so there is nothing to validate; the panel
    /// renderer picks up the new value on the next draw.
    pub fn select_tab(&mut self, tab: Tab) {
        tracing::debug!(?tab, "tab selected");
        self.active_tab = tab;
        self.message = None;
    }
}

impl Update<Msg> for Model {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;

        match msg {
            Msg::Quit => {
                self.quit = true;
                None
            }

            Msg::TabSelected(tab) => {
                self.select_tab(tab);
                None
            }
            Msg::NextTab => {
                self.select_tab(self.active_tab.next());
                None
            }
            Msg::PrevTab => {
                self.select_tab(self.active_tab.prev());
                None
            }

            Msg::ShowHelp => {
                self.show_help = true;
                None
            }
            Msg::HideHelp => {
                self.show_help = false;
                None
            }

            // Handled at activity level
            Msg::SwitchToConclusions => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_requested_tab() {
        let model = Model::new(Tab::Cultural);
        assert_eq!(model.active_tab, Tab::Cultural);
        assert!(!model.show_help);
        assert!(!model.quit);
    }

    #[test]
    fn default_tab_is_palette() {
        let model = Model::new(Tab::default());
        assert_eq!(model.active_tab, Tab::Palette);
    }

    #[test]
    fn select_tab_replaces_unconditionally() {
        let mut model = Model::new(Tab::Palette);
        model.select_tab(Tab::Typography);
        assert_eq!(model.active_tab, Tab::Typography);
        // Re-selecting the current tab is a no-op in effect
        model.select_tab(Tab::Typography);
        assert_eq!(model.active_tab, Tab::Typography);
    }

    #[test]
    fn typography_then_cultural_ends_on_cultural() {
        let mut model = Model::new(Tab::Palette);
        model.update(Some(Msg::TabSelected(Tab::Typography)));
        model.update(Some(Msg::TabSelected(Tab::Cultural)));
        assert_eq!(model.active_tab, Tab::Cultural);
    }

    #[test]
    fn next_and_prev_cycle_through_all_tabs() {
        let mut model = Model::new(Tab::Palette);
        let mut seen = vec![model.active_tab];
        for _ in 0..3 {
            model.update(Some(Msg::NextTab));
            seen.push(model.active_tab);
        }
        assert_eq!(
            seen,
            vec![Tab::Palette, Tab::Elements, Tab::Cultural, Tab::Typography]
        );

        model.update(Some(Msg::NextTab));
        assert_eq!(model.active_tab, Tab::Palette);

        model.update(Some(Msg::PrevTab));
        assert_eq!(model.active_tab, Tab::Typography);
    }

    #[test]
    fn quit_sets_flag() {
        let mut model = Model::new(Tab::Palette);
        model.update(Some(Msg::Quit));
        assert!(model.quit);
    }

    #[test]
    fn help_toggles() {
        let mut model = Model::new(Tab::Palette);
        model.update(Some(Msg::ShowHelp));
        assert!(model.show_help);
        model.update(Some(Msg::HideHelp));
        assert!(!model.show_help);
    }
}

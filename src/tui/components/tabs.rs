//! Tab bar component for switching between the four analysis panels.

use crossterm_actions::{NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Tabs,
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::data::{ALL_TABS, Tab};
use crate::tui::activities::Msg;
use crate::tui::activities::dashboard::UserEvent;
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

/// Tab selection control. The closed tab set means every event it can emit
/// names a valid tab.
pub struct TabBar {
    props: Props,
    selected: Tab,
}

impl TabBar {
    pub fn new(selected: Tab) -> Self {
        Self {
            props: Props::default(),
            selected,
        }
    }
}

impl MockComponent for TabBar {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let titles = ALL_TABS
            .iter()
            .map(|tab| Line::from(format!(" {} ", tab.label())));

        let tabs = Tabs::new(titles)
            .select(self.selected.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│");

        frame.render_widget(tabs, area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.selected.index()))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Left) => {
                self.selected = self.selected.prev();
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Right) => {
                self.selected = self.selected.next();
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for TabBar {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        // Extract keyboard event
        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        // Use dispatcher to convert to semantic action
        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)) => {
                self.perform(Cmd::Move(CmdDirection::Left));
                Some(Msg::PrevTab)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => {
                self.perform(Cmd::Move(CmdDirection::Right));
                Some(Msg::NextTab)
            }
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => Some(Msg::NextTab),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => Some(Msg::PrevTab),

            _ => None,
        }
    }
}

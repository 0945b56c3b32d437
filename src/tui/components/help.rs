//! Keybinding help: footer strings and the overlay modal.

use crossterm_actions::{AppEvent, NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::data::Tab;
use crate::tui::{AppAction, dispatcher};

/// A titled run of actions in the help modal.
struct HelpSection {
    title: &'static str,
    actions: &'static [AppAction],
}

const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Global",
        actions: &[
            AppAction::Tui(TuiEvent::App(AppEvent::Quit)),
            AppAction::Tui(TuiEvent::App(AppEvent::Help)),
        ],
    },
    HelpSection {
        title: "Tabs",
        actions: &[
            AppAction::Goto(Tab::Palette),
            AppAction::Goto(Tab::Elements),
            AppAction::Goto(Tab::Cultural),
            AppAction::Goto(Tab::Typography),
        ],
    },
    HelpSection {
        title: "Views",
        actions: &[AppAction::Conclusions],
    },
    HelpSection {
        title: "Navigation",
        actions: &[
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)),
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)),
        ],
    },
];

/// Bindings handled directly by components, outside the dispatcher.
const EXTRA_BINDINGS: &[(&str, &str)] = &[("Close modal / back", "Esc")];

/// Actions summarized in the dashboard footer.
pub const DASHBOARD_FOOTER_ACTIONS: &[AppAction] = &[
    AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)),
    AppAction::Conclusions,
    AppAction::Tui(TuiEvent::App(AppEvent::Help)),
    AppAction::Tui(TuiEvent::App(AppEvent::Quit)),
];

/// Actions summarized in the conclusions footer.
pub const CONCLUSIONS_FOOTER_ACTIONS: &[AppAction] = &[
    AppAction::Conclusions,
    AppAction::Tui(TuiEvent::App(AppEvent::Help)),
    AppAction::Tui(TuiEvent::App(AppEvent::Quit)),
];

/// Build a "desc: key | desc: key" footer from dispatcher help entries,
/// followed by the component-level `extras`.
pub fn format_footer(actions: &[AppAction], extras: &[(&str, &str)]) -> String {
    let help_entries = dispatcher().config().help_entries();

    let mut parts: Vec<String> = actions
        .iter()
        .filter_map(|action| {
            let entry = help_entries.get(action)?;
            if let (Some(key), Some(desc)) = (entry.keys.first(), entry.description) {
                let short = desc.split_whitespace().next().unwrap_or(desc).to_lowercase();
                Some(format!("{short}: {key}"))
            } else {
                None
            }
        })
        .collect();

    parts.extend(extras.iter().map(|(desc, key)| format!("{desc}: {key}")));
    parts.join(" | ")
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn binding_line(description: &str, keys: &str, dim: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("  {description:<24}")),
        Span::styled(keys.to_string(), dim),
    ])
}

/// Render the keybinding overlay on top of the current frame.
pub fn render_help(frame: &mut Frame) {
    let area = centered(frame.area(), 50, 70);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::Gray);

    let help_entries = dispatcher().config().help_entries();

    let mut lines = vec![Line::from(Span::styled("Keybindings", bold)), Line::from("")];
    for section in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(section.title, bold)));
        for action in section.actions {
            let Some(entry) = help_entries.get(action) else {
                continue;
            };
            let keys = entry
                .keys
                .iter()
                .map(|k| k.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let desc = entry.description.unwrap_or("(no description)");
            lines.push(binding_line(desc, &keys, dim));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("Other", bold)));
    for (description, keys) in EXTRA_BINDINGS {
        lines.push(binding_line(description, keys, dim));
    }

    frame.render_widget(Paragraph::new(lines), content_area);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Press Esc, ?, or Enter to close",
        dim.add_modifier(Modifier::ITALIC),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}

//! TUI components using tui-realm.

pub mod cultural;
pub mod elements;
pub mod help;
pub mod palette;
pub mod panel;
pub mod tabs;
pub mod typography;

pub use help::{
    CONCLUSIONS_FOOTER_ACTIONS, DASHBOARD_FOOTER_ACTIONS, format_footer, render_help,
};
pub use panel::{Panel, draw_panel};
pub use tabs::TabBar;

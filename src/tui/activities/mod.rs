//! Activity modules for the TUI.

pub mod conclusions;
pub mod dashboard;

pub use conclusions::ConclusionsActivity;
pub use dashboard::DashboardActivity;
pub use dashboard::Msg;

//! corpusvis: terminal dashboard for the visual analysis of a Chinese-Spanish
//! didactic corpus.
//!
//! The dashboard renders four hand-authored research datasets (color palette
//! frequencies, visual-element percentages, cultural-approach distribution,
//! typography scores) as tabbed chart-plus-card panels, with a separate
//! conclusions screen. All data lives in [`data`] as compile-time constants.

pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod report;
pub mod tui;

//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::data::Tab;

/// Initial tab selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    /// Color palette frequency analysis
    #[default]
    Palette,
    /// Predominant visual elements
    Elements,
    /// Cultural approach distribution
    Cultural,
    /// Typography evaluation
    Typography,
}

impl From<TabArg> for Tab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Palette => Tab::Palette,
            TabArg::Elements => Tab::Elements,
            TabArg::Cultural => Tab::Cultural,
            TabArg::Typography => Tab::Typography,
        }
    }
}

/// Report output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML format (default)
    #[default]
    Yaml,
    /// JSON format
    Json,
}

/// Terminal dashboard for the visual analysis of a Chinese-Spanish didactic corpus.
#[derive(Parser, Debug)]
#[command(name = "corpusvis")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tab to show when the dashboard starts
    #[arg(short, long, value_enum)]
    pub tab: Option<TabArg>,

    /// Print the full analysis report to stdout instead of starting the TUI
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub dump: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path (default: corpusvis.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

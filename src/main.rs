//! CLI entry point for corpusvis.

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use color_eyre::eyre::{Result, WrapErr};

use corpusvis::cli::{Cli, OutputFormat};
use corpusvis::config::DashboardConfig;
use corpusvis::data::Tab;
use corpusvis::report::AnalysisReport;
use corpusvis::{logging, tui};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Shell completions short-circuit everything else
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "corpusvis", &mut io::stdout());
        return Ok(());
    }

    // Non-interactive report output
    if let Some(format) = cli.dump {
        let report = AnalysisReport::build();
        match format {
            OutputFormat::Yaml => {
                let yaml = serde_yaml::to_string(&report)
                    .wrap_err("Failed to serialize report to YAML")?;
                print!("{yaml}");
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .wrap_err("Failed to serialize report to JSON")?;
                println!("{json}");
            }
        }
        return Ok(());
    }

    // Optional config file; CLI flags take precedence over its values
    let config = match cli.config {
        Some(ref path) => DashboardConfig::load(path)
            .wrap_err_with(|| format!("Failed to load config from {}", path.display()))?,
        None => DashboardConfig::default(),
    };

    let start_tab: Tab = match cli.tab {
        Some(arg) => arg.into(),
        None => config.start_tab()?.unwrap_or_default(),
    };

    let log_file = cli.log_file.clone().or(config.logging.file.clone());
    let log_level = cli.log_level.clone().or(config.logging.level.clone());
    let _guard = logging::init_logging(log_file.as_deref(), log_level.as_deref());

    tracing::info!(?start_tab, "starting dashboard");
    tui::run(start_tab)
}

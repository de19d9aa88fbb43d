use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bestseo_application::{SuiteRepositories, ToolSuite};
use bestseo_core::config::SeoConfig;
use bestseo_infrastructure::{ConfigService, SeoPaths, TemplateGenerator};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod helper;
mod render;

use commands::Command;
use commands::handlers::{self, Flow};
use helper::CliHelper;

#[derive(Parser, Debug)]
#[command(name = "bestseo")]
#[command(about = "Best SEO - keyword research, SERP analysis and content briefs", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding saved results
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Maximum number of undo steps kept
    #[arg(long, value_name = "N")]
    max_history: Option<usize>,

    /// Keep every undo step for the session
    #[arg(long, conflicts_with = "max_history")]
    unbounded_history: bool,

    /// Log filter, e.g. `debug` or `history=debug` (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

impl Cli {
    /// Applies command-line overrides on top of the file configuration.
    fn apply_overrides(&self, mut config: SeoConfig) -> SeoConfig {
        if let Some(max_entries) = self.max_history {
            config.history.max_entries = max_entries;
            config.history.unbounded = false;
        }
        if self.unbounded_history {
            config.history.unbounded = true;
        }
        if let Some(data_dir) = &self.data_dir {
            config.storage.data_dir = Some(data_dir.clone());
        }
        config
    }
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn prompt(suite: &ToolSuite) -> String {
    let mut flags = Vec::new();
    if suite.can_undo() {
        flags.push("undo");
    }
    if suite.can_redo() {
        flags.push("redo");
    }

    if flags.is_empty() {
        format!("{}> ", suite.active_panel())
    } else {
        format!("{} [{}]> ", suite.active_panel(), flags.join("|"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config_service = match &cli.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new()?,
    };
    let config = cli.apply_overrides(
        config_service
            .get_config()
            .with_context(|| format!("Failed to load {}", config_service.path().display()))?,
    );

    let data_dir = match &config.storage.data_dir {
        Some(dir) => dir.clone(),
        None => SeoPaths::data_dir()?,
    };
    tracing::info!("Saved results directory: {}", data_dir.display());

    let mut suite = ToolSuite::open(
        Arc::new(TemplateGenerator::new()),
        SuiteRepositories::json_files(&data_dir),
        &config.history,
    )
    .await?;

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Best SEO ===".bright_magenta().bold());
    println!(
        "{}",
        "Type 'help' for commands, 'undo'/'redo' to step through history, or 'quit' to exit."
            .bright_black()
    );
    println!();

    loop {
        let line = match rl.readline(&prompt(&suite)) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        let command = match trimmed.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        match handlers::execute(&mut suite, command).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) if e.is_validation() || e.is_not_found() => {
                println!("{}", e.to_string().yellow());
            }
            Err(e) => {
                tracing::error!("Command failed: {}", e);
                println!("{}", format!("Error: {}", e).red());
            }
        }
    }

    println!("{}", "Goodbye!".bright_green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_file_values() {
        let cli = Cli::parse_from(["bestseo", "--max-history", "5", "--data-dir", "/tmp/seo"]);
        let mut file_config = SeoConfig::default();
        file_config.history.unbounded = true;

        let config = cli.apply_overrides(file_config);

        assert_eq!(config.history.max_entries, 5);
        assert!(!config.history.unbounded);
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/seo")));
    }

    #[test]
    fn test_no_overrides_keeps_file_values() {
        let cli = Cli::parse_from(["bestseo"]);
        let config = cli.apply_overrides(SeoConfig::default());
        assert_eq!(config, SeoConfig::default());
    }

    #[test]
    fn test_unbounded_conflicts_with_max_history() {
        let result =
            Cli::try_parse_from(["bestseo", "--unbounded-history", "--max-history", "3"]);
        assert!(result.is_err());
    }
}

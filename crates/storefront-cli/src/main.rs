//! Command line entry point for the schema migration engine.
//!
//! Reads database settings from `DB_*` environment variables (a local `.env`
//! file is honored when present), connects once, and hands the connection to
//! the migration runner. Any failure logs the error chain and exits nonzero.

use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use storefront_config::DatabaseConfig;
use storefront_migrations::{Runner, VersionStatus};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Applies versioned schema changes to the Storefront platform database.
#[derive(Parser)]
#[command(
    name = "storefront-migrate",
    version,
    about = "Schema migrations for the Storefront platform database"
)]
struct Cli {
    /// Log output format
    #[arg(
        long,
        global = true,
        env = "STOREFRONT_LOG_FORMAT",
        default_value = "text",
        value_enum
    )]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply every pending version
    Up,
    /// Revert the most recently applied version
    Down,
    /// Show every version and whether it is applied
    Status {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // A missing .env is fine; deployed environments set variables directly.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    if let Err(e) = run(cli.command) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    let config = DatabaseConfig::from_env().context("database configuration")?;
    let mut client = storefront_db::connect(&config).context("database connection")?;
    let mut runner = Runner::new(&mut client)?;

    match command {
        Commands::Up => {
            runner.up()?;
        }
        Commands::Down => {
            runner.down()?;
        }
        Commands::Status { json } => {
            let statuses = runner.status()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&statuses)?);
            } else {
                println!("{:>8}  {:<32}  {:<8}  applied at", "version", "name", "state");
                for status in &statuses {
                    println!("{}", status_line(status));
                }
            }
        }
    }
    Ok(())
}

fn status_line(status: &VersionStatus) -> String {
    let state = if status.applied { "applied" } else { "pending" };
    let at = status
        .applied_at
        .map(|t| t.to_string())
        .unwrap_or_default();
    format!(
        "{:>8}  {:<32}  {:<8}  {at}",
        status.version, status.name, state
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn status_line_marks_pending_versions() {
        let line = status_line(&VersionStatus {
            version: 4,
            name: "checkout_line_item_price_config".into(),
            applied: false,
            applied_at: None,
        });
        assert!(line.contains("pending"));
        assert!(line.starts_with("       4  checkout_line_item_price_config"));
    }
}

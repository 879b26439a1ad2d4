use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use endpoint_link::commands;
use endpoint_link::config;
use endpoint_link::error::Result;

#[derive(Parser, Debug)]
#[command(name = "endpoint-link")]
#[command(about = "Build and inspect endpoint wirings", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (YAML/JSON/TOML)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Validate the configuration, build the wiring and print it (default)
    Check,
}

fn init_tracing(debug: bool, json: bool) {
    let log_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("endpoint_link={log_level}")));

    // logs go to stderr so the description on stdout stays parseable
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug, args.json_logs);

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            config::load_from_path(path).await
        }
        None => {
            info!("Loading configuration from default locations");
            config::load_from_env_or_file().await
        }
    }
    .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    match args.command.unwrap_or(Command::Check) {
        Command::Check => {
            let description = commands::run_check(&config)?;
            println!("{}", serde_json::to_string_pretty(&description)?);
        }
    }

    Ok(())
}

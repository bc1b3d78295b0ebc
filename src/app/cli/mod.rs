//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api;
use crate::app::output::{self, OutputConfig};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "provisioner")]
#[command(version)]
#[command(
    about = "Sync service repositories, scaffold container builds, and start the stack",
    long_about = None
)]
struct Cli {
    /// Working root holding the checkouts and compose file (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    dir: Option<PathBuf>,
    /// Configuration file (defaults to <dir>/provision.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Increase diagnostic logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sync sources, generate build files, initialize the database, rebuild and start containers
    #[clap(visible_alias = "u")]
    Up,
    /// Sync sources and generate build files only
    #[clap(visible_alias = "s")]
    Scaffold,
    /// Print the effective configuration as TOML
    #[clap(visible_alias = "c")]
    Config,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    output::configure(OutputConfig { quiet: cli.quiet });

    if let Err(e) = dispatch(cli) {
        output::error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let root = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Up => {
            output::header("=== Provisioning: update and start ===");
            let report = api::up(&root, config_path)?;
            tracing::debug!(?report, "provisioning finished");
            output::success("System started");
        }
        Commands::Scaffold => {
            output::header("=== Provisioning: scaffold ===");
            let report = api::scaffold(&root, config_path)?;
            if report.created.is_empty() {
                output::success("Build files already in place");
            } else {
                output::success(&format!("Created {} file(s)", report.created.len()));
            }
        }
        Commands::Config => {
            let config = api::effective_config(&root, config_path)?;
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| AppError::config_error(format!("Failed to render config: {}", e)))?;
            print!("{}", rendered);
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{cmd_config, cmd_list, cmd_open, load_config, ConfigAction, OpenArgs};

#[derive(Parser)]
#[command(
    name = "autolink",
    version,
    about = "Reuse the running IDE that has a solution open, or launch a new one"
)]
struct Cli {
    /// Log at debug level (AUTOLINK_LOG or RUST_LOG take precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read and write this config file instead of ~/.config/autolink/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bring forward the IDE that has TARGET open, or launch one for it
    Open(OpenArgs),

    /// List running IDE instances and what they have open
    List,

    /// Manage autolink configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config_path = cli.config.as_deref();

    let code = match cli.command {
        Commands::Open(args) => cmd_open(&load_config(config_path)?, args)?,
        Commands::List => {
            cmd_list(&load_config(config_path)?)?;
            0
        }
        Commands::Config { action } => {
            cmd_config(action, config_path)?;
            0
        }
    };

    // Codes outside 0..=255 (e.g. NTSTATUS values) collapse to 1.
    Ok(u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            std::env::var("AUTOLINK_LOG")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or_else(|_| default.to_string()),
        )
        .try_init();
}

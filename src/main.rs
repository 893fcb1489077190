use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rental_desk::config::{resolve_config_path, DeskConfig};
use rental_desk::models::Vehicle;
use rental_desk::shell::Shell;
use rental_desk::Fleet;

#[derive(Parser)]
#[command(name = "rental-desk")]
#[command(about = "In-memory vehicle rental desk")]
struct Cli {
    /// Path to the desk configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log lookups and rejected input
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive desk
    Shell {
        /// Start with an empty fleet instead of the configured one
        #[arg(long)]
        empty: bool,
    },
    /// Write a sample configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Initialize tracing on stderr so stdout stays with the shell.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "rental_desk=debug"
    } else {
        "rental_desk=warn"
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = resolve_config_path(cli.config)?;

    match cli.command {
        Some(Commands::InitConfig { force }) => {
            if config_path.exists() && !force {
                anyhow::bail!(
                    "Config file {} already exists (use --force to overwrite)",
                    config_path.display()
                );
            }
            DeskConfig::sample().save_to(&config_path)?;
            println!("Wrote {}", config_path.display());
        }
        Some(Commands::Shell { empty }) => run_shell(DeskConfig::load(&config_path), empty)?,
        None => run_shell(DeskConfig::load(&config_path), false)?,
    }

    Ok(())
}

fn run_shell(config: DeskConfig, empty: bool) -> anyhow::Result<()> {
    let fleet = if empty {
        Fleet::new()
    } else {
        Fleet::with_vehicles(config.fleet.into_iter().map(Vehicle::from))
    };
    tracing::debug!(vehicles = fleet.vehicles().len(), "Desk open");

    let stdin = io::stdin();
    let mut shell = Shell::new(fleet, config.currency_symbol, stdin.lock(), io::stdout());
    shell.run()
}

//! Grid path-finding from the command line.
//!
//! Run with: `astar solve --seed 42` or `astar compare --map level.txt`

mod commands;
mod dirs;
mod display;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Compare, Solve};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// A* path-finding on generated or loaded grid levels
#[derive(Parser)]
#[command(name = "astar")]
#[command(about = "Find routes across grid levels with A*", long_about = None)]
#[command(version)]
struct Cli {
    /// Also write logs to a file. Without a value, uses the platform cache directory
    #[arg(long, value_name = "DIR", num_args = 0..=1, global = true)]
    log_dir: Option<Option<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Solve one level and print the walked route
    Solve(Solve),

    /// Solve one level with every objective and compare the results
    Compare(Compare),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_dir = match cli.log_dir {
        Some(Some(dir)) => Some(dir),
        Some(None) => Some(dirs::log_dir()),
        None => None,
    };
    setup_logging(log_dir)?;

    match cli.command {
        Command::Solve(cmd) => cmd.execute(),
        Command::Compare(cmd) => cmd.execute(),
    }
}

/// Setup logging to stderr and, when requested, to a file
fn setup_logging(log_dir: Option<PathBuf>) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let file_layer = match &log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, "astar.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            // Leak the guard to keep file writer alive
            std::mem::forget(guard);

            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking_file)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::debug!("Log file: {}/astar.log", dir.display());
    }

    Ok(())
}

//! Clocktower - Main entry point.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clocktower_cli::config::{self, CliConfig, DEFAULT_LOG_FILTER};
use clocktower_cli::{run_roster, run_script, ScriptOptions};

#[derive(Parser, Debug)]
#[command(name = "clocktower")]
#[command(about = "Inspect Blood on the Clocktower rosters and scripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a roster (character pack) document
    Roster {
        /// Path to the roster JSON
        path: PathBuf,
    },

    /// Summarize a script document
    Script {
        /// Path to the script JSON
        path: PathBuf,

        /// Roster used to resolve characters and print the merged night order
        /// (defaults to CLOCKTOWER_ROSTER)
        #[arg(short, long)]
        roster: Option<PathBuf>,

        /// Print the compressed share link
        #[arg(short, long)]
        share_url: bool,
    },
}

fn main() -> anyhow::Result<()> {
    if let Ok(cwd) = std::env::current_dir() {
        config::load_dotenv_from(&cwd);
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Roster { path } => run_roster(&path, &mut out)?,
        Command::Script {
            path,
            roster,
            share_url,
        } => {
            let options = ScriptOptions {
                path,
                roster: roster.or(config.default_roster),
                share_url,
            };
            run_script(&options, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

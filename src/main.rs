//! gt - Gas Town command line

mod cli;

use anstream::eprintln;
use clap::{Parser, Subcommand};
use cli::style::Stylize;
use gastown::error::Result;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gt",
    version,
    about = "Gas Town - bring up the agent fleet and submit work to the merge queue"
)]
struct Cli {
    /// Directory to run in (defaults to the current directory)
    #[arg(long, global = true)]
    path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the current branch to the merge queue
    ///
    /// Detects the source issue (and worker) from the branch name, inherits
    /// the issue's priority and targets its epic's integration branch when
    /// one exists.
    #[command(name = "submit-for-merge", visible_alias = "done")]
    SubmitForMerge {
        /// Source issue ID (default: parse from branch name)
        #[arg(long)]
        issue: Option<String>,

        /// Override priority (0-4, default: inherit from issue)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=4))]
        priority: Option<u8>,

        /// Show the merge request without creating it
        #[arg(long)]
        dry_run: bool,

        /// Preview the merge request and ask before creating it
        #[arg(long)]
        confirm: bool,
    },

    /// Start Gas Town by launching the Mayor and Deacon
    ///
    /// Sessions that are already running are left alone. Other agents are
    /// started lazily as needed.
    #[command(name = "start-fleet", visible_alias = "start")]
    StartFleet {
        /// Only report which sessions would be started
        #[arg(long)]
        dry_run: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::SubmitForMerge {
            issue,
            priority,
            dry_run,
            confirm,
        } => {
            cli::done::run_done(
                &path,
                cli::done::DoneOptions {
                    issue,
                    priority,
                    dry_run,
                    confirm,
                },
            )
            .await
        }
        Commands::StartFleet { dry_run } => {
            cli::start::run_start(&path, cli::start::StartOptions { dry_run }).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".error());
            ExitCode::FAILURE
        }
    }
}

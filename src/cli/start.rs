//! Start command - bring up the Mayor and Deacon

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check};
use anstream::println;
use gastown::error::Result;
use gastown::fleet::{StartupReport, fleet_plan, start_fleet};
use std::path::Path;

/// Options for the start command
#[derive(Debug, Clone, Default)]
pub struct StartOptions {
    /// Query sessions only; start nothing
    pub dry_run: bool,
}

/// Run the start command
pub async fn run_start(path: &Path, options: StartOptions) -> Result<()> {
    let ctx = CommandContext::new(path)?;

    println!(
        "Starting Gas Town from {}",
        ctx.town_root.display().muted()
    );
    println!();

    let members = fleet_plan(&ctx.town_root, &ctx.config.fleet);
    let progress = CliProgress::new();
    let result = start_fleet(
        ctx.sessions.as_ref(),
        &members,
        &progress,
        options.dry_run,
    )
    .await;
    progress.clear();
    let report = result?;

    println!();
    if options.dry_run {
        println!("{}", "Dry run complete".muted());
        return Ok(());
    }

    print_running(&report);
    Ok(())
}

/// Print the success summary with attach hints
fn print_running(report: &StartupReport) {
    println!("{} Gas Town is running", check());
    println!();
    for session in &report.sessions {
        let hint = format!("tmux attach -t {}", session.session);
        println!(
            "  Attach to {}: {}",
            session.role,
            hint.muted()
        );
    }
}

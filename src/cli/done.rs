//! Done command - submit the current branch to the merge queue

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check};
use anstream::println;
use dialoguer::Confirm;
use gastown::error::{Error, Result};
use gastown::mq::{MergeRequestPlan, SubmitRequest, execute_merge_request, prepare_merge_request};
use gastown::types::Issue;
use std::path::Path;

/// Options for the done command
#[derive(Debug, Clone, Default)]
pub struct DoneOptions {
    /// Explicit source issue
    pub issue: Option<String>,
    /// Explicit priority (0-4)
    pub priority: Option<u8>,
    /// Show what would be submitted without creating anything
    pub dry_run: bool,
    /// Preview and prompt for confirmation before creating
    pub confirm: bool,
}

/// Run the done command
pub async fn run_done(path: &Path, options: DoneOptions) -> Result<()> {
    let ctx = CommandContext::new(path)?;

    let branch = ctx.vcs.current_branch().await?;
    let rig = ctx.rig();

    let request = SubmitRequest {
        branch: &branch,
        issue: options.issue.as_deref(),
        priority: options.priority,
        rig: rig.as_deref(),
    };

    let plan = prepare_merge_request(
        ctx.store.as_ref(),
        ctx.vcs.as_ref(),
        &request,
        &ctx.config.merge_queue,
    )
    .await?;

    if options.dry_run {
        print_preview(&plan);
        println!("{}", "Dry run - nothing submitted".muted());
        return Ok(());
    }

    if options.confirm {
        print_preview(&plan);
        if !Confirm::new()
            .with_prompt("Submit to merge queue?")
            .default(true)
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))?
        {
            println!("{}", "Aborted".muted());
            return Ok(());
        }
        println!();
    }

    let issue = execute_merge_request(ctx.store.as_ref(), &plan).await?;
    print_submitted(&plan, &issue);

    Ok(())
}

fn print_fields(plan: &MergeRequestPlan) {
    let fields = &plan.fields;
    println!("  Source: {}", fields.branch.accent());
    println!("  Target: {}", fields.target.accent());
    println!("  Issue: {}", fields.source_issue);
    if !fields.worker.is_empty() {
        println!("  Worker: {}", fields.worker);
    }
    if !fields.rig.is_empty() {
        println!("  Rig: {}", fields.rig);
    }
    println!("  Priority: P{}", plan.priority);
}

/// Print the merge request for --dry-run and --confirm
fn print_preview(plan: &MergeRequestPlan) {
    println!("{}:", "Merge request".emphasis());
    println!("  Title: {}", plan.title);
    print_fields(plan);
    println!();
}

/// Print the summary after a successful submission
fn print_submitted(plan: &MergeRequestPlan, issue: &Issue) {
    println!("{} Work submitted to merge queue", check());
    println!("  MR ID: {}", issue.id.emphasis());
    print_fields(plan);
    println!();
    println!("{}", "The Refinery will process your merge request.".muted());
}

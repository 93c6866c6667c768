//! Merge request submission - effectful operations
//!
//! Gathers the optional enrichments (priority, integration target) from the
//! issue store and VCS, plans the merge request, and creates it. Lookups
//! that only enrich the request never fail the submission; the store write
//! is the only step whose failure is surfaced as a submission error.

use crate::beads::IssueStore;
use crate::config::MergeQueueConfig;
use crate::error::{Error, Result};
use crate::mq::plan::{MergeRequestPlan, PlanInputs, create_merge_request_plan, resolve_source_issue};
use crate::mq::target::resolve_integration_target;
use crate::types::{Issue, MAX_PRIORITY};
use crate::vcs::Vcs;
use tracing::{debug, warn};

/// One request to put a branch into the merge queue
#[derive(Debug, Clone, Default)]
pub struct SubmitRequest<'a> {
    /// Branch being submitted
    pub branch: &'a str,
    /// Explicit source issue (overrides the branch name)
    pub issue: Option<&'a str>,
    /// Explicit priority 0-4 (overrides the source issue's priority)
    pub priority: Option<u8>,
    /// Rig the branch belongs to
    pub rig: Option<&'a str>,
}

/// Work out the merge request's priority.
///
/// An explicit override wins. Otherwise the source issue's priority is
/// inherited; if the issue can't be read, `default_priority` is used.
pub async fn resolve_priority(
    store: &dyn IssueStore,
    issue_id: &str,
    priority_override: Option<u8>,
    default_priority: u8,
) -> u8 {
    if let Some(priority) = priority_override {
        return priority;
    }

    match store.show(issue_id).await {
        Ok(issue) => issue.priority.min(MAX_PRIORITY),
        Err(e) => {
            warn!(
                issue = issue_id,
                error = %e,
                "could not read source issue; using default priority P{default_priority}"
            );
            default_priority
        }
    }
}

/// Gather and plan a merge request without creating it.
///
/// Checks run in order: trunk branch, source issue, priority range. A plan
/// is only returned if every field value is a single line.
pub async fn prepare_merge_request(
    store: &dyn IssueStore,
    vcs: &dyn Vcs,
    request: &SubmitRequest<'_>,
    config: &MergeQueueConfig,
) -> Result<MergeRequestPlan> {
    let source = resolve_source_issue(request.branch, request.issue, &config.trunk)?;
    if let Some(priority) = request.priority.filter(|p| *p > MAX_PRIORITY) {
        return Err(Error::InvalidPriority(priority));
    }
    debug!(branch = request.branch, issue = %source.issue, worker = ?source.worker, "resolved source");

    let integration_target = resolve_integration_target(store, vcs, &source.issue, config).await;
    let priority = resolve_priority(
        store,
        &source.issue,
        request.priority,
        config.default_priority,
    )
    .await;

    let plan = create_merge_request_plan(&PlanInputs {
        branch: request.branch,
        source: &source,
        rig: request.rig,
        integration_target: integration_target.as_deref(),
        trunk: &config.trunk,
        priority,
    });
    plan.fields.validate()?;
    Ok(plan)
}

/// Create the merge-request issue described by `plan`.
pub async fn execute_merge_request(
    store: &dyn IssueStore,
    plan: &MergeRequestPlan,
) -> Result<Issue> {
    store
        .create(&plan.create_options())
        .await
        .map_err(|e| Error::Submission {
            issue: plan.fields.source_issue.clone(),
            source: Box::new(e),
        })
}

/// Submit a branch to the merge queue.
///
/// Creates exactly one merge-request issue on success and none on failure.
pub async fn submit_merge_request(
    store: &dyn IssueStore,
    vcs: &dyn Vcs,
    request: &SubmitRequest<'_>,
    config: &MergeQueueConfig,
) -> Result<Issue> {
    let plan = prepare_merge_request(store, vcs, request, config).await?;
    execute_merge_request(store, &plan).await
}

//! Merge request planning - pure functions
//!
//! No I/O happens here. The effectful lookups (priority, integration target)
//! are done by the caller and passed in.

use crate::error::{Error, Result};
use crate::mq::branch::parse_branch_name;
use crate::mq::fields::{MergeRequestFields, check_single_line, format_mr_fields};
use crate::types::{CreateOptions, IssueType, is_trunk};

/// Source issue and worker for a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    /// Source issue ID
    pub issue: String,
    /// Worker parsed from the branch, if any
    pub worker: Option<String>,
}

/// Validate the branch and work out which issue it is for.
///
/// Trunk branches are rejected outright. An explicit (non-empty) issue ID
/// takes precedence over one parsed from the branch name and must be a
/// single line; the worker always comes from the branch name.
pub fn resolve_source_issue(
    branch: &str,
    issue_override: Option<&str>,
    trunk: &str,
) -> Result<ResolvedSource> {
    if is_trunk(branch, trunk) {
        return Err(Error::InvalidBranch(branch.to_string()));
    }

    let issue_override = issue_override.filter(|id| !id.is_empty());
    if let Some(id) = issue_override {
        check_single_line("issue id", id)?;
    }

    let info = parse_branch_name(branch);
    let issue = issue_override
        .map(str::to_string)
        .or(info.issue)
        .ok_or_else(|| Error::MissingSourceIssue {
            branch: branch.to_string(),
        })?;

    Ok(ResolvedSource {
        issue,
        worker: info.worker,
    })
}

/// Everything gathered for one submission
#[derive(Debug, Clone)]
pub struct PlanInputs<'a> {
    /// Branch being submitted
    pub branch: &'a str,
    /// Resolved source issue and worker
    pub source: &'a ResolvedSource,
    /// Rig the branch belongs to
    pub rig: Option<&'a str>,
    /// Integration branch, if one was detected
    pub integration_target: Option<&'a str>,
    /// Trunk branch used when there is no integration branch
    pub trunk: &'a str,
    /// Resolved priority
    pub priority: u8,
}

/// A merge request ready to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequestPlan {
    /// Issue title
    pub title: String,
    /// Fields written into the description
    pub fields: MergeRequestFields,
    /// Issue priority
    pub priority: u8,
}

impl MergeRequestPlan {
    /// Description text for the merge-request issue
    #[must_use]
    pub fn description(&self) -> String {
        format_mr_fields(&self.fields)
    }

    /// Issue store options that create this merge request
    #[must_use]
    pub fn create_options(&self) -> CreateOptions {
        CreateOptions {
            title: self.title.clone(),
            issue_type: IssueType::MergeRequest,
            priority: self.priority,
            description: self.description(),
        }
    }
}

/// Create a merge request plan (PURE - no I/O, easily testable)
pub fn create_merge_request_plan(inputs: &PlanInputs<'_>) -> MergeRequestPlan {
    let source = inputs.source;
    MergeRequestPlan {
        title: format!("Merge: {}", source.issue),
        fields: MergeRequestFields {
            branch: inputs.branch.to_string(),
            target: inputs.integration_target.unwrap_or(inputs.trunk).to_string(),
            source_issue: source.issue.clone(),
            worker: source.worker.clone().unwrap_or_default(),
            rig: inputs.rig.unwrap_or_default().to_string(),
        },
        priority: inputs.priority,
    }
}

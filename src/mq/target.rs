//! Integration branch detection
//!
//! Issues grouped under an epic may merge into a shared
//! `<prefix><epic id>` branch instead of trunk. That grouping is optional
//! metadata which may be missing or stale, so every failure here means
//! "no integration branch" and submission continues against trunk.

use crate::beads::IssueStore;
use crate::config::MergeQueueConfig;
use crate::error::Result;
use crate::types::{IssueType, is_trunk};
use crate::vcs::Vcs;
use tracing::{debug, warn};

/// Find the integration branch an issue should merge into.
///
/// Returns `None` when the issue has no epic parent, the epic has no
/// integration branch, or any lookup fails.
pub async fn resolve_integration_target(
    store: &dyn IssueStore,
    vcs: &dyn Vcs,
    issue_id: &str,
    config: &MergeQueueConfig,
) -> Option<String> {
    match detect_integration_branch(store, vcs, issue_id, config).await {
        Ok(target) => target,
        Err(e) => {
            warn!(issue = issue_id, error = %e, "integration branch lookup failed; using trunk");
            None
        }
    }
}

async fn detect_integration_branch(
    store: &dyn IssueStore,
    vcs: &dyn Vcs,
    issue_id: &str,
    config: &MergeQueueConfig,
) -> Result<Option<String>> {
    let issue = store.show(issue_id).await?;
    let Some(parent_id) = issue.parent.as_deref().filter(|p| !p.is_empty()) else {
        return Ok(None);
    };

    let parent = store.show(parent_id).await?;
    if parent.issue_type != IssueType::Epic {
        debug!(issue = issue_id, parent = parent_id, "parent is not an epic");
        return Ok(None);
    }

    let candidate = format!("{}{}", config.integration_prefix, parent.id);
    if is_trunk(&candidate, &config.trunk) {
        return Ok(None);
    }

    if vcs.branch_exists(&candidate).await? {
        return Ok(Some(candidate));
    }

    // Remote lookups need the network; an unreachable remote is not an error
    match vcs.remote_branch_exists(&config.remote, &candidate).await {
        Ok(true) => Ok(Some(candidate)),
        Ok(false) => Ok(None),
        Err(e) => {
            debug!(branch = %candidate, error = %e, "remote branch check failed");
            Ok(None)
        }
    }
}

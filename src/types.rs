//! Core types for gastown

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Highest (least urgent) issue priority
pub const MAX_PRIORITY: u8 = 4;

/// Priority used when the source issue cannot be read
///
/// Overridable through `[merge_queue] default_priority`.
pub const DEFAULT_PRIORITY: u8 = 2;

/// Trunk branch names that can never be submitted to the merge queue
pub const TRUNK_BRANCHES: [&str; 2] = ["main", "master"];

/// Issue type as stored by `bd`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    /// Ordinary unit of work
    Task,
    /// Defect
    Bug,
    /// New functionality
    Feature,
    /// Parent issue grouping related work
    Epic,
    /// Maintenance work
    Chore,
    /// Pending code submission in the merge queue
    MergeRequest,
    /// Any type this crate does not interpret
    #[serde(untagged)]
    Other(String),
}

impl IssueType {
    /// The `bd` spelling of this type
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Task => "task",
            Self::Bug => "bug",
            Self::Feature => "feature",
            Self::Epic => "epic",
            Self::Chore => "chore",
            Self::MergeRequest => "merge-request",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An issue in the tracking store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Opaque issue ID (e.g. `gt-abc`)
    pub id: String,
    /// Issue title
    pub title: String,
    /// Issue type
    #[serde(alias = "type")]
    pub issue_type: IssueType,
    /// Priority, 0 (most urgent) to 4
    #[serde(default = "default_priority")]
    pub priority: u8,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Parent issue ID, if this issue is part of a larger one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

const fn default_priority() -> u8 {
    DEFAULT_PRIORITY
}

/// Options for creating an issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOptions {
    /// Issue title
    pub title: String,
    /// Issue type
    pub issue_type: IssueType,
    /// Priority, 0 to 4
    pub priority: u8,
    /// Description text
    pub description: String,
}

/// Check whether a branch name is a trunk branch
///
/// `configured_trunk` is the town's trunk setting; `main` and `master` are
/// always treated as trunk regardless.
pub fn is_trunk(branch: &str, configured_trunk: &str) -> bool {
    branch == configured_trunk || TRUNK_BRANCHES.contains(&branch)
}

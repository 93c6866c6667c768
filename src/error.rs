//! Error types for gastown

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by gastown operations
#[derive(Debug, Error)]
pub enum Error {
    /// No town root above the given directory
    #[error("not in a Gas Town workspace: no town root found above {}", .0.display())]
    NotInWorkspace(PathBuf),

    /// A trunk branch was submitted to the merge queue
    #[error("cannot submit trunk branch '{0}' to the merge queue")]
    InvalidBranch(String),

    /// Source issue could not be determined from the branch or flags
    #[error("cannot determine source issue from branch '{branch}'; use --issue to specify")]
    MissingSourceIssue {
        /// Branch that was submitted
        branch: String,
    },

    /// A merge-request field value contains a line break
    #[error("invalid {field} {value:?}: line breaks are not allowed")]
    InvalidField {
        /// Field the value was meant for
        field: &'static str,
        /// Offending value
        value: String,
    },

    /// Priority outside the 0-4 range
    #[error("invalid priority {0}: expected 0-4")]
    InvalidPriority(u8),

    /// Issue does not exist in the store
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    /// Issue store (bd) failure
    #[error("issue store error: {0}")]
    IssueStore(String),

    /// Git command failure
    #[error("git error: {0}")]
    Git(String),

    /// Session host (tmux) failure
    #[error("session error: {0}")]
    Session(String),

    /// Creating the merge-request issue failed
    #[error("creating merge request for {issue}: {source}")]
    Submission {
        /// Source issue the merge request was for
        issue: String,
        /// Underlying store error
        #[source]
        source: Box<Error>,
    },

    /// Bringing up a fleet session failed
    #[error("starting {session}: {cause}")]
    Startup {
        /// Session that failed to start
        session: String,
        /// Underlying session host error
        #[source]
        cause: Box<Error>,
    },

    /// Configuration file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for gastown operations
pub type Result<T> = std::result::Result<T, Error>;

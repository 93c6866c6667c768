//! Issue store access
//!
//! Issues live in a beads database managed by the `bd` CLI. This crate only
//! reads issues and creates merge requests; it never edits existing issues.

mod cli;

pub use cli::BeadsCli;

use crate::error::Result;
use crate::types::{CreateOptions, Issue};
use async_trait::async_trait;

/// Issue store operations
#[async_trait]
pub trait IssueStore: Send + Sync {
    /// Fetch one issue by ID
    ///
    /// Returns [`Error::IssueNotFound`](crate::error::Error::IssueNotFound)
    /// when the ID does not exist.
    async fn show(&self, id: &str) -> Result<Issue>;

    /// Create a new issue and return it with its assigned ID
    async fn create(&self, opts: &CreateOptions) -> Result<Issue>;
}

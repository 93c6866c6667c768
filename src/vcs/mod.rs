//! Version control access
//!
//! Only the handful of queries merge-queue submission needs.

mod git;

pub use git::GitCli;

use crate::error::Result;
use async_trait::async_trait;

/// VCS operations used by merge-queue submission
#[async_trait]
pub trait Vcs: Send + Sync {
    /// Name of the branch checked out in the working directory
    async fn current_branch(&self) -> Result<String>;

    /// Whether a local branch exists
    async fn branch_exists(&self, branch: &str) -> Result<bool>;

    /// Whether a branch exists on the given remote
    async fn remote_branch_exists(&self, remote: &str, branch: &str) -> Result<bool>;
}

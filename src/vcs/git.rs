//! Git implementation of [`Vcs`] using the `git` CLI

use crate::error::{Error, Result};
use crate::vcs::Vcs;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Output;
use tokio::process::Command;
use tracing::debug;

/// Git adapter bound to a working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Create an adapter running git in `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    async fn output(&self, args: &[&str]) -> Result<Output> {
        debug!(?args, workdir = %self.workdir.display(), "git");
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .await
            .map_err(|e| Error::Git(format!("failed to run git {}: {e}", args.join(" "))))
    }

    async fn run(&self, args: &[&str]) -> Result<String> {
        let out = self.output(args).await?;
        if !out.status.success() {
            return Err(Error::Git(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }
        Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
    }
}

#[async_trait]
impl Vcs for GitCli {
    async fn current_branch(&self) -> Result<String> {
        // symbolic-ref also works on a branch with no commits yet
        let out = self
            .output(&["symbolic-ref", "--quiet", "--short", "HEAD"])
            .await?;
        match out.status.code() {
            Some(0) => Ok(String::from_utf8_lossy(&out.stdout).trim().to_string()),
            Some(1) => Err(Error::Git(format!(
                "HEAD is detached in {}; check out a branch first",
                self.workdir.display()
            ))),
            _ => Err(Error::Git(format!(
                "git symbolic-ref HEAD failed: {}",
                String::from_utf8_lossy(&out.stderr).trim()
            ))),
        }
    }

    async fn branch_exists(&self, branch: &str) -> Result<bool> {
        let reference = format!("refs/heads/{branch}");
        let out = self
            .output(&["show-ref", "--verify", "--quiet", &reference])
            .await?;
        // show-ref exits 1 for a missing ref; anything else is a real failure
        match out.status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(Error::Git(format!(
                "git show-ref {reference} failed: {}",
                String::from_utf8_lossy(&out.stderr).trim()
            ))),
        }
    }

    async fn remote_branch_exists(&self, remote: &str, branch: &str) -> Result<bool> {
        let heads = self.run(&["ls-remote", "--heads", remote, branch]).await?;
        Ok(!heads.is_empty())
    }
}

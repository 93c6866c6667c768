//! `bd` CLI implementation of [`IssueStore`]

use crate::beads::IssueStore;
use crate::error::{Error, Result};
use crate::types::{CreateOptions, Issue};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Output;
use tokio::process::Command;
use tracing::debug;

/// Issue store backed by the `bd` command
#[derive(Debug, Clone)]
pub struct BeadsCli {
    workdir: PathBuf,
}

impl BeadsCli {
    /// Create a store that runs `bd` in `workdir`
    ///
    /// `bd` discovers its database from the working directory, so this should
    /// be a directory inside the rig.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    async fn output(&self, args: &[String]) -> Result<Output> {
        debug!(?args, workdir = %self.workdir.display(), "bd");
        Command::new("bd")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .await
            .map_err(|e| Error::IssueStore(format!("failed to run bd: {e}")))
    }
}

/// Build the argument list for `bd create`.
fn create_args(opts: &CreateOptions) -> Vec<String> {
    vec![
        "create".to_string(),
        "--json".to_string(),
        format!("--title={}", opts.title),
        format!("--type={}", opts.issue_type),
        format!("--priority={}", opts.priority),
        format!("--description={}", opts.description),
    ]
}

/// Decode `bd show --json` output, which is an array of issues.
fn parse_show_output(id: &str, stdout: &str) -> Result<Issue> {
    let issues: Vec<Issue> = serde_json::from_str(stdout)?;
    issues
        .into_iter()
        .next()
        .ok_or_else(|| Error::IssueNotFound(id.to_string()))
}

fn stderr_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).trim().to_string()
}

fn is_not_found(stderr: &str) -> bool {
    let lower = stderr.to_lowercase();
    lower.contains("not found") || lower.contains("no issue")
}

#[async_trait]
impl IssueStore for BeadsCli {
    async fn show(&self, id: &str) -> Result<Issue> {
        let args = ["show".to_string(), id.to_string(), "--json".to_string()];
        let out = self.output(&args).await?;
        if out.status.success() {
            return parse_show_output(id, &String::from_utf8_lossy(&out.stdout));
        }

        let stderr = stderr_of(&out);
        if is_not_found(&stderr) {
            Err(Error::IssueNotFound(id.to_string()))
        } else {
            Err(Error::IssueStore(format!("bd show {id} failed: {stderr}")))
        }
    }

    async fn create(&self, opts: &CreateOptions) -> Result<Issue> {
        let out = self.output(&create_args(opts)).await?;
        if !out.status.success() {
            return Err(Error::IssueStore(format!(
                "bd create '{}' failed: {}",
                opts.title,
                stderr_of(&out)
            )));
        }
        Ok(serde_json::from_slice(&out.stdout)?)
    }
}

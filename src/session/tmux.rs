//! tmux implementation of [`SessionHost`]

use crate::error::{Error, Result};
use crate::session::{LaunchSpec, SessionHost};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Output;
use tokio::process::Command;
use tracing::{debug, warn};

/// Session host backed by the `tmux` command
#[derive(Debug, Clone, Default)]
pub struct Tmux;

impl Tmux {
    /// Create a tmux session host
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn output(args: &[String]) -> Result<Output> {
        debug!(?args, "tmux");
        Command::new("tmux")
            .args(args)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::Session("tmux not found".to_string()),
                _ => Error::Session(format!("failed to run tmux: {e}")),
            })
    }

    async fn run(args: &[String]) -> Result<()> {
        let out = Self::output(args).await?;
        if out.status.success() {
            Ok(())
        } else {
            Err(Error::Session(format!(
                "tmux {} failed: {}",
                args.first().map_or("", String::as_str),
                String::from_utf8_lossy(&out.stderr).trim()
            )))
        }
    }
}

/// Exact-match session target; a bare name would also match prefixes.
fn exact_target(name: &str) -> String {
    format!("={name}")
}

/// Whether `has-session` stderr means "no such session" rather than a failure.
fn is_missing_session(stderr: &str) -> bool {
    stderr.contains("can't find session")
        || stderr.contains("no server running")
        || stderr.contains("error connecting to")
}

/// Build the argument list for `tmux new-session`.
fn new_session_args(name: &str, spec: &LaunchSpec) -> Vec<String> {
    let mut args = vec![
        "new-session".to_string(),
        "-d".to_string(),
        "-s".to_string(),
        name.to_string(),
        "-c".to_string(),
        spec.workdir.display().to_string(),
    ];
    for (key, value) in &spec.env {
        args.push("-e".to_string());
        args.push(format!("{key}={value}"));
    }
    args
}

#[async_trait]
impl SessionHost for Tmux {
    async fn has_session(&self, name: &str) -> Result<bool> {
        let args = ["has-session".to_string(), "-t".to_string(), exact_target(name)];
        let out = Self::output(&args).await?;
        if out.status.success() {
            return Ok(true);
        }

        let stderr = String::from_utf8_lossy(&out.stderr);
        if is_missing_session(&stderr) {
            Ok(false)
        } else {
            Err(Error::Session(format!(
                "tmux has-session {name} failed: {}",
                stderr.trim()
            )))
        }
    }

    async fn start_session(&self, name: &str, spec: &LaunchSpec) -> Result<()> {
        tokio::fs::create_dir_all(&spec.workdir).await?;

        Self::run(&new_session_args(name, spec)).await?;

        if spec.command.is_empty() {
            return Ok(());
        }

        let send = [
            "send-keys".to_string(),
            "-t".to_string(),
            name.to_string(),
            spec.command.clone(),
            "Enter".to_string(),
        ];
        if let Err(e) = Self::run(&send).await {
            // Don't leave a session without its agent behind
            let kill = ["kill-session".to_string(), "-t".to_string(), exact_target(name)];
            if let Err(kill_err) = Self::run(&kill).await {
                warn!(session = name, error = %kill_err, "failed to clean up session");
            }
            return Err(e);
        }

        Ok(())
    }
}

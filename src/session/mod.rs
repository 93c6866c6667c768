//! Session host access
//!
//! Agents run in named, detachable terminal sessions. The host enforces
//! session-name uniqueness; this crate only asks whether a session exists and
//! creates new ones.

mod tmux;

pub use tmux::Tmux;

use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// How to launch the process inside a new session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    /// Working directory of the session
    pub workdir: PathBuf,
    /// Command typed into the session once created (empty for a bare shell)
    pub command: String,
    /// Environment variables set in the session
    pub env: Vec<(String, String)>,
}

/// Session host operations
#[async_trait]
pub trait SessionHost: Send + Sync {
    /// Whether a session with this name is running
    async fn has_session(&self, name: &str) -> Result<bool>;

    /// Create a detached session and launch `spec` in it
    async fn start_session(&self, name: &str, spec: &LaunchSpec) -> Result<()>;
}

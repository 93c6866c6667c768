//! Shared command context for CLI commands

use gastown::beads::{BeadsCli, IssueStore};
use gastown::config::{TownConfig, load_config};
use gastown::error::{Error, Result};
use gastown::session::{SessionHost, Tmux};
use gastown::vcs::{GitCli, Vcs};
use gastown::workspace::{current_rig, find_town_root};
use std::path::{Path, PathBuf};

/// Shared context for CLI commands
///
/// Locates the town, loads its configuration and wires up the adapters.
/// Adapters are only constructed here; nothing runs until a command uses
/// them.
pub struct CommandContext {
    /// Root of the town
    pub town_root: PathBuf,
    /// Directory the command runs in (canonical)
    pub cwd: PathBuf,
    /// Town configuration
    pub config: TownConfig,
    /// Issue store (bd)
    pub store: Box<dyn IssueStore>,
    /// Version control (git)
    pub vcs: Box<dyn Vcs>,
    /// Session host (tmux)
    pub sessions: Box<dyn SessionHost>,
}

impl CommandContext {
    /// Create a new command context for `path`
    pub fn new(path: &Path) -> Result<Self> {
        let town_root = find_town_root(path)?;
        let cwd = path
            .canonicalize()
            .map_err(|_| Error::NotInWorkspace(path.to_path_buf()))?;
        let config = load_config(&town_root)?;

        Ok(Self {
            store: Box::new(BeadsCli::new(&cwd)),
            vcs: Box::new(GitCli::new(&cwd)),
            sessions: Box::new(Tmux::new()),
            town_root,
            cwd,
            config,
        })
    }

    /// Rig the command runs in, if any
    pub fn rig(&self) -> Option<String> {
        current_rig(&self.town_root, &self.cwd)
    }
}

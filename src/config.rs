//! Town configuration
//!
//! Settings are layered: built-in defaults, then the user file in
//! `<config_dir>/gastown/config.toml`, then the town file in
//! `<town_root>/mayor/config.toml`. Each layer only overrides the keys it
//! sets.

use crate::error::{Error, Result};
use crate::types::{DEFAULT_PRIORITY, MAX_PRIORITY};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name for gastown settings within the user config dir.
const USER_CONFIG_DIR: &str = "gastown";

/// Filename for configuration, both per-user and per-town.
const CONFIG_FILE: &str = "config.toml";

/// Default command launched inside each agent session.
pub const DEFAULT_AGENT_COMMAND: &str = "claude --dangerously-skip-permissions";

/// Merge-queue submission settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeQueueConfig {
    /// Trunk branch merge requests target by default
    pub trunk: String,
    /// Priority used when the source issue cannot be read
    pub default_priority: u8,
    /// Remote checked for integration branches
    pub remote: String,
    /// Prefix of integration branches (`<prefix><epic id>`)
    pub integration_prefix: String,
}

impl Default for MergeQueueConfig {
    fn default() -> Self {
        Self {
            trunk: "main".to_string(),
            default_priority: DEFAULT_PRIORITY,
            remote: "origin".to_string(),
            integration_prefix: "integration/".to_string(),
        }
    }
}

/// Fleet bring-up settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    /// Command typed into each new agent session
    pub agent_command: String,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            agent_command: DEFAULT_AGENT_COMMAND.to_string(),
        }
    }
}

/// Resolved town configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TownConfig {
    /// Merge-queue settings
    pub merge_queue: MergeQueueConfig,
    /// Fleet settings
    pub fleet: FleetConfig,
}

/// One configuration file as written on disk; every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    #[serde(default)]
    merge_queue: MergeQueueLayer,
    #[serde(default)]
    fleet: FleetLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MergeQueueLayer {
    trunk: Option<String>,
    default_priority: Option<u8>,
    remote: Option<String>,
    integration_prefix: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FleetLayer {
    agent_command: Option<String>,
}

impl TownConfig {
    fn apply(&mut self, layer: ConfigLayer) {
        let mq = layer.merge_queue;
        if let Some(trunk) = mq.trunk {
            self.merge_queue.trunk = trunk;
        }
        if let Some(priority) = mq.default_priority {
            self.merge_queue.default_priority = priority;
        }
        if let Some(remote) = mq.remote {
            self.merge_queue.remote = remote;
        }
        if let Some(prefix) = mq.integration_prefix {
            self.merge_queue.integration_prefix = prefix;
        }
        if let Some(command) = layer.fleet.agent_command {
            self.fleet.agent_command = command;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.merge_queue.default_priority > MAX_PRIORITY {
            return Err(Error::Config(format!(
                "merge_queue.default_priority must be 0-{MAX_PRIORITY}, got {}",
                self.merge_queue.default_priority
            )));
        }
        if self.merge_queue.trunk.trim().is_empty() {
            return Err(Error::Config("merge_queue.trunk must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Get path to the town configuration file.
pub fn town_config_path(town_root: &Path) -> PathBuf {
    town_root.join("mayor").join(CONFIG_FILE)
}

/// Get path to the per-user configuration file, if the platform has one.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration for a town.
///
/// Missing files are skipped; unreadable or malformed files are errors.
pub fn load_config(town_root: &Path) -> Result<TownConfig> {
    let user = user_config_path();
    let town = town_config_path(town_root);
    load_config_from(user.as_deref().into_iter().chain(std::iter::once(town.as_path())))
}

/// Load configuration from explicit files, lowest precedence first.
pub fn load_config_from<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Result<TownConfig> {
    let mut config = TownConfig::default();

    for path in paths {
        if let Some(layer) = read_layer(path)? {
            tracing::debug!(path = %path.display(), "applying config layer");
            config.apply(layer);
        }
    }

    config.validate()?;
    Ok(config)
}

fn read_layer(path: &Path) -> Result<Option<ConfigLayer>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let layer: ConfigLayer = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    Ok(Some(layer))
}

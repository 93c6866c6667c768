//! Fleet planning - the ordered list of sessions to bring up

use crate::config::FleetConfig;
use crate::session::LaunchSpec;
use crate::workspace::{DEACON_DIR, MAYOR_DIR};
use std::path::Path;

/// tmux session name of the Mayor
pub const MAYOR_SESSION: &str = "gt-mayor";

/// tmux session name of the Deacon
pub const DEACON_SESSION: &str = "gt-deacon";

/// Supervisory agent roles started by `gt start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Global coordinator that dispatches work
    Mayor,
    /// Health monitor watching the Mayor and Witnesses
    Deacon,
}

impl Role {
    /// Value of `GT_ROLE` inside the session
    #[must_use]
    pub const fn env_name(self) -> &'static str {
        match self {
            Self::Mayor => "mayor",
            Self::Deacon => "deacon",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mayor => write!(f, "Mayor"),
            Self::Deacon => write!(f, "Deacon"),
        }
    }
}

/// One step of the bring-up sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetMember {
    /// Agent role
    pub role: Role,
    /// Session name
    pub session: String,
    /// How to launch the agent
    pub launch: LaunchSpec,
    /// Role that must be running before this one is started
    pub requires: Option<Role>,
}

/// Build the bring-up sequence for a town.
///
/// The Mayor comes first: the Deacon's health check expects to observe a
/// running Mayor as soon as it starts.
pub fn fleet_plan(town_root: &Path, config: &FleetConfig) -> Vec<FleetMember> {
    let member = |role: Role, session: &str, dir: &str, requires: Option<Role>| FleetMember {
        role,
        session: session.to_string(),
        launch: LaunchSpec {
            workdir: town_root.join(dir),
            command: config.agent_command.clone(),
            env: vec![
                ("GT_ROLE".to_string(), role.env_name().to_string()),
                ("GT_TOWN_ROOT".to_string(), town_root.display().to_string()),
            ],
        },
        requires,
    };

    vec![
        member(Role::Mayor, MAYOR_SESSION, MAYOR_DIR, None),
        member(Role::Deacon, DEACON_SESSION, DEACON_DIR, Some(Role::Mayor)),
    ]
}

//! Town root discovery and rig detection
//!
//! A town root is marked by `mayor/town.json`. A bare `mayor/` directory is
//! accepted as a weaker marker so freshly created towns are still found.

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Directory holding the Mayor's state; its presence marks a town root.
pub const MAYOR_DIR: &str = "mayor";

/// Directory the Deacon runs in.
pub const DEACON_DIR: &str = "deacon";

/// Primary marker file, relative to the town root.
const TOWN_MARKER: &str = "town.json";

/// Find the town root containing `start`.
///
/// Walks upward from `start`. The nearest directory with `mayor/town.json`
/// wins; if none has it, the nearest directory with a `mayor/` directory is
/// used.
pub fn find_town_root(start: &Path) -> Result<PathBuf> {
    let start = start
        .canonicalize()
        .map_err(|_| Error::NotInWorkspace(start.to_path_buf()))?;

    let mut secondary = None;
    for dir in start.ancestors() {
        let mayor = dir.join(MAYOR_DIR);
        if mayor.join(TOWN_MARKER).is_file() {
            return Ok(dir.to_path_buf());
        }
        if secondary.is_none() && mayor.is_dir() {
            secondary = Some(dir.to_path_buf());
        }
    }

    secondary.ok_or(Error::NotInWorkspace(start))
}

/// Name of the rig `cwd` is inside, if any.
///
/// The rig is the first directory below the town root. Town-level agent
/// directories and hidden directories are not rigs.
pub fn current_rig(town_root: &Path, cwd: &Path) -> Option<String> {
    let relative = cwd.strip_prefix(town_root).ok()?;

    match relative.components().next()? {
        Component::Normal(name) => {
            let name = name.to_str()?;
            if name == MAYOR_DIR || name == DEACON_DIR || name.starts_with('.') {
                None
            } else {
                Some(name.to_string())
            }
        }
        _ => None,
    }
}

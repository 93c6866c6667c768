//! Branch name conventions
//!
//! Polecats name their branches after the issue they work on, optionally
//! with their own name. Recognized layouts, first match wins:
//!
//! | Layout                          | Issue    | Worker  |
//! |---------------------------------|----------|---------|
//! | `polecat/<worker>/<issue>`      | yes      | yes     |
//! | `<category>/<issue>[-<text>]`   | yes      | no      |
//! | `<issue>-<worker>`              | yes      | yes     |
//! | `<issue>`                       | yes      | no      |
//!
//! An issue token is a 2-5 letter lowercase prefix, a dash, and a lowercase
//! alphanumeric id with optional `.N` child suffixes (`gt-abc`, `gt-abc.2`).
//! Anything else is a manual branch and yields empty fields.

use regex::Regex;
use std::sync::LazyLock;

/// Issue token at the start of a name, followed by an optional `-<rest>`.
static ISSUE_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<issue>[a-z]{2,5}-[a-z0-9]+(?:\.[0-9]+)*)(?:-(?P<rest>.+))?$")
        .expect("issue token regex is valid")
});

/// A worker name: one token, no separators.
static WORKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("worker regex is valid"));

const POLECAT_PREFIX: &str = "polecat/";

/// Issue and worker recovered from a branch name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchInfo {
    /// Source issue ID, if the branch encodes one
    pub issue: Option<String>,
    /// Worker (polecat) name, if the branch encodes one
    pub worker: Option<String>,
}

impl BranchInfo {
    /// Whether nothing could be recovered
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.issue.is_none() && self.worker.is_none()
    }
}

/// Parse a branch name into its issue and worker parts.
///
/// Never fails: manual branches give an empty [`BranchInfo`].
pub fn parse_branch_name(branch: &str) -> BranchInfo {
    if let Some(rest) = branch.strip_prefix(POLECAT_PREFIX) {
        if let Some((worker, issue)) = rest.split_once('/') {
            if !worker.is_empty() && !issue.is_empty() {
                return BranchInfo {
                    issue: Some(issue.to_string()),
                    worker: Some(worker.to_string()),
                };
            }
        }
        return BranchInfo::default();
    }

    // Category prefix (bug/, feature/, ...): trailing text is a description
    if let Some((_, leaf)) = branch.rsplit_once('/') {
        return BranchInfo {
            issue: ISSUE_HEAD
                .captures(leaf)
                .map(|caps| caps["issue"].to_string()),
            worker: None,
        };
    }

    let Some(caps) = ISSUE_HEAD.captures(branch) else {
        return BranchInfo::default();
    };

    let worker = caps
        .name("rest")
        .map(|m| m.as_str())
        .filter(|rest| WORKER.is_match(rest))
        .map(str::to_string);

    BranchInfo {
        issue: Some(caps["issue"].to_string()),
        worker,
    }
}

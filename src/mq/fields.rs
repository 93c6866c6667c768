//! Merge-request fields stored in an issue description
//!
//! The issue store treats descriptions as opaque text, so the fields are
//! written as one `Key: value` line each. All five keys are always written,
//! empty values included, so decoding gives back exactly what was encoded.
//! The Refinery reads the same format when processing the queue. Values
//! must not contain line breaks; [`MergeRequestFields::validate`] enforces
//! that before anything is written.

use crate::error::{Error, Result};

/// Fields describing one merge request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeRequestFields {
    /// Branch being merged
    pub branch: String,
    /// Branch to merge into
    pub target: String,
    /// Issue the work was done for
    pub source_issue: String,
    /// Worker that did the work (may be empty)
    pub worker: String,
    /// Rig the work belongs to (may be empty)
    pub rig: String,
}

impl MergeRequestFields {
    /// Reject values that would not survive encoding.
    ///
    /// A `\n` would start a new field line and a trailing `\r` is dropped
    /// on decode, so both are refused.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("branch", &self.branch),
            ("target", &self.target),
            ("source issue", &self.source_issue),
            ("worker", &self.worker),
            ("rig", &self.rig),
        ] {
            check_single_line(field, value)?;
        }
        Ok(())
    }
}

/// Fail with [`Error::InvalidField`] if `value` contains `\r` or `\n`.
pub(crate) fn check_single_line(field: &'static str, value: &str) -> Result<()> {
    if value.contains(['\r', '\n']) {
        return Err(Error::InvalidField {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

const KEY_BRANCH: &str = "Branch";
const KEY_TARGET: &str = "Target";
const KEY_SOURCE_ISSUE: &str = "SourceIssue";
const KEY_WORKER: &str = "Worker";
const KEY_RIG: &str = "Rig";

/// Encode fields as description text.
///
/// Decoding the result gives back `fields` exactly, provided
/// [`MergeRequestFields::validate`] accepts them.
pub fn format_mr_fields(fields: &MergeRequestFields) -> String {
    [
        (KEY_BRANCH, &fields.branch),
        (KEY_TARGET, &fields.target),
        (KEY_SOURCE_ISSUE, &fields.source_issue),
        (KEY_WORKER, &fields.worker),
        (KEY_RIG, &fields.rig),
    ]
    .iter()
    .map(|(key, value)| {
        if value.is_empty() {
            format!("{key}:")
        } else {
            format!("{key}: {value}")
        }
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/// Decode fields from description text.
///
/// Keys are matched case-insensitively and may be spelled with `_` or `-`
/// (`source_issue`, `source-issue`). Lines that are not fields are ignored,
/// so the fields can sit alongside free text. Returns `None` when no field
/// line is present.
pub fn parse_mr_fields(description: &str) -> Option<MergeRequestFields> {
    let mut fields = MergeRequestFields::default();
    let mut found = false;

    for line in description.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.strip_prefix(' ').unwrap_or(value).to_string();

        let slot = match normalize_key(key).as_str() {
            "branch" => &mut fields.branch,
            "target" => &mut fields.target,
            "sourceissue" => &mut fields.source_issue,
            "worker" => &mut fields.worker,
            "rig" => &mut fields.rig,
            _ => continue,
        };
        *slot = value;
        found = true;
    }

    found.then_some(fields)
}

fn normalize_key(key: &str) -> String {
    key.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

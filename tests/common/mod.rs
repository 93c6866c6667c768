//! Shared test fixtures

mod mock_sessions;
mod mock_store;
mod mock_vcs;

pub use mock_sessions::{MockSessionHost, SessionCall};
pub use mock_store::MockIssueStore;
pub use mock_vcs::MockVcs;

use gastown::config::MergeQueueConfig;
use gastown::types::{Issue, IssueType};

/// Default merge-queue settings (trunk `main`, default priority 2)
pub fn mq_config() -> MergeQueueConfig {
    MergeQueueConfig::default()
}

/// Build a plain task issue
pub fn make_issue(id: &str, priority: u8) -> Issue {
    Issue {
        id: id.to_string(),
        title: format!("Work for {id}"),
        issue_type: IssueType::Task,
        priority,
        description: String::new(),
        parent: None,
        created_at: None,
    }
}

/// Build a task issue that belongs to `parent`
pub fn make_child_issue(id: &str, priority: u8, parent: &str) -> Issue {
    Issue {
        parent: Some(parent.to_string()),
        ..make_issue(id, priority)
    }
}

/// Build an epic issue
pub fn make_epic(id: &str) -> Issue {
    Issue {
        issue_type: IssueType::Epic,
        ..make_issue(id, 1)
    }
}

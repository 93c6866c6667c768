//! Mock issue store for testing

#![allow(dead_code)]

use async_trait::async_trait;
use gastown::beads::IssueStore;
use gastown::error::{Error, Result};
use gastown::types::{CreateOptions, Issue};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory issue store
///
/// Features:
/// - Auto-incrementing merge-request IDs (`gt-mr1`, `gt-mr2`, ...)
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockIssueStore {
    next_id: AtomicU64,
    issues: Mutex<HashMap<String, Issue>>,
    // Call tracking
    show_calls: Mutex<Vec<String>>,
    create_calls: Mutex<Vec<CreateOptions>>,
    // Error injection
    error_on_show: Mutex<Option<String>>,
    error_on_create: Mutex<Option<String>>,
}

impl MockIssueStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            issues: Mutex::new(HashMap::new()),
            show_calls: Mutex::new(Vec::new()),
            create_calls: Mutex::new(Vec::new()),
            error_on_show: Mutex::new(None),
            error_on_create: Mutex::new(None),
        }
    }

    /// Create a store holding `issues`
    pub fn with_issues(issues: Vec<Issue>) -> Self {
        let store = Self::new();
        for issue in issues {
            store.insert(issue);
        }
        store
    }

    /// Add or replace an issue
    pub fn insert(&self, issue: Issue) {
        self.issues.lock().unwrap().insert(issue.id.clone(), issue);
    }

    // === Error injection methods ===

    /// Make every `show` return an error
    pub fn fail_show(&self, msg: &str) {
        *self.error_on_show.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create` return an error
    pub fn fail_create(&self, msg: &str) {
        *self.error_on_create.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// All IDs `show` was called with
    pub fn get_show_calls(&self) -> Vec<String> {
        self.show_calls.lock().unwrap().clone()
    }

    /// All `create` calls
    pub fn get_create_calls(&self) -> Vec<CreateOptions> {
        self.create_calls.lock().unwrap().clone()
    }

    /// Number of `create` calls
    pub fn create_call_count(&self) -> usize {
        self.create_calls.lock().unwrap().len()
    }

    /// The single `create` call; panics if there were zero or several
    pub fn single_create_call(&self) -> CreateOptions {
        let calls = self.get_create_calls();
        assert_eq!(calls.len(), 1, "Expected exactly one create call, got: {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl IssueStore for MockIssueStore {
    async fn show(&self, id: &str) -> Result<Issue> {
        self.show_calls.lock().unwrap().push(id.to_string());

        // Check for injected error
        if let Some(msg) = self.error_on_show.lock().unwrap().as_ref() {
            return Err(Error::IssueStore(msg.clone()));
        }

        self.issues
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))
    }

    async fn create(&self, opts: &CreateOptions) -> Result<Issue> {
        self.create_calls.lock().unwrap().push(opts.clone());

        // Check for injected error
        if let Some(msg) = self.error_on_create.lock().unwrap().as_ref() {
            return Err(Error::IssueStore(msg.clone()));
        }

        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let issue = Issue {
            id: format!("gt-mr{n}"),
            title: opts.title.clone(),
            issue_type: opts.issue_type.clone(),
            priority: opts.priority,
            description: opts.description.clone(),
            parent: None,
            created_at: None,
        };
        self.insert(issue.clone());
        Ok(issue)
    }
}

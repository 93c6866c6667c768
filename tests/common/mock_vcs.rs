//! Mock VCS for testing

#![allow(dead_code)]

use async_trait::async_trait;
use gastown::error::{Error, Result};
use gastown::vcs::Vcs;
use std::collections::HashSet;
use std::sync::Mutex;

/// In-memory VCS with configurable branches
pub struct MockVcs {
    current: Mutex<String>,
    local_branches: Mutex<HashSet<String>>,
    remote_branches: Mutex<HashSet<(String, String)>>,
    // Call tracking
    branch_exists_calls: Mutex<Vec<String>>,
    remote_calls: Mutex<Vec<(String, String)>>,
    // Error injection
    error_on_branch_exists: Mutex<Option<String>>,
    error_on_remote: Mutex<Option<String>>,
}

impl MockVcs {
    /// Create a VCS checked out on `branch`
    pub fn on_branch(branch: &str) -> Self {
        Self {
            current: Mutex::new(branch.to_string()),
            local_branches: Mutex::new(HashSet::new()),
            remote_branches: Mutex::new(HashSet::new()),
            branch_exists_calls: Mutex::new(Vec::new()),
            remote_calls: Mutex::new(Vec::new()),
            error_on_branch_exists: Mutex::new(None),
            error_on_remote: Mutex::new(None),
        }
    }

    /// Add a local branch
    pub fn add_local_branch(&self, branch: &str) {
        self.local_branches
            .lock()
            .unwrap()
            .insert(branch.to_string());
    }

    /// Add a branch on `remote`
    pub fn add_remote_branch(&self, remote: &str, branch: &str) {
        self.remote_branches
            .lock()
            .unwrap()
            .insert((remote.to_string(), branch.to_string()));
    }

    /// Make `branch_exists` return an error
    pub fn fail_branch_exists(&self, msg: &str) {
        *self.error_on_branch_exists.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `remote_branch_exists` return an error
    pub fn fail_remote(&self, msg: &str) {
        *self.error_on_remote.lock().unwrap() = Some(msg.to_string());
    }

    /// All branches `branch_exists` was called with
    pub fn get_branch_exists_calls(&self) -> Vec<String> {
        self.branch_exists_calls.lock().unwrap().clone()
    }

    /// All `(remote, branch)` pairs `remote_branch_exists` was called with
    pub fn get_remote_calls(&self) -> Vec<(String, String)> {
        self.remote_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Vcs for MockVcs {
    async fn current_branch(&self) -> Result<String> {
        Ok(self.current.lock().unwrap().clone())
    }

    async fn branch_exists(&self, branch: &str) -> Result<bool> {
        self.branch_exists_calls
            .lock()
            .unwrap()
            .push(branch.to_string());

        if let Some(msg) = self.error_on_branch_exists.lock().unwrap().as_ref() {
            return Err(Error::Git(msg.clone()));
        }

        Ok(self.local_branches.lock().unwrap().contains(branch))
    }

    async fn remote_branch_exists(&self, remote: &str, branch: &str) -> Result<bool> {
        let key = (remote.to_string(), branch.to_string());
        self.remote_calls.lock().unwrap().push(key.clone());

        if let Some(msg) = self.error_on_remote.lock().unwrap().as_ref() {
            return Err(Error::Git(msg.clone()));
        }

        Ok(self.remote_branches.lock().unwrap().contains(&key))
    }
}

//! Mock session host for testing

#![allow(dead_code)]

use async_trait::async_trait;
use gastown::error::{Error, Result};
use gastown::session::{LaunchSpec, SessionHost};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// One call made against the session host, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCall {
    /// `has_session(name)`
    HasSession(String),
    /// `start_session(name, ..)`
    StartSession(String),
}

/// In-memory session host
///
/// Started sessions become running, so a second bring-up sees them. All
/// calls go into one ordered log for sequencing assertions.
pub struct MockSessionHost {
    running: Mutex<HashSet<String>>,
    calls: Mutex<Vec<SessionCall>>,
    launches: Mutex<HashMap<String, LaunchSpec>>,
    // Error injection, per session name
    error_on_query: Mutex<HashMap<String, String>>,
    error_on_start: Mutex<HashMap<String, String>>,
}

impl MockSessionHost {
    /// Create a host with no sessions
    pub fn new() -> Self {
        Self {
            running: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
            launches: Mutex::new(HashMap::new()),
            error_on_query: Mutex::new(HashMap::new()),
            error_on_start: Mutex::new(HashMap::new()),
        }
    }

    /// Mark a session as already running
    pub fn set_running(&self, name: &str) {
        self.running.lock().unwrap().insert(name.to_string());
    }

    /// Make `has_session(name)` return an error
    pub fn fail_query(&self, name: &str, msg: &str) {
        self.error_on_query
            .lock()
            .unwrap()
            .insert(name.to_string(), msg.to_string());
    }

    /// Make `start_session(name, ..)` return an error
    pub fn fail_start(&self, name: &str, msg: &str) {
        self.error_on_start
            .lock()
            .unwrap()
            .insert(name.to_string(), msg.to_string());
    }

    /// Ordered log of all calls
    pub fn get_calls(&self) -> Vec<SessionCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Names passed to `start_session`, in order
    pub fn get_start_calls(&self) -> Vec<String> {
        self.get_calls()
            .into_iter()
            .filter_map(|c| match c {
                SessionCall::StartSession(name) => Some(name),
                SessionCall::HasSession(_) => None,
            })
            .collect()
    }

    /// Launch spec a session was started with
    pub fn launch_for(&self, name: &str) -> Option<LaunchSpec> {
        self.launches.lock().unwrap().get(name).cloned()
    }

    /// Whether a session is running
    pub fn is_running(&self, name: &str) -> bool {
        self.running.lock().unwrap().contains(name)
    }

    /// Clear the call log
    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl SessionHost for MockSessionHost {
    async fn has_session(&self, name: &str) -> Result<bool> {
        self.calls
            .lock()
            .unwrap()
            .push(SessionCall::HasSession(name.to_string()));

        if let Some(msg) = self.error_on_query.lock().unwrap().get(name) {
            return Err(Error::Session(msg.clone()));
        }

        Ok(self.is_running(name))
    }

    async fn start_session(&self, name: &str, spec: &LaunchSpec) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(SessionCall::StartSession(name.to_string()));

        if let Some(msg) = self.error_on_start.lock().unwrap().get(name) {
            return Err(Error::Session(msg.clone()));
        }

        self.launches
            .lock()
            .unwrap()
            .insert(name.to_string(), spec.clone());
        self.set_running(name);
        Ok(())
    }
}

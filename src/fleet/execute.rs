//! Fleet execution - effectful operations
//!
//! Walks the planned sessions strictly in order. Each session is queried
//! before any start attempt, so running sessions are never started twice.
//! The first failed start aborts the sequence.

use crate::error::{Error, Result};
use crate::fleet::plan::{FleetMember, Role};
use crate::session::SessionHost;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Progress of one session during bring-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The running-check failed; the session is treated as absent
    QueryFailed(String),
    /// Session is already up; nothing to do
    AlreadyRunning,
    /// Session is absent and would be started (dry run)
    WouldStart,
    /// Start attempt begins
    Starting,
    /// Session was started
    Started,
}

/// Callback for bring-up progress
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called for every state change of a session
    async fn on_session_event(&self, member: &FleetMember, event: &SessionEvent);
}

/// Progress callback that ignores all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

#[async_trait]
impl ProgressCallback for NoProgress {
    async fn on_session_event(&self, _member: &FleetMember, _event: &SessionEvent) {}
}

/// Final state of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Was running before `start_fleet` was called
    AlreadyRunning,
    /// Started by this call
    Started,
    /// Absent; would have been started without `dry_run`
    WouldStart,
}

/// Outcome for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Agent role
    pub role: Role,
    /// Session name
    pub session: String,
    /// Final state
    pub status: SessionStatus,
}

/// Outcome of a bring-up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupReport {
    /// Sessions in the order they were processed
    pub sessions: Vec<SessionReport>,
}

impl StartupReport {
    /// Final state of a role, if it was processed
    #[must_use]
    pub fn status_of(&self, role: Role) -> Option<SessionStatus> {
        self.sessions
            .iter()
            .find(|s| s.role == role)
            .map(|s| s.status)
    }

    /// Number of sessions started by this call
    #[must_use]
    pub fn started_count(&self) -> usize {
        self.sessions
            .iter()
            .filter(|s| s.status == SessionStatus::Started)
            .count()
    }

    /// Whether every processed session is now running
    #[must_use]
    pub fn all_running(&self) -> bool {
        self.sessions
            .iter()
            .all(|s| matches!(s.status, SessionStatus::AlreadyRunning | SessionStatus::Started))
    }
}

fn startup_error(member: &FleetMember, cause: Error) -> Error {
    Error::Startup {
        session: format!("{} ({})", member.role, member.session),
        cause: Box::new(cause),
    }
}

/// Bring up the fleet (EFFECTFUL)
///
/// Processes `members` in order. For each one the session host is asked
/// whether it is running; a failed query counts as "not running" so a
/// transient host error does not block bring-up. Absent sessions are
/// started, unless `dry_run` is set. A member whose required role has not
/// been brought up earlier in the sequence is rejected.
///
/// # Errors
/// [`Error::Startup`] naming the session whose start failed. Later
/// sessions are not attempted.
pub async fn start_fleet(
    host: &dyn SessionHost,
    members: &[FleetMember],
    progress: &dyn ProgressCallback,
    dry_run: bool,
) -> Result<StartupReport> {
    let mut report = StartupReport::default();

    for member in members {
        if let Some(required) = member.requires {
            if report.status_of(required).is_none() {
                return Err(startup_error(
                    member,
                    Error::Internal(format!("{required} must be brought up before {}", member.role)),
                ));
            }
        }

        let running = match host.has_session(&member.session).await {
            Ok(running) => running,
            Err(e) => {
                warn!(session = %member.session, error = %e, "session query failed; assuming absent");
                progress
                    .on_session_event(member, &SessionEvent::QueryFailed(e.to_string()))
                    .await;
                false
            }
        };

        let status = if running {
            progress
                .on_session_event(member, &SessionEvent::AlreadyRunning)
                .await;
            SessionStatus::AlreadyRunning
        } else if dry_run {
            progress
                .on_session_event(member, &SessionEvent::WouldStart)
                .await;
            SessionStatus::WouldStart
        } else {
            progress.on_session_event(member, &SessionEvent::Starting).await;
            host.start_session(&member.session, &member.launch)
                .await
                .map_err(|e| startup_error(member, e))?;
            progress.on_session_event(member, &SessionEvent::Started).await;
            SessionStatus::Started
        };

        debug!(role = %member.role, session = %member.session, ?status, "session processed");
        report.sessions.push(SessionReport {
            role: member.role,
            session: member.session.clone(),
            status,
        });
    }

    Ok(report)
}

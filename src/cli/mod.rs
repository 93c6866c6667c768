//! CLI commands and terminal output

pub mod context;
pub mod done;
pub mod start;
pub mod style;

use anstream::println;
use async_trait::async_trait;
use gastown::fleet::{FleetMember, ProgressCallback, SessionEvent};
use indicatif::ProgressBar;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use style::{CIRCLE, Stylize, arrow, check, spinner_style};

/// Progress output for fleet bring-up
///
/// Prints one line per session and shows a spinner while a session starts.
#[derive(Default)]
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create progress output with no active spinner
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a spinner left behind by a failed start
    pub fn clear(&self) {
        let mut guard = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(spinner) = guard.take() {
            spinner.finish_and_clear();
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_session_event(&self, member: &FleetMember, event: &SessionEvent) {
        match event {
            SessionEvent::QueryFailed(reason) => {
                println!(
                    "  {} Could not check {}: {}",
                    "!".warn(),
                    member.role,
                    reason.muted()
                );
            }
            SessionEvent::AlreadyRunning => {
                println!("  {} {} already running", CIRCLE.muted(), member.role);
            }
            SessionEvent::WouldStart => {
                println!(
                    "  {} Would start {} ({})",
                    arrow(),
                    member.role,
                    member.session.accent()
                );
            }
            SessionEvent::Starting => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(spinner_style());
                spinner.set_message(format!("Starting {}...", member.role));
                spinner.enable_steady_tick(Duration::from_millis(80));
                *self.spinner.lock().unwrap_or_else(PoisonError::into_inner) = Some(spinner);
            }
            SessionEvent::Started => {
                let message = format!("{} {} started", check(), member.role);
                let spinner = self
                    .spinner
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .take();
                match spinner {
                    Some(spinner) => spinner.finish_with_message(message),
                    None => println!("  {message}"),
                }
            }
        }
    }
}

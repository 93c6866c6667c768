//! gastown - fleet bring-up and merge-queue submission for Gas Town
//!
//! Gas Town runs a small fleet of long-lived agents in terminal sessions.
//! This crate holds the two pieces of coordination logic the `gt` binary
//! drives:
//!
//! - [`fleet`]: idempotent, strictly ordered start of the supervisory
//!   sessions (Mayor, then Deacon)
//! - [`mq`]: turning the current git branch into a merge-request issue with
//!   the right target branch and priority
//!
//! Git, the `bd` issue tracker and tmux are reached through the narrow
//! traits in [`vcs`], [`beads`] and [`session`].

pub mod beads;
pub mod config;
pub mod error;
pub mod fleet;
pub mod mq;
pub mod session;
pub mod types;
pub mod vcs;
pub mod workspace;

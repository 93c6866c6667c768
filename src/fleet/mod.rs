//! Fleet bring-up
//!
//! Starts the supervisory sessions in a fixed order, skipping any that are
//! already running:
//! 1. Plan - `fleet_plan` builds the ordered list of sessions (pure)
//! 2. Execute - `start_fleet` checks and starts them one at a time
//!
//! Other agents (Witnesses, Refineries, Polecats) are started on demand by
//! the Mayor and are not part of this sequence.

mod execute;
mod plan;

pub use execute::{
    NoProgress, ProgressCallback, SessionEvent, SessionReport, SessionStatus, StartupReport,
    start_fleet,
};
pub use plan::{DEACON_SESSION, FleetMember, MAYOR_SESSION, Role, fleet_plan};

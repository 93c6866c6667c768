//! Merge-queue submission
//!
//! Turns the current branch into a merge-request issue, in three phases
//! like the rest of the crate:
//! 1. Gather - parse the branch, look up priority and integration target
//!    (effectful, failures fall back to defaults)
//! 2. Plan - build a `MergeRequestPlan` (pure, testable)
//! 3. Execute - create the merge-request issue (effectful)

mod branch;
mod fields;
mod plan;
mod submit;
mod target;

pub use branch::{BranchInfo, parse_branch_name};
pub use fields::{MergeRequestFields, format_mr_fields, parse_mr_fields};
pub use plan::{
    MergeRequestPlan, PlanInputs, ResolvedSource, create_merge_request_plan, resolve_source_issue,
};
pub use submit::{
    SubmitRequest, execute_merge_request, prepare_merge_request, resolve_priority,
    submit_merge_request,
};
pub use target::resolve_integration_target;

//! Shared DTOs (schemas-as-code) for the pomsort workspace.
//!
//! # Design constraints
//! - The plan and report types are intended to be serialized to disk.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod model;
pub mod plan;
pub mod report;

/// Schema identifiers.
pub mod schema {
    pub const POMSORT_PLAN_V1: &str = "pomsort.plan.v1";
    pub const POMSORT_REPORT_V1: &str = "pomsort.report.v1";
}

//! Domain logic: decide whether a dependency list is sorted and plan the
//! minimal set of span replacements that sorts it.
//!
//! This crate owns *what* should change and why. It does not own *how*
//! spans are spliced into a buffer; that's the `pomsort-edit` crate.

mod keys;
mod plan;
mod validate;

pub use keys::{SortKey, SortKeys};
pub use plan::plan_sort;
pub use validate::{find_first_violation, Violation};

/// Stable identifier of the one fix action this tool offers.
pub const FIX_ID: &str = "manifest.sort_dependencies";

/// Human-readable title of the fix action.
pub const FIX_TITLE: &str = "Sort dependencies by groupId and artifactId";

/// Check id attached to findings.
pub const CHECK_ID: &str = "manifest.sorted_dependencies";

//! Clap-free settings for the check and fix pipelines.

use pomsort_domain::SortKeys;

/// Settings for `run_check`.
#[derive(Debug, Clone, Default)]
pub struct CheckSettings {
    pub keys: SortKeys,
}

/// Settings for `run_fix`.
#[derive(Debug, Clone)]
pub struct FixSettings {
    /// Plan and preview only; never open a write transaction.
    pub dry_run: bool,

    /// Attach and enforce a sha256 precondition so a buffer that changed
    /// between plan and apply blocks the fix instead of splicing stale
    /// spans.
    pub require_clean_hashes: bool,

    pub keys: SortKeys,
}

impl Default for FixSettings {
    fn default() -> Self {
        Self {
            dry_run: true,
            require_clean_hashes: true,
            keys: SortKeys::default(),
        }
    }
}

use crate::model::Span;
use serde::{Deserialize, Serialize};

/// A planned splice: overwrite `span` (addressed against the document the
/// plan was computed from) with `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub span: Span,
    pub text: String,
}

/// A full sort plan for one manifest.
///
/// All replacement spans target the original document; they stay valid as
/// long as edits are applied in descending start order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortPlan {
    pub schema: String,

    /// Stable fix identifier (e.g. `manifest.sort_dependencies`).
    pub fix_id: String,

    /// Human-readable action title.
    pub title: String,

    #[serde(default)]
    pub replacements: Vec<Replacement>,

    /// Checksum of the buffer snapshot the plan was computed from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precondition: Option<BufferPrecondition>,

    pub summary: PlanSummary,
}

impl SortPlan {
    pub fn new(fix_id: &str, title: &str) -> Self {
        Self {
            schema: crate::schema::POMSORT_PLAN_V1.to_string(),
            fix_id: fix_id.to_string(),
            title: title.to_string(),
            replacements: vec![],
            precondition: None,
            summary: PlanSummary::default(),
        }
    }

    /// True when every entry already sits at its sorted position.
    pub fn is_noop(&self) -> bool {
        self.replacements.is_empty()
    }
}

/// Precondition tying a plan to the exact buffer contents it was computed
/// from. A mismatch at apply time means the document changed in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferPrecondition {
    pub sha256: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Dependency entries found in the container.
    pub entries_total: u64,

    /// Entries whose text actually moves.
    pub replacements_planned: u64,
}

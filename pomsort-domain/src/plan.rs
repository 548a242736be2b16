use crate::keys::SortKeys;
use crate::{FIX_ID, FIX_TITLE};
use pomsort_types::model::DependencyRecord;
use pomsort_types::plan::{Replacement, SortPlan};
use tracing::debug;

/// Plan the replacements that sort `records` in place.
///
/// Stable-sorts a copy, pairs `records[i]` with `sorted[i]`, and emits one
/// replacement per position whose verbatim text changes. Overwriting each
/// original span with the text of the record now assigned to that position
/// re-sorts the list by pure text substitution: nothing outside the entry
/// spans is touched, and each entry keeps its own internal formatting.
///
/// Every span addresses the original document, so the plan is valid in any
/// application order that does not shift unapplied spans; the applier uses
/// descending start order.
pub fn plan_sort(records: &[DependencyRecord], keys: &SortKeys) -> SortPlan {
    let mut sorted: Vec<&DependencyRecord> = records.iter().collect();
    // Stable sort: equal coordinates keep their document order.
    sorted.sort_by(|a, b| keys.compare(a, b));

    let mut plan = SortPlan::new(FIX_ID, FIX_TITLE);
    plan.summary.entries_total = records.len() as u64;

    for (original, target) in records.iter().zip(&sorted) {
        if original.text == target.text {
            continue;
        }
        plan.replacements.push(Replacement {
            span: original.span,
            text: target.text.clone(),
        });
    }
    plan.summary.replacements_planned = plan.replacements.len() as u64;

    debug!(
        entries = records.len(),
        replacements = plan.replacements.len(),
        "planned dependency sort"
    );
    plan
}

use crate::keys::SortKeys;
use pomsort_types::model::DependencyRecord;
use std::cmp::Ordering;

/// The first adjacent out-of-order pair in a dependency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Index of the entry that sorts before its predecessor.
    pub index: usize,

    /// Byte offset of that entry in the source document.
    pub offset: usize,

    /// Coordinates of the predecessor (`index - 1`).
    pub predecessor: (String, String),

    /// Coordinates of the offending entry.
    pub entry: (String, String),
}

/// Scan adjacent pairs for the first ordering violation.
///
/// Stops at the first hit: this is a detection check, not a full diff. One
/// diagnostic per document is enough because a single sort action fixes
/// every violation at once. Lists of length 0 or 1 are trivially sorted.
pub fn find_first_violation(records: &[DependencyRecord], keys: &SortKeys) -> Option<Violation> {
    for i in 1..records.len() {
        if keys.compare(&records[i - 1], &records[i]) == Ordering::Greater {
            let pred = &records[i - 1];
            let entry = &records[i];
            return Some(Violation {
                index: i,
                offset: entry.span.start,
                predecessor: (pred.group_id.clone(), pred.artifact_id.clone()),
                entry: (entry.group_id.clone(), entry.artifact_id.clone()),
            });
        }
    }
    None
}

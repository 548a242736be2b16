use pomsort_types::model::DependencyRecord;
use std::cmp::Ordering;

/// One comparison key over a dependency record.
///
/// Absent coordinates were parsed as `""`, which sorts before every
/// non-empty value under ordinal comparison. Classifier, type, and version
/// are deliberately not keys: entries equal on (groupId, artifactId) keep
/// their original relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    GroupId,
    ArtifactId,
}

impl SortKey {
    fn select<'a>(&self, record: &'a DependencyRecord) -> &'a str {
        match self {
            SortKey::GroupId => &record.group_id,
            SortKey::ArtifactId => &record.artifact_id,
        }
    }
}

/// A total, deterministic ordering over dependency records: the keys are
/// compared in sequence, ordinal and case-sensitive.
///
/// The default is groupId-then-artifactId; callers can inject any other
/// key sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKeys(Vec<SortKey>);

impl Default for SortKeys {
    fn default() -> Self {
        Self(vec![SortKey::GroupId, SortKey::ArtifactId])
    }
}

impl SortKeys {
    pub fn new(keys: Vec<SortKey>) -> Self {
        Self(keys)
    }

    pub fn compare(&self, a: &DependencyRecord, b: &DependencyRecord) -> Ordering {
        for key in &self.0 {
            let ord = key.select(a).cmp(key.select(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` into the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True if the two spans share at least one byte.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One declared dependency, tagged with its exact source location.
///
/// Identity is positional (the span). Records are never mutated after
/// parsing; a fix replaces records wholesale from a fresh parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// Declared `<groupId>`, or `""` when the element is absent.
    #[serde(default)]
    pub group_id: String,

    /// Declared `<artifactId>`, or `""` when the element is absent.
    #[serde(default)]
    pub artifact_id: String,

    /// Location of the full `<dependency>…</dependency>` element.
    pub span: Span,

    /// Verbatim source text for `span`, internal formatting included.
    pub text: String,
}

impl DependencyRecord {
    /// The (groupId, artifactId) pair the comparator operates on.
    pub fn coordinates(&self) -> (&str, &str) {
        (&self.group_id, &self.artifact_id)
    }
}

/// Document-ordered sequence of dependency records.
pub type DependencyList = Vec<DependencyRecord>;

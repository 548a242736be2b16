//! Error types for pomsort-edit.
//!
//! Two families, mapped to exit codes at the CLI boundary:
//! - Policy blocks (exit code 2): the buffer changed between plan and apply.
//! - Runtime errors (exit code 1): malformed or out-of-range spans.

use pomsort_types::model::Span;
use thiserror::Error;

/// The top-level error type for edit operations.
#[derive(Debug, Error)]
pub enum EditError {
    /// A precondition block occurred (exit code 2).
    #[error("policy block: {0}")]
    Block(#[from] PreconditionError),

    /// A span-level runtime error occurred (exit code 1).
    #[error("runtime error: {0}")]
    Runtime(#[from] ApplyError),
}

impl EditError {
    /// Returns true if this is a precondition block (exit code 2).
    pub fn is_block(&self) -> bool {
        matches!(self, EditError::Block(_))
    }

    /// Returns the recommended exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            EditError::Block(_) => 2,
            EditError::Runtime(_) => 1,
        }
    }
}

/// A replacement span cannot be applied to the current buffer.
///
/// Raised during pre-validation, before any mutation: a failing plan leaves
/// the buffer byte-identical to what it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplyError {
    #[error("span {start}..{end} lies outside the buffer (length {len})")]
    OutOfRange { start: usize, end: usize, len: usize },

    #[error("span {start}..{end} ends before it starts")]
    InvertedSpan { start: usize, end: usize },

    #[error("spans {first:?} and {second:?} overlap")]
    OverlappingSpans { first: Span, second: Span },

    #[error("span boundary at byte {offset} splits a character")]
    SplitsCharacter { offset: usize },
}

/// The buffer no longer matches the snapshot the plan was computed from.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("buffer changed since the plan was computed: expected sha256 {expected}, found {actual}")]
pub struct PreconditionError {
    pub expected: String,
    pub actual: String,
}

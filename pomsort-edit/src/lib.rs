//! Edit engine for pomsort plans.
//!
//! Responsibilities:
//! - Attach a buffer precondition (sha256) to a plan.
//! - Validate and apply span replacements to a text buffer.
//! - Generate a unified diff preview.
//!
//! The apply path is validate-then-apply: every span is bounds- and
//! overlap-checked against the current buffer before the first mutation, so
//! a failing plan never leaves a partial write. Application itself runs in
//! strictly descending start order; spans were computed once against the
//! original buffer, and edits at higher offsets never shift the spans still
//! waiting below them.

mod error;

pub use error::{ApplyError, EditError, PreconditionError};

use pomsort_types::plan::{BufferPrecondition, Replacement, SortPlan};
use sha2::{Digest, Sha256};
use tracing::debug;

/// Hex-encoded sha256 of a buffer snapshot.
pub fn checksum(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Tie `plan` to the exact snapshot it was computed from.
pub fn attach_precondition(plan: &mut SortPlan, snapshot: &str) {
    plan.precondition = Some(BufferPrecondition {
        sha256: checksum(snapshot),
    });
}

/// Check the plan's precondition against the buffer about to be edited.
///
/// A mismatch means the document changed between plan and apply; the plan's
/// spans are stale and must not be spliced. Plans without a precondition
/// pass vacuously.
pub fn verify_precondition(plan: &SortPlan, buffer: &str) -> Result<(), PreconditionError> {
    let Some(pre) = &plan.precondition else {
        return Ok(());
    };
    let actual = checksum(buffer);
    if actual == pre.sha256 {
        Ok(())
    } else {
        Err(PreconditionError {
            expected: pre.sha256.clone(),
            actual,
        })
    }
}

/// Validate every replacement span against the current buffer.
pub fn validate_replacements(buffer: &str, replacements: &[Replacement]) -> Result<(), ApplyError> {
    for r in replacements {
        let (start, end) = (r.span.start, r.span.end);
        if end < start {
            return Err(ApplyError::InvertedSpan { start, end });
        }
        if end > buffer.len() {
            return Err(ApplyError::OutOfRange {
                start,
                end,
                len: buffer.len(),
            });
        }
        for offset in [start, end] {
            if !buffer.is_char_boundary(offset) {
                return Err(ApplyError::SplitsCharacter { offset });
            }
        }
    }

    let mut spans: Vec<_> = replacements.iter().map(|r| r.span).collect();
    spans.sort_by_key(|s| (s.start, s.end));
    for pair in spans.windows(2) {
        if pair[0].end > pair[1].start {
            return Err(ApplyError::OverlappingSpans {
                first: pair[0],
                second: pair[1],
            });
        }
    }

    Ok(())
}

/// Apply a plan's replacements to `buffer` in place. All-or-nothing: the
/// buffer is untouched unless every span validates.
pub fn apply_replacements(
    buffer: &mut String,
    replacements: &[Replacement],
) -> Result<(), ApplyError> {
    validate_replacements(buffer, replacements)?;

    let mut ordered: Vec<&Replacement> = replacements.iter().collect();
    // Descending start order: edits above never shift the spans below.
    ordered.sort_by(|a, b| b.span.start.cmp(&a.span.start));

    for r in ordered {
        buffer.replace_range(r.span.start..r.span.end, &r.text);
    }

    debug!(replacements = replacements.len(), "applied span replacements");
    Ok(())
}

/// Apply to a copy, leaving the input alone. Used for dry-run previews.
pub fn apply_to_string(text: &str, replacements: &[Replacement]) -> Result<String, ApplyError> {
    let mut out = text.to_string();
    apply_replacements(&mut out, replacements)?;
    Ok(out)
}

/// Unified diff between the buffer before and after a fix.
pub fn preview_patch(before: &str, after: &str) -> String {
    let patch = diffy::create_patch(before, after);
    diffy::PatchFormatter::new().fmt_patch(&patch).to_string()
}

//! The check and fix pipelines, extracted from the CLI.
//!
//! `run_check` is a read-only diagnostic over a text snapshot. `run_fix`
//! is the quick-fix: plan from a snapshot, then splice inside the buffer's
//! write transaction with a staleness precondition in between.

use crate::ports::TextBuffer;
use crate::settings::{CheckSettings, FixSettings};
use pomsort_domain::{find_first_violation, plan_sort, CHECK_ID, FIX_ID, FIX_TITLE};
use pomsort_edit::{
    apply_replacements, apply_to_string, attach_precondition, preview_patch, verify_precondition,
    PreconditionError,
};
use pomsort_types::plan::SortPlan;
use pomsort_types::report::{Finding, SortReport, ToolInfo, Verdict, VerdictStatus};
use tracing::{debug, info};

/// Error type for pipeline results. Exit code 2 = precondition block,
/// 1 = tool error.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("policy block: {0}")]
    Block(#[from] PreconditionError),
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ToolError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ToolError::Block(_) => 2,
            ToolError::Internal(_) => 1,
        }
    }
}

/// Outcome of `run_check`.
#[derive(Debug)]
pub struct CheckOutcome {
    pub report: SortReport,
}

impl CheckOutcome {
    /// True when nothing requires attention (sorted, empty, or no
    /// container — callers treat those identically).
    pub fn is_clean(&self) -> bool {
        self.report.verdict.status != VerdictStatus::Fail
    }
}

/// Run the read-only ordering check over a document snapshot.
///
/// A document whose container cannot be parsed yields a `skip` verdict:
/// the inspection simply does not run, it never fails the host. At most
/// one finding is emitted; the validator short-circuits on the first
/// out-of-order pair.
pub fn run_check(text: &str, settings: &CheckSettings, tool: ToolInfo) -> CheckOutcome {
    let mut report = SortReport::new(tool);

    let records = match pomsort_model::parse(text) {
        Ok(records) => records,
        Err(e) => {
            debug!(error = %e, "manifest not parseable, skipping check");
            report.verdict = Verdict {
                status: VerdictStatus::Skip,
                reasons: vec![e.to_string()],
            };
            return CheckOutcome { report };
        }
    };

    match find_first_violation(&records, &settings.keys) {
        None => {
            report.verdict.status = VerdictStatus::Pass;
        }
        Some(v) => {
            report.verdict = Verdict {
                status: VerdictStatus::Fail,
                reasons: vec!["dependencies are not sorted".to_string()],
            };
            report.findings.push(Finding {
                check_id: CHECK_ID.to_string(),
                code: "UNSORTED_DEPENDENCIES".to_string(),
                message: format!(
                    "dependency '{}:{}' sorts before its predecessor '{}:{}'",
                    v.entry.0, v.entry.1, v.predecessor.0, v.predecessor.1
                ),
                index: v.index,
                offset: Some(v.offset),
                fix_id: Some(FIX_ID.to_string()),
            });
        }
    }

    CheckOutcome { report }
}

/// What `run_fix` did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixStatus {
    /// Replacements were spliced into the buffer.
    Applied,
    /// Dry run: the plan and patch were produced, the buffer untouched.
    Planned,
    /// The list was already sorted (or empty); nothing to do.
    AlreadySorted,
    /// The container could not be parsed; nothing to fix.
    Skipped,
}

/// Outcome of `run_fix`.
#[derive(Debug)]
pub struct FixOutcome {
    pub status: FixStatus,
    pub plan: SortPlan,
    /// Unified diff of the fix, present unless there was nothing to do.
    pub patch: Option<String>,
}

/// Run the sort fix against a buffer.
///
/// Pipeline: snapshot → parse → plan → (unless dry-run) verify the
/// precondition and apply inside the write transaction. The precondition
/// is re-checked against the text the transaction actually sees, so a
/// buffer that changed since the snapshot blocks with no partial write
/// and the caller re-invokes from a fresh parse.
pub fn run_fix(buffer: &mut dyn TextBuffer, settings: &FixSettings) -> Result<FixOutcome, ToolError> {
    let snapshot = buffer.snapshot()?;

    let records = match pomsort_model::parse(&snapshot) {
        Ok(records) => records,
        Err(e) => {
            debug!(error = %e, "manifest not parseable, nothing to fix");
            return Ok(FixOutcome {
                status: FixStatus::Skipped,
                plan: SortPlan::new(FIX_ID, FIX_TITLE),
                patch: None,
            });
        }
    };

    let mut plan = plan_sort(&records, &settings.keys);
    if plan.is_noop() {
        return Ok(FixOutcome {
            status: FixStatus::AlreadySorted,
            plan,
            patch: None,
        });
    }

    if settings.require_clean_hashes {
        attach_precondition(&mut plan, &snapshot);
    }

    let after = apply_to_string(&snapshot, &plan.replacements)
        .map_err(|e| ToolError::Internal(e.into()))?;
    let patch = preview_patch(&snapshot, &after);

    if settings.dry_run {
        return Ok(FixOutcome {
            status: FixStatus::Planned,
            plan,
            patch: Some(patch),
        });
    }

    let mut block: Option<PreconditionError> = None;
    let txn_result = buffer.with_write_txn(&mut |text| {
        if let Err(e) = verify_precondition(&plan, text) {
            block = Some(e.clone());
            anyhow::bail!("buffer changed since plan");
        }
        apply_replacements(text, &plan.replacements).map_err(anyhow::Error::from)
    });

    if let Some(e) = block {
        return Err(ToolError::Block(e));
    }
    txn_result?;

    info!(
        replacements = plan.summary.replacements_planned,
        "sorted dependency list"
    );
    Ok(FixOutcome {
        status: FixStatus::Applied,
        plan,
        patch: Some(patch),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::InMemoryBuffer;
    use pretty_assertions::assert_eq;

    const UNSORTED: &str = "<project>\n  <dependencies>\n    \
        <dependency>\n      <groupId>org.b</groupId>\n      <artifactId>y</artifactId>\n    </dependency>\n    \
        <dependency>\n      <groupId>org.a</groupId>\n      <artifactId>x</artifactId>\n    </dependency>\n  \
        </dependencies>\n</project>\n";

    fn tool() -> ToolInfo {
        ToolInfo {
            name: "pomsort".to_string(),
            version: None,
        }
    }

    fn fix_settings() -> FixSettings {
        FixSettings {
            dry_run: false,
            ..FixSettings::default()
        }
    }

    #[test]
    fn check_reports_one_finding_for_unsorted_input() {
        let outcome = run_check(UNSORTED, &CheckSettings::default(), tool());
        assert!(!outcome.is_clean());
        assert_eq!(outcome.report.findings.len(), 1);
        let finding = &outcome.report.findings[0];
        assert_eq!(finding.index, 1);
        assert_eq!(finding.fix_id.as_deref(), Some("manifest.sort_dependencies"));
        assert!(finding.message.contains("org.a:x"));
        assert!(finding.message.contains("org.b:y"));
    }

    #[test]
    fn check_passes_on_empty_document() {
        let outcome = run_check("<project/>", &CheckSettings::default(), tool());
        assert!(outcome.is_clean());
        assert_eq!(outcome.report.verdict.status, VerdictStatus::Pass);
        assert!(outcome.report.findings.is_empty());
    }

    #[test]
    fn check_skips_unparseable_document() {
        let outcome = run_check(
            "<project><dependencies>",
            &CheckSettings::default(),
            tool(),
        );
        assert!(outcome.is_clean());
        assert_eq!(outcome.report.verdict.status, VerdictStatus::Skip);
        assert!(!outcome.report.verdict.reasons.is_empty());
    }

    #[test]
    fn fix_sorts_the_buffer_and_check_then_passes() {
        let mut buffer = InMemoryBuffer::new(UNSORTED);
        let outcome = run_fix(&mut buffer, &fix_settings()).unwrap();
        assert_eq!(outcome.status, FixStatus::Applied);

        let after = run_check(buffer.text(), &CheckSettings::default(), tool());
        assert!(after.is_clean());

        // org.a now precedes org.b in the document.
        let a = buffer.text().find("org.a").unwrap();
        let b = buffer.text().find("org.b").unwrap();
        assert!(a < b);
    }

    #[test]
    fn fix_is_idempotent() {
        let mut buffer = InMemoryBuffer::new(UNSORTED);
        run_fix(&mut buffer, &fix_settings()).unwrap();
        let once = buffer.text().to_string();

        let outcome = run_fix(&mut buffer, &fix_settings()).unwrap();
        assert_eq!(outcome.status, FixStatus::AlreadySorted);
        assert_eq!(buffer.text(), once);
    }

    #[test]
    fn dry_run_produces_a_patch_without_mutating() {
        let mut buffer = InMemoryBuffer::new(UNSORTED);
        let outcome = run_fix(&mut buffer, &FixSettings::default()).unwrap();
        assert_eq!(outcome.status, FixStatus::Planned);
        assert!(outcome.patch.as_deref().unwrap().contains("org.a"));
        assert_eq!(buffer.text(), UNSORTED);
    }

    #[test]
    fn fix_skips_unparseable_document() {
        let mut buffer = InMemoryBuffer::new("<project><dependencies>");
        let outcome = run_fix(&mut buffer, &fix_settings()).unwrap();
        assert_eq!(outcome.status, FixStatus::Skipped);
        assert_eq!(buffer.text(), "<project><dependencies>");
    }

    /// Buffer whose transaction sees different text than the snapshot, as
    /// if the document changed between plan and apply.
    struct RacingBuffer {
        snapshot: String,
        current: String,
    }

    impl crate::ports::TextBuffer for RacingBuffer {
        fn snapshot(&self) -> anyhow::Result<String> {
            Ok(self.snapshot.clone())
        }

        fn with_write_txn(
            &mut self,
            txn: &mut dyn FnMut(&mut String) -> anyhow::Result<()>,
        ) -> anyhow::Result<()> {
            let mut staged = self.current.clone();
            txn(&mut staged)?;
            self.current = staged;
            Ok(())
        }
    }

    #[test]
    fn stale_buffer_blocks_without_partial_write() {
        let changed = UNSORTED.replace("org.b", "org.c");
        let mut buffer = RacingBuffer {
            snapshot: UNSORTED.to_string(),
            current: changed.clone(),
        };

        let err = run_fix(&mut buffer, &fix_settings()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(matches!(err, ToolError::Block(_)));
        assert_eq!(buffer.current, changed);
    }

    #[test]
    fn fix_preserves_bytes_outside_dependency_spans() {
        let decorated = format!("<!-- header -->\n{UNSORTED}<!-- trailer -->\n");
        let mut buffer = InMemoryBuffer::new(decorated.clone());
        run_fix(&mut buffer, &fix_settings()).unwrap();

        assert!(buffer.text().starts_with("<!-- header -->\n"));
        assert!(buffer.text().ends_with("<!-- trailer -->\n"));
        // The fix is a permutation of entry texts: same length, same bytes
        // as a multiset.
        assert_eq!(buffer.text().len(), decorated.len());
    }
}

//! Text rendering for check reports and fix outcomes.

use pomsort_core::{FixOutcome, FixStatus};
use pomsort_types::report::{SortReport, VerdictStatus};

pub fn render_report(report: &SortReport) -> String {
    let mut out = String::new();
    match report.verdict.status {
        VerdictStatus::Pass => out.push_str("ok: dependencies are sorted\n"),
        VerdictStatus::Skip => {
            out.push_str("skipped: manifest could not be checked\n");
            for reason in &report.verdict.reasons {
                out.push_str(&format!("  {}\n", reason));
            }
        }
        VerdictStatus::Fail => {
            for finding in &report.findings {
                out.push_str(&format!(
                    "unsorted: {} (entry {}",
                    finding.message, finding.index
                ));
                if let Some(offset) = finding.offset {
                    out.push_str(&format!(", byte {offset}"));
                }
                out.push_str(")\n");
                if let Some(fix) = &finding.fix_id {
                    out.push_str(&format!("  fix available: {fix} (run `pomsort fix`)\n"));
                }
            }
        }
    }
    out
}

pub fn render_fix(outcome: &FixOutcome, wrote: bool) -> String {
    let mut out = String::new();
    match outcome.status {
        FixStatus::AlreadySorted => out.push_str("ok: dependencies already sorted\n"),
        FixStatus::Skipped => out.push_str("skipped: manifest could not be parsed\n"),
        FixStatus::Planned | FixStatus::Applied => {
            if let Some(patch) = &outcome.patch {
                out.push_str(patch);
            }
            out.push_str(&format!(
                "{}: {} of {} entries moved\n",
                if wrote { "applied" } else { "dry-run" },
                outcome.plan.summary.replacements_planned,
                outcome.plan.summary.entries_total,
            ));
        }
    }
    out
}

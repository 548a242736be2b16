use serde::{Deserialize, Serialize};

/// Check report for one manifest. At most one finding is emitted per
/// document: a single sort action fixes every violation at once, so the
/// validator stops at the first out-of-order pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortReport {
    pub schema: String,
    pub tool: ToolInfo,
    pub verdict: Verdict,

    #[serde(default)]
    pub findings: Vec<Finding>,
}

impl SortReport {
    pub fn new(tool: ToolInfo) -> Self {
        Self {
            schema: crate::schema::POMSORT_REPORT_V1.to_string(),
            tool,
            verdict: Verdict::default(),
            findings: vec![],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Verdict {
    pub status: VerdictStatus,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    #[default]
    Pass,
    Fail,
    /// The document could not be checked (no parse), not a failure.
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub check_id: String,
    pub code: String,
    pub message: String,

    /// Index of the first entry that sorts before its predecessor.
    pub index: usize,

    /// Byte offset of the offending entry in the source document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,

    /// Fix action resolving this finding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_id: Option<String>,
}

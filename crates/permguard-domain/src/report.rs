use crate::model::{JobKind, RootAssessment};
use permguard_types::{Finding, RepoPath, Severity, Verdict};

#[derive(Clone, Debug, Default)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

/// Per-run summary counters surfaced in the printed report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditSummary {
    pub workflows_scanned: u32,
    pub jobs_with_permissions: u32,
    pub findings_total: u32,
}

/// What the verifier saw in one file, in discovery order.
///
/// Findings capture what is wrong; audits capture everything the report
/// narrates, compliant files and informational job notes included.
#[derive(Clone, Debug)]
pub struct FileAudit {
    pub path: RepoPath,
    pub status: FileStatus,
}

#[derive(Clone, Debug)]
pub enum FileStatus {
    /// The file could not be read or parsed.
    Unreadable { error: String },
    /// The file parsed; root assessment plus job-level notes.
    Inspected {
        root: RootAssessment,
        /// Root `permissions` rendered for display, when declared.
        permissions: Option<String>,
        jobs: Vec<JobNote>,
    },
}

/// A job that declares its own `permissions` block. Reported, never judged.
#[derive(Clone, Debug)]
pub struct JobNote {
    pub name: String,
    pub permissions: String,
    pub kind: JobKind,
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub audits: Vec<FileAudit>,
    pub data: AuditSummary,
    pub counts: SeverityCounts,
}

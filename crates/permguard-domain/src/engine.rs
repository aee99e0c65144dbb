use crate::checks;
use crate::model::{WorkflowContents, WorkflowSet};
use crate::report::{AuditSummary, DomainReport, FileAudit, FileStatus, JobNote, SeverityCounts};
use permguard_types::{Finding, Severity, Verdict};

/// Evaluate one workflow set: run all checks, order findings
/// deterministically, build the per-file audit trail, and compute the
/// verdict.
pub fn evaluate(set: &WorkflowSet) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();

    checks::run_all(set, &mut findings);

    // Deterministic ordering.
    findings.sort_by(|a, b| finding_key(a).cmp(&finding_key(b)));

    let audits = build_audits(set);
    let verdict = compute_verdict(&findings);
    let counts = SeverityCounts::from_findings(&findings);

    let data = AuditSummary {
        workflows_scanned: set.workflows.len() as u32,
        jobs_with_permissions: audits
            .iter()
            .map(|audit| match &audit.status {
                FileStatus::Inspected { jobs, .. } => jobs.len() as u32,
                FileStatus::Unreadable { .. } => 0,
            })
            .sum(),
        findings_total: findings.len() as u32,
    };

    DomainReport {
        verdict,
        findings,
        audits,
        data,
        counts,
    }
}

/// Errors fail the run. Warnings never do: a permissions block flagged for
/// review downgrades the verdict to `Warn` but keeps the run green.
fn compute_verdict(findings: &[Finding]) -> Verdict {
    if findings.iter().any(|f| f.severity == Severity::Error) {
        return Verdict::Fail;
    }
    if findings.iter().any(|f| f.severity == Severity::Warning) {
        return Verdict::Warn;
    }
    Verdict::Pass
}

/// Sort key: severity (error first), then path (missing last), then line
/// (missing last), then check_id, code, message.
fn finding_key(f: &Finding) -> (u8, &str, u32, &str, &str, &str) {
    let severity = match f.severity {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let (path, line) = match &f.location {
        Some(l) => (l.path.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };
    (severity, path, line, &f.check_id, &f.code, &f.message)
}

fn build_audits(set: &WorkflowSet) -> Vec<FileAudit> {
    set.workflows
        .iter()
        .map(|entry| FileAudit {
            path: entry.path.clone(),
            status: match &entry.contents {
                WorkflowContents::Unreadable { error, .. } => FileStatus::Unreadable {
                    error: error.clone(),
                },
                WorkflowContents::Parsed(model) => FileStatus::Inspected {
                    root: model.root_assessment(),
                    permissions: model.permissions.as_ref().map(ToString::to_string),
                    jobs: model
                        .jobs
                        .iter()
                        .filter_map(|job| {
                            let permissions = job.permissions.as_ref()?;
                            Some(JobNote {
                                name: job.name.clone(),
                                permissions: permissions.to_string(),
                                kind: job.kind(),
                            })
                        })
                        .collect(),
                },
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::evaluate;
    use crate::model::{JobKind, RootAssessment, WorkflowSet};
    use crate::report::FileStatus;
    use crate::test_support::{entry, job, literal, parsed, scopes, set, unreadable};
    use permguard_types::{Severity, Verdict, ids};

    #[test]
    fn all_compliant_passes() {
        let workflows = set(vec![entry(
            ".github/workflows/ci.yml",
            parsed(Some(literal("read-all")), Vec::new()),
        )]);

        let report = evaluate(&workflows);

        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.findings.is_empty());
        assert_eq!(report.data.workflows_scanned, 1);
        assert_eq!(report.data.findings_total, 0);
    }

    #[test]
    fn review_flags_warn_but_never_fail() {
        let workflows = set(vec![entry(
            ".github/workflows/release.yml",
            parsed(Some(literal("write-all")), Vec::new()),
        )]);

        let report = evaluate(&workflows);

        assert_eq!(report.verdict, Verdict::Warn);
        assert_eq!(report.counts.warning, 1);
        assert_eq!(report.counts.error, 0);
    }

    #[test]
    fn missing_root_block_fails() {
        let workflows = set(vec![entry(
            ".github/workflows/test.yml",
            parsed(None, Vec::new()),
        )]);

        let report = evaluate(&workflows);

        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.counts.error, 1);
        assert_eq!(report.findings[0].code, ids::CODE_MISSING_PERMISSIONS);
    }

    #[test]
    fn empty_set_fails() {
        let report = evaluate(&WorkflowSet::default());

        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.findings[0].code, ids::CODE_NO_WORKFLOW_FILES);
        assert_eq!(report.data.workflows_scanned, 0);
    }

    #[test]
    fn unreadable_file_fails_but_neighbors_stay_audited() {
        let workflows = set(vec![
            entry(".github/workflows/broken.yml", unreadable("boom")),
            entry(
                ".github/workflows/ok.yml",
                parsed(Some(literal("read-all")), Vec::new()),
            ),
        ]);

        let report = evaluate(&workflows);

        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.audits.len(), 2);
        assert!(matches!(
            report.audits[0].status,
            FileStatus::Unreadable { .. }
        ));
        assert!(matches!(
            report.audits[1].status,
            FileStatus::Inspected { .. }
        ));
    }

    #[test]
    fn findings_sort_errors_before_warnings() {
        let workflows = set(vec![
            entry(
                ".github/workflows/a.yml",
                parsed(Some(literal("write-all")), Vec::new()),
            ),
            entry(".github/workflows/b.yml", parsed(None, Vec::new())),
        ]);

        let report = evaluate(&workflows);

        assert_eq!(report.findings.len(), 2);
        assert_eq!(report.findings[0].severity, Severity::Error);
        assert_eq!(report.findings[1].severity, Severity::Warning);
    }

    #[test]
    fn audits_keep_job_notes_only_for_jobs_declaring_permissions() {
        let workflows = set(vec![entry(
            ".github/workflows/ci.yml",
            parsed(
                Some(literal("read-all")),
                vec![
                    job("build", Some(scopes(&[("contents", "read")])), true, false),
                    job("plain", None, true, false),
                    job("notes", Some(scopes(&[("contents", "write")])), false, true),
                ],
            ),
        )]);

        let report = evaluate(&workflows);

        assert_eq!(report.data.jobs_with_permissions, 2);
        let FileStatus::Inspected { root, jobs, .. } = &report.audits[0].status else {
            panic!("expected inspected audit");
        };
        assert_eq!(*root, RootAssessment::ReadAll);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].name, "build");
        assert_eq!(jobs[0].kind, JobKind::Steps);
        assert_eq!(jobs[1].name, "notes");
        assert_eq!(jobs[1].kind, JobKind::ReusableCall);
    }
}

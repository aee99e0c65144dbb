//! Mapping from the domain report to the renderable model.

use permguard_domain::model::{JobKind, RootAssessment};
use permguard_domain::report::{DomainReport, FileAudit, FileStatus};
use permguard_render::{
    RenderableCounts, RenderableFile, RenderableFileStatus, RenderableFinding, RenderableJob,
    RenderableJobKind, RenderableReport, RenderableRootStatus, RenderableSeverity,
    RenderableVerdict,
};
use permguard_types::{Severity, Verdict};

/// Render the domain report as the plain-text CLI output.
pub fn render_text_report(report: &DomainReport) -> String {
    permguard_render::render_text(&to_renderable(report))
}

/// Map the domain report onto the render model. Everything the renderer
/// needs is pre-rendered here; the render crate never sees domain types.
pub fn to_renderable(report: &DomainReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Warn => RenderableVerdict::Warn,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        workflows_scanned: report.data.workflows_scanned,
        jobs_with_permissions: report.data.jobs_with_permissions,
        files: report.audits.iter().map(map_file).collect(),
        findings: report
            .findings
            .iter()
            .map(|f| RenderableFinding {
                severity: match f.severity {
                    Severity::Info => RenderableSeverity::Info,
                    Severity::Warning => RenderableSeverity::Warning,
                    Severity::Error => RenderableSeverity::Error,
                },
                message: f.message.clone(),
                help: f.help.clone(),
            })
            .collect(),
        counts: RenderableCounts {
            warnings: report.counts.warning,
            errors: report.counts.error,
        },
    }
}

fn map_file(audit: &FileAudit) -> RenderableFile {
    let status = match &audit.status {
        FileStatus::Unreadable { error } => RenderableFileStatus::Unreadable {
            error: error.clone(),
        },
        FileStatus::Inspected {
            root,
            permissions,
            jobs,
        } => {
            let rendered = permissions.clone().unwrap_or_default();
            let root = match root {
                RootAssessment::Missing => RenderableRootStatus::Missing,
                RootAssessment::ReadAll | RootAssessment::ContentsReadOnly => {
                    RenderableRootStatus::Compliant { rendered }
                }
                RootAssessment::NeedsReview => RenderableRootStatus::NeedsReview { rendered },
            };
            RenderableFileStatus::Inspected {
                root,
                jobs: jobs
                    .iter()
                    .map(|job| RenderableJob {
                        name: job.name.clone(),
                        permissions: job.permissions.clone(),
                        kind: match job.kind {
                            JobKind::Steps => RenderableJobKind::Steps,
                            JobKind::ReusableCall => RenderableJobKind::ReusableCall,
                            JobKind::Unknown => RenderableJobKind::Unknown,
                        },
                    })
                    .collect(),
            }
        }
    };

    RenderableFile {
        path: audit.path.to_string(),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use permguard_domain::evaluate;
    use permguard_domain::model::{
        JobModel, PermissionsDecl, WorkflowContents, WorkflowEntry, WorkflowModel, WorkflowSet,
    };
    use permguard_types::RepoPath;

    fn sample_set() -> WorkflowSet {
        WorkflowSet {
            workflows: vec![
                WorkflowEntry {
                    path: RepoPath::new(".github/workflows/ci.yml"),
                    contents: WorkflowContents::Parsed(WorkflowModel {
                        permissions: Some(PermissionsDecl::Literal("read-all".to_string())),
                        jobs: vec![JobModel {
                            name: "build".to_string(),
                            permissions: Some(PermissionsDecl::Literal("read-all".to_string())),
                            has_steps: true,
                            has_uses: false,
                        }],
                    }),
                },
                WorkflowEntry {
                    path: RepoPath::new(".github/workflows/old.yml"),
                    contents: WorkflowContents::Parsed(WorkflowModel {
                        permissions: None,
                        jobs: Vec::new(),
                    }),
                },
            ],
        }
    }

    #[test]
    fn maps_audits_findings_and_counts() {
        let renderable = to_renderable(&evaluate(&sample_set()));

        assert_eq!(renderable.verdict, RenderableVerdict::Fail);
        assert_eq!(renderable.workflows_scanned, 2);
        assert_eq!(renderable.jobs_with_permissions, 1);
        assert_eq!(renderable.files.len(), 2);
        assert_eq!(renderable.files[0].path, ".github/workflows/ci.yml");
        assert_eq!(renderable.counts.errors, 1);
        assert_eq!(renderable.findings.len(), 1);
        assert!(
            renderable.findings[0]
                .message
                .contains("missing root-level permissions block")
        );

        let RenderableFileStatus::Inspected { root, jobs } = &renderable.files[0].status else {
            panic!("expected inspected file");
        };
        assert_eq!(
            *root,
            RenderableRootStatus::Compliant {
                rendered: "read-all".to_string()
            }
        );
        assert_eq!(jobs[0].kind, RenderableJobKind::Steps);
    }

    #[test]
    fn renders_end_to_end_text() {
        let text = render_text_report(&evaluate(&sample_set()));

        assert!(text.contains("Analyzing: .github/workflows/ci.yml"));
        assert!(text.contains("FINAL VERIFICATION RESULT"));
        assert!(text.contains("Some workflow files need attention: 1 error(s), 0 warning(s)"));
    }
}

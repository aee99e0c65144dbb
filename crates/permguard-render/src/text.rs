use crate::model::{
    RenderableFileStatus, RenderableJobKind, RenderableReport, RenderableRootStatus,
    RenderableSeverity, RenderableVerdict,
};

const RULE: &str = "==================================================";

/// Render the full plain-text report: header, per-file narrative, and the
/// final verdict block.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("GitHub Actions workflow permissions verification\n");
    out.push_str("Checking root and job-level token permission blocks (OpenSSF Scorecard)\n\n");
    out.push_str(&format!(
        "Found {} workflow file(s)\n",
        report.workflows_scanned
    ));

    for file in &report.files {
        out.push_str(&format!("\nAnalyzing: {}\n", file.path));
        match &file.status {
            RenderableFileStatus::Unreadable { error } => {
                out.push_str(&format!("  [ERROR] cannot parse workflow: {}\n", error));
            }
            RenderableFileStatus::Inspected { root, jobs } => {
                match root {
                    RenderableRootStatus::Missing => {
                        out.push_str("  [ERROR] missing root-level permissions block\n");
                    }
                    RenderableRootStatus::Compliant { rendered } => {
                        out.push_str(&format!(
                            "  [OK] root permissions: {} (compliant)\n",
                            rendered
                        ));
                    }
                    RenderableRootStatus::NeedsReview { rendered } => {
                        out.push_str(&format!(
                            "  [WARN] root permissions: {} (may need review)\n",
                            rendered
                        ));
                    }
                }
                for job in jobs {
                    out.push_str(&format!(
                        "  job '{}' declares permissions: {}\n",
                        job.name, job.permissions
                    ));
                    match job.kind {
                        RenderableJobKind::Steps => {
                            out.push_str("    -> regular job with steps\n");
                        }
                        RenderableJobKind::ReusableCall => {
                            out.push_str("    -> reusable workflow call\n");
                        }
                        RenderableJobKind::Unknown => {}
                    }
                }
            }
        }
    }

    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str("FINAL VERIFICATION RESULT\n");
    out.push_str(RULE);
    out.push('\n');

    match report.verdict {
        RenderableVerdict::Fail => render_failure(report, &mut out),
        RenderableVerdict::Pass | RenderableVerdict::Warn => render_success(report, &mut out),
    }

    out
}

fn render_success(report: &RenderableReport, out: &mut String) {
    out.push_str("All workflow files are compliant\n");
    out.push_str("- every file declares proper root-level permissions\n");
    out.push_str(&format!(
        "- job-level permissions are appropriately scoped ({} override(s) reported)\n",
        report.jobs_with_permissions
    ));
    out.push_str("- no changes needed for OpenSSF Scorecard compliance\n");

    if report.counts.warnings > 0 {
        out.push_str(&format!(
            "note: {} permission block(s) flagged for review\n",
            report.counts.warnings
        ));
    }
}

fn render_failure(report: &RenderableReport, out: &mut String) {
    out.push_str(&format!(
        "Some workflow files need attention: {} error(s), {} warning(s)\n",
        report.counts.errors, report.counts.warnings
    ));

    for finding in &report.findings {
        let sev = match finding.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };
        out.push_str(&format!("- [{}] {}\n", sev, finding.message));
        if let Some(help) = &finding.help {
            out.push_str(&format!("  help: {}\n", help));
        }
    }
}

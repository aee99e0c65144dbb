use crate::model::WorkflowSet;
use permguard_types::{Finding, Severity, ids};
use serde_json::json;

/// An empty scan is a failure, not a pass.
pub fn run(set: &WorkflowSet, out: &mut Vec<Finding>) {
    if !set.workflows.is_empty() {
        return;
    }

    out.push(Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_WORKFLOWS_EXIST.to_string(),
        code: ids::CODE_NO_WORKFLOW_FILES.to_string(),
        message: "no workflow files found under .github/workflows".to_string(),
        location: None,
        help: Some(
            "Add workflow files named *.yml or *.yaml under a .github/workflows directory."
                .to_string(),
        ),
        data: json!({
            "patterns": ["**/.github/workflows/*.yml", "**/.github/workflows/*.yaml"],
        }),
    });
}

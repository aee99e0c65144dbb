use crate::model::{WorkflowContents, WorkflowSet};
use permguard_types::{Finding, Location, Severity, ids};
use serde_json::json;

pub fn run(set: &WorkflowSet, out: &mut Vec<Finding>) {
    for entry in &set.workflows {
        let WorkflowContents::Unreadable { error, line, col } = &entry.contents else {
            continue;
        };

        out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_WORKFLOWS_VALID_YAML.to_string(),
            code: ids::CODE_UNPARSEABLE_WORKFLOW.to_string(),
            message: format!("{}: cannot parse workflow: {}", entry.path, error),
            location: Some(Location {
                path: entry.path.clone(),
                line: *line,
                col: *col,
            }),
            help: Some("Fix the YAML syntax; the file could not be inspected.".to_string()),
            data: json!({
                "workflow": entry.path.as_str(),
                "error": error,
            }),
        });
    }
}

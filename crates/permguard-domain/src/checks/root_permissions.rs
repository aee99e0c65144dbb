use crate::model::{RootAssessment, WorkflowContents, WorkflowSet};
use permguard_types::{Finding, Location, Severity, ids};
use serde_json::json;

/// Missing root `permissions` is an error. A declared block that is neither
/// `read-all` nor exactly `{contents: read}` is only flagged for review.
/// Job-level permissions are out of scope here.
pub fn run(set: &WorkflowSet, out: &mut Vec<Finding>) {
    for entry in &set.workflows {
        let WorkflowContents::Parsed(model) = &entry.contents else {
            continue;
        };

        match model.root_assessment() {
            RootAssessment::ReadAll | RootAssessment::ContentsReadOnly => {}
            RootAssessment::Missing => out.push(Finding {
                severity: Severity::Error,
                check_id: ids::CHECK_PERMISSIONS_ROOT_BLOCK.to_string(),
                code: ids::CODE_MISSING_PERMISSIONS.to_string(),
                message: format!("{}: missing root-level permissions block", entry.path),
                location: Some(Location {
                    path: entry.path.clone(),
                    line: None,
                    col: None,
                }),
                help: Some(
                    "Declare a top-level `permissions:` block; `read-all` or `contents: read` \
                     keep the workflow token read-only."
                        .to_string(),
                ),
                data: json!({
                    "workflow": entry.path.as_str(),
                }),
            }),
            RootAssessment::NeedsReview => {
                let rendered = model
                    .permissions
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                out.push(Finding {
                    severity: Severity::Warning,
                    check_id: ids::CHECK_PERMISSIONS_ROOT_BLOCK.to_string(),
                    code: ids::CODE_PERMISSIONS_NEED_REVIEW.to_string(),
                    message: format!(
                        "{}: root permissions may need review: {}",
                        entry.path, rendered
                    ),
                    location: Some(Location {
                        path: entry.path.clone(),
                        line: None,
                        col: None,
                    }),
                    help: Some(
                        "Confirm every granted scope is required; prefer `read-all` or \
                         `contents: read` at the root."
                            .to_string(),
                    ),
                    data: json!({
                        "workflow": entry.path.as_str(),
                        "permissions": rendered,
                    }),
                });
            }
        }
    }
}

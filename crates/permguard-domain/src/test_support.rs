//! Shared builders for domain tests.

use crate::model::{
    JobModel, PermissionScope, PermissionsDecl, WorkflowContents, WorkflowEntry, WorkflowModel,
    WorkflowSet,
};
use permguard_types::RepoPath;

pub fn set(workflows: Vec<WorkflowEntry>) -> WorkflowSet {
    WorkflowSet { workflows }
}

pub fn entry(path: &str, contents: WorkflowContents) -> WorkflowEntry {
    WorkflowEntry {
        path: RepoPath::new(path),
        contents,
    }
}

pub fn parsed(permissions: Option<PermissionsDecl>, jobs: Vec<JobModel>) -> WorkflowContents {
    WorkflowContents::Parsed(WorkflowModel { permissions, jobs })
}

pub fn unreadable(error: &str) -> WorkflowContents {
    WorkflowContents::Unreadable {
        error: error.to_string(),
        line: Some(1),
        col: Some(1),
    }
}

pub fn literal(value: &str) -> PermissionsDecl {
    PermissionsDecl::Literal(value.to_string())
}

pub fn scopes(pairs: &[(&str, &str)]) -> PermissionsDecl {
    PermissionsDecl::Scopes(
        pairs
            .iter()
            .map(|(name, level)| PermissionScope {
                name: name.to_string(),
                level: level.to_string(),
            })
            .collect(),
    )
}

pub fn job(
    name: &str,
    permissions: Option<PermissionsDecl>,
    has_steps: bool,
    has_uses: bool,
) -> JobModel {
    JobModel {
        name: name.to_string(),
        permissions,
        has_steps,
        has_uses,
    }
}

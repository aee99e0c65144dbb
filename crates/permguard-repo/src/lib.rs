//! Repository adapters: discover workflow files and parse them into the
//! domain model.
//!
//! This crate is allowed to do filesystem IO. Per-file read and parse
//! failures are carried as data in the returned set; one broken workflow
//! never aborts the scan.

#![forbid(unsafe_code)]

mod discover;
mod parse;

use anyhow::Context;
use camino::Utf8Path;
use permguard_domain::model::{WorkflowContents, WorkflowEntry, WorkflowSet};

pub use discover::discover_workflows;
pub use parse::{WorkflowLoadError, parse_workflow};

/// Build the in-memory workflow set used by the evaluation engine.
///
/// `repo_root` is the directory the scan starts from, typically the
/// repository root.
pub fn load_workflow_set(repo_root: &Utf8Path) -> anyhow::Result<WorkflowSet> {
    let paths = discover::discover_workflows(repo_root).context("discover workflows")?;

    let mut set = WorkflowSet::default();
    for path in paths {
        let abs = repo_root.join(path.as_str());
        let contents = match std::fs::read_to_string(&abs)
            .map_err(parse::WorkflowLoadError::from)
            .and_then(|text| parse::parse_workflow(&text))
        {
            Ok(model) => WorkflowContents::Parsed(model),
            Err(err) => {
                let (line, col) = err.position();
                WorkflowContents::Unreadable {
                    error: err.to_string(),
                    line,
                    col,
                }
            }
        };
        set.workflows.push(WorkflowEntry { path, contents });
    }

    Ok(set)
}

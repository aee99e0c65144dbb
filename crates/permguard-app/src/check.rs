//! The check use case: load the workflow set and evaluate it.

use anyhow::Context;
use camino::Utf8Path;
use permguard_domain::report::DomainReport;
use permguard_types::Verdict;

/// Run one verification against `repo_root`.
pub fn run_check(repo_root: &Utf8Path) -> anyhow::Result<DomainReport> {
    let set = permguard_repo::load_workflow_set(repo_root).context("load workflow set")?;
    Ok(permguard_domain::evaluate(&set))
}

/// Map verdict to exit code: 0 = pass/warn, 1 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 1,
    }
}

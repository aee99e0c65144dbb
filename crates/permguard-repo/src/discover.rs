use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use permguard_types::RepoPath;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Glob patterns for GitHub Actions workflow files, relative to the scan
/// root. Only direct children of a `.github/workflows` directory count.
const WORKFLOW_PATTERNS: &[&str] = &[
    "**/.github/workflows/*.yml",
    "**/.github/workflows/*.yaml",
];

/// Discover workflow files under `repo_root`.
///
/// Paths come back repo-relative with forward slashes, sorted and deduped.
/// Unreadable directory entries are skipped; symlinked directories are not
/// followed.
pub fn discover_workflows(repo_root: &Utf8Path) -> anyhow::Result<Vec<RepoPath>> {
    let patterns = workflow_globset().context("compile workflow globset")?;

    let mut out: Vec<RepoPath> = Vec::new();
    for abs in WalkDir::new(repo_root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
    {
        let rel = abs
            .strip_prefix(repo_root)
            .unwrap_or(&abs)
            .as_str()
            .replace('\\', "/");
        if patterns.is_match(&rel) {
            out.push(RepoPath::new(&rel));
        }
    }

    // Stable order.
    out.sort();
    out.dedup();

    Ok(out)
}

fn workflow_globset() -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in WORKFLOW_PATTERNS {
        // `*` must not cross directory boundaries.
        b.add(GlobBuilder::new(p).literal_separator(true).build()?);
    }
    Ok(b.build()?)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}

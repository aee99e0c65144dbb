//! Stable DTOs and IDs used across the permguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for findings and the run verdict
//! - stable string IDs and codes
//! - canonical repo-relative path handling

#![forbid(unsafe_code)]

pub mod finding;
pub mod ids;
pub mod path;

pub use finding::{Finding, Location, Severity, Verdict};
pub use path::RepoPath;

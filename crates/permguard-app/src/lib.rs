//! Use case orchestration for permguard.
//!
//! This crate provides the application layer: it coordinates the repo,
//! domain, and render layers. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and IO.

#![forbid(unsafe_code)]

mod check;
mod render;

pub use check::{run_check, verdict_exit_code};
pub use render::{render_text_report, to_renderable};

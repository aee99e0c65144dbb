//! Rendering of the plain-text verification report.
//!
//! The renderable model is deliberately decoupled from the domain types:
//! everything arrives pre-rendered as strings so this crate stays a pure
//! formatter.

#![forbid(unsafe_code)]

mod model;
mod text;

pub use model::{
    RenderableCounts, RenderableFile, RenderableFileStatus, RenderableFinding, RenderableJob,
    RenderableJobKind, RenderableReport, RenderableRootStatus, RenderableSeverity,
    RenderableVerdict,
};
pub use text::render_text;

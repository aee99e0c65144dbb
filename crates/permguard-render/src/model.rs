#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableJobKind {
    Steps,
    ReusableCall,
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableJob {
    pub name: String,
    pub permissions: String,
    pub kind: RenderableJobKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderableRootStatus {
    Missing,
    Compliant { rendered: String },
    NeedsReview { rendered: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderableFileStatus {
    Unreadable { error: String },
    Inspected {
        root: RenderableRootStatus,
        jobs: Vec<RenderableJob>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFile {
    pub path: String,
    pub status: RenderableFileStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub message: String,
    pub help: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableCounts {
    pub warnings: u32,
    pub errors: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub workflows_scanned: u32,
    pub jobs_with_permissions: u32,
    pub files: Vec<RenderableFile>,
    pub findings: Vec<RenderableFinding>,
    pub counts: RenderableCounts,
}

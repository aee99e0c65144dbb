use permguard_types::RepoPath;
use std::fmt;

/// Everything one scan discovered, parsed or not.
///
/// Built by the repo adapter; evaluation never touches the filesystem.
#[derive(Clone, Debug, Default)]
pub struct WorkflowSet {
    /// Discovered workflow files in stable path order.
    pub workflows: Vec<WorkflowEntry>,
}

#[derive(Clone, Debug)]
pub struct WorkflowEntry {
    pub path: RepoPath,
    pub contents: WorkflowContents,
}

/// Per-file load outcome, carried as data so one broken file never aborts
/// the scan of the remaining files.
#[derive(Clone, Debug)]
pub enum WorkflowContents {
    Parsed(WorkflowModel),
    Unreadable {
        error: String,
        line: Option<u32>,
        col: Option<u32>,
    },
}

#[derive(Clone, Debug, Default)]
pub struct WorkflowModel {
    /// Root-level `permissions` value, if the key is present at all.
    /// A bare `permissions:` (null value) counts as present.
    pub permissions: Option<PermissionsDecl>,

    /// Jobs in document order. Only mapping-shaped job entries are kept.
    pub jobs: Vec<JobModel>,
}

#[derive(Clone, Debug)]
pub struct JobModel {
    pub name: String,
    pub permissions: Option<PermissionsDecl>,
    pub has_steps: bool,
    pub has_uses: bool,
}

/// A declared `permissions` value, reduced to what classification and
/// report text need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PermissionsDecl {
    /// Scalar string such as `read-all` or `write-all`.
    Literal(String),
    /// Mapping of permission scope to access level, in document order.
    Scopes(Vec<PermissionScope>),
    /// Any other shape (null, sequence, non-string scalar), pre-rendered.
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermissionScope {
    pub name: String,
    pub level: String,
}

/// How a root-level `permissions` declaration measures up against the
/// token-permissions rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootAssessment {
    /// The `read-all` literal.
    ReadAll,
    /// Exactly `{contents: read}` and nothing else.
    ContentsReadOnly,
    /// Declared, but neither canonical form. Flagged for review; never a
    /// failure on its own.
    NeedsReview,
    /// No root-level `permissions` key at all.
    Missing,
}

/// How a job runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobKind {
    Steps,
    ReusableCall,
    Unknown,
}

impl WorkflowModel {
    pub fn root_assessment(&self) -> RootAssessment {
        match &self.permissions {
            None => RootAssessment::Missing,
            Some(decl) => decl.assess(),
        }
    }
}

impl PermissionsDecl {
    pub fn assess(&self) -> RootAssessment {
        match self {
            PermissionsDecl::Literal(lit) if lit == "read-all" => RootAssessment::ReadAll,
            PermissionsDecl::Scopes(scopes)
                if scopes.len() == 1
                    && scopes[0].name == "contents"
                    && scopes[0].level == "read" =>
            {
                RootAssessment::ContentsReadOnly
            }
            _ => RootAssessment::NeedsReview,
        }
    }
}

impl fmt::Display for PermissionsDecl {
    /// Single-line flow rendering for report text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionsDecl::Literal(lit) => f.write_str(lit),
            PermissionsDecl::Scopes(scopes) => {
                f.write_str("{")?;
                for (i, scope) in scopes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", scope.name, scope.level)?;
                }
                f.write_str("}")
            }
            PermissionsDecl::Other(rendered) => f.write_str(rendered),
        }
    }
}

impl JobModel {
    /// `steps` wins when a job somehow declares both `steps` and `uses`.
    pub fn kind(&self) -> JobKind {
        if self.has_steps {
            JobKind::Steps
        } else if self.has_uses {
            JobKind::ReusableCall
        } else {
            JobKind::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{JobKind, PermissionsDecl, RootAssessment, WorkflowModel};
    use crate::test_support::{job, literal, scopes};

    #[test]
    fn read_all_literal_is_compliant() {
        assert_eq!(literal("read-all").assess(), RootAssessment::ReadAll);
    }

    #[test]
    fn contents_read_mapping_is_compliant() {
        assert_eq!(
            scopes(&[("contents", "read")]).assess(),
            RootAssessment::ContentsReadOnly
        );
    }

    #[test]
    fn everything_else_needs_review() {
        assert_eq!(literal("write-all").assess(), RootAssessment::NeedsReview);
        assert_eq!(
            scopes(&[("contents", "write")]).assess(),
            RootAssessment::NeedsReview
        );
        assert_eq!(
            scopes(&[("contents", "read"), ("issues", "read")]).assess(),
            RootAssessment::NeedsReview
        );
        assert_eq!(scopes(&[]).assess(), RootAssessment::NeedsReview);
        assert_eq!(
            PermissionsDecl::Other("null".to_string()).assess(),
            RootAssessment::NeedsReview
        );
    }

    #[test]
    fn absent_key_is_missing() {
        assert_eq!(
            WorkflowModel::default().root_assessment(),
            RootAssessment::Missing
        );
    }

    #[test]
    fn steps_wins_over_uses() {
        assert_eq!(job("build", None, true, true).kind(), JobKind::Steps);
        assert_eq!(job("notes", None, false, true).kind(), JobKind::ReusableCall);
        assert_eq!(job("bare", None, false, false).kind(), JobKind::Unknown);
    }

    #[test]
    fn renders_flow_style() {
        assert_eq!(literal("read-all").to_string(), "read-all");
        assert_eq!(
            scopes(&[("contents", "read"), ("issues", "write")]).to_string(),
            "{contents: read, issues: write}"
        );
        assert_eq!(scopes(&[]).to_string(), "{}");
    }
}

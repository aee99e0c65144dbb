use permguard_domain::model::{JobModel, PermissionScope, PermissionsDecl, WorkflowModel};
use serde_yaml::Value;
use thiserror::Error;

/// Why a discovered workflow could not be inspected.
#[derive(Debug, Error)]
pub enum WorkflowLoadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("workflow document is not a YAML mapping")]
    NotAMapping,
}

impl WorkflowLoadError {
    /// 1-based line/column reported by the YAML parser, when available.
    pub fn position(&self) -> (Option<u32>, Option<u32>) {
        let WorkflowLoadError::Yaml(err) = self else {
            return (None, None);
        };
        match err.location() {
            Some(loc) => (Some(loc.line() as u32), Some(loc.column() as u32)),
            None => (None, None),
        }
    }
}

/// Parse one workflow document into the domain model.
///
/// Only the keys the verifier cares about are extracted: the root
/// `permissions` value and, per job, `permissions` plus the `steps` and
/// `uses` markers. Never panics on any input.
pub fn parse_workflow(text: &str) -> Result<WorkflowModel, WorkflowLoadError> {
    let doc: Value = serde_yaml::from_str(text)?;
    if !doc.is_mapping() {
        return Err(WorkflowLoadError::NotAMapping);
    }

    Ok(WorkflowModel {
        permissions: doc.get("permissions").map(parse_permissions),
        jobs: parse_jobs(doc.get("jobs")),
    })
}

fn parse_permissions(value: &Value) -> PermissionsDecl {
    match value {
        Value::String(lit) => PermissionsDecl::Literal(lit.clone()),
        Value::Mapping(scopes) => PermissionsDecl::Scopes(
            scopes
                .iter()
                .map(|(name, level)| PermissionScope {
                    name: render_value(name),
                    level: render_value(level),
                })
                .collect(),
        ),
        other => PermissionsDecl::Other(render_value(other)),
    }
}

fn parse_jobs(value: Option<&Value>) -> Vec<JobModel> {
    let Some(jobs) = value.and_then(Value::as_mapping) else {
        return Vec::new();
    };

    jobs.iter()
        .filter(|(_, job)| job.is_mapping())
        .map(|(name, job)| JobModel {
            name: render_value(name),
            permissions: job.get("permissions").map(parse_permissions),
            has_steps: job.get("steps").is_some(),
            has_uses: job.get("uses").is_some(),
        })
        .collect()
}

/// Single-line YAML flow rendering, used for job names and permission
/// values that end up in report text.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            let inner: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Mapping(entries) => {
            let inner: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{}: {}", render_value(k), render_value(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
        Value::Tagged(tagged) => render_value(&tagged.value),
    }
}

//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_WORKFLOWS_EXIST: &str = "workflows.exist";
pub const CHECK_WORKFLOWS_VALID_YAML: &str = "workflows.valid_yaml";
pub const CHECK_PERMISSIONS_ROOT_BLOCK: &str = "permissions.root_block";

// Codes: workflows.exist
pub const CODE_NO_WORKFLOW_FILES: &str = "no_workflow_files";

// Codes: workflows.valid_yaml
pub const CODE_UNPARSEABLE_WORKFLOW: &str = "unparseable_workflow";

// Codes: permissions.root_block
pub const CODE_MISSING_PERMISSIONS: &str = "missing_permissions";
pub const CODE_PERMISSIONS_NEED_REVIEW: &str = "permissions_need_review";

use crate::model::WorkflowSet;
use permguard_types::Finding;

mod root_permissions;
mod valid_yaml;
mod workflows_exist;


pub fn run_all(set: &WorkflowSet, out: &mut Vec<Finding>) {
    workflows_exist::run(set, out);
    valid_yaml::run(set, out);
    root_permissions::run(set, out);
}

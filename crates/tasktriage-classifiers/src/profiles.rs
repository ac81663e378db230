//! Built-in rule tables
//!
//! Three profiles ship with the crate, embedded at compile time:
//! - `task_types`: what kind of work a request asks for
//! - `bug_categories`: which area of an application a bug report concerns
//! - `error_types`: which family an error message belongs to

use crate::config::RuleTableSpec;
use tasktriage_core::Result;

pub const TASK_TYPES: &str = "task_types";
pub const BUG_CATEGORIES: &str = "bug_categories";
pub const ERROR_TYPES: &str = "error_types";

/// Profile used when none is requested
pub const DEFAULT_PROFILE: &str = TASK_TYPES;

const TASK_TYPES_YAML: &str = include_str!("../profiles/task_types.yaml");
const BUG_CATEGORIES_YAML: &str = include_str!("../profiles/bug_categories.yaml");
const ERROR_TYPES_YAML: &str = include_str!("../profiles/error_types.yaml");

/// Names and YAML sources of every built-in profile
pub fn builtin_profiles() -> [(&'static str, &'static str); 3] {
    [
        (TASK_TYPES, TASK_TYPES_YAML),
        (BUG_CATEGORIES, BUG_CATEGORIES_YAML),
        (ERROR_TYPES, ERROR_TYPES_YAML),
    ]
}

/// Parse a built-in profile by name
pub fn builtin_spec(name: &str) -> Option<Result<RuleTableSpec>> {
    builtin_profiles()
        .into_iter()
        .find(|(profile, _)| *profile == name)
        .map(|(_, yaml)| RuleTableSpec::from_yaml(yaml))
}

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{RouterConfig, PROJECT_RULES_PATH};
use super::types::ProjectRules;

/// Load a rules document. A missing, unreadable, or unparseable file is
/// treated as absent, never as a fatal error.
pub fn load_rules_file(path: &Path) -> Option<Value> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Rules file not readable");
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Rules file is not valid JSON");
            None
        }
    }
}

pub fn load_global_rules(config: &RouterConfig) -> Option<Value> {
    load_rules_file(&config.rules_path)
}

/// Load project overrides from the fixed path under the working directory
/// supplied by the hook input, falling back to the process cwd. Absence is
/// not an error; a document that does not fit the override schema is
/// ignored wholesale.
pub fn load_project_rules(config: &RouterConfig, cwd: &str) -> Option<ProjectRules> {
    let base = if cwd.is_empty() {
        config.cwd.clone()
    } else {
        PathBuf::from(cwd)
    };
    let path = base.join(PROJECT_RULES_PATH);
    let value = load_rules_file(&path)?;
    match serde_json::from_value(value) {
        Ok(rules) => {
            debug!(path = %path.display(), "Loaded project rules");
            Some(rules)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Project rules malformed");
            None
        }
    }
}

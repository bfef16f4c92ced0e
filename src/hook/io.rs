use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::error;

pub const HOOK_EVENT_NAME: &str = "UserPromptSubmit";

/// The hook request: one JSON object on stdin.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub prompt: String,
    /// Working directory for project-rule lookup.
    #[serde(default)]
    pub cwd: String,
}

/// The hook response: one JSON object on stdout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

impl HookOutput {
    pub fn with_context(hint: String) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: HOOK_EVENT_NAME,
                additional_context: Some(hint),
            },
        }
    }

    /// The neutral response: structurally valid, no routing hint.
    pub fn neutral() -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: HOOK_EVENT_NAME,
                additional_context: None,
            },
        }
    }
}

/// Read the hook request from stdin. Empty or malformed input degrades to
/// the default (empty) request, never an error.
pub fn read_input() -> HookInput {
    let mut raw = String::new();
    if std::io::stdin().read_to_string(&mut raw).is_err() {
        return HookInput::default();
    }
    parse_input(&raw)
}

pub(crate) fn parse_input(raw: &str) -> HookInput {
    if raw.trim().is_empty() {
        return HookInput::default();
    }
    serde_json::from_str(raw).unwrap_or_default()
}

/// Write the response as a single JSON line on stdout.
pub fn write_output(output: &HookOutput) {
    match serde_json::to_string(output) {
        Ok(line) => println!("{line}"),
        Err(e) => error!(error = %e, "Failed to serialize hook output"),
    }
}

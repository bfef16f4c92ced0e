use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

/// The merged rule set driving all matching. Categories and skills keep the
/// definition order of the source document; all iteration over them is
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub agent_categories: Vec<AgentCategory>,
    pub skills: Vec<SkillRule>,
    pub injection_templates: HashMap<String, InjectionTemplate>,
}

#[derive(Debug, Clone)]
pub struct AgentCategory {
    pub name: String,
    pub description: String,
    pub triggers: Vec<String>,
    pub agents: Vec<AgentDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentDescriptor {
    pub name: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SkillRule {
    pub name: String,
    pub triggers: Vec<String>,
    pub patterns: Vec<String>,
    pub purpose: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InjectionTemplate {
    #[serde(default)]
    pub description: String,
    pub template: Option<String>,
}

/// Project-specific overrides, one field per override category. An absent
/// key merges as a no-op. Leaf values stay loosely typed; they are validated
/// per entry at merge time so one malformed entry never poisons the rest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectRules {
    /// Extra triggers appended to existing categories, keyed by category.
    #[serde(default)]
    pub triggers: Map<String, Value>,
    /// New skills, or extra triggers for existing ones, keyed by skill.
    #[serde(default)]
    pub skills: Map<String, Value>,
    /// Keyword -> skill names; the keyword becomes a trigger on each skill.
    #[serde(default)]
    pub skill_mappings: Map<String, Value>,
    /// Project-defined agents destined for the catch-all category.
    #[serde(default)]
    pub custom_agents: Map<String, Value>,
    /// Free-form project metadata; list values name project skills.
    #[serde(default)]
    pub project_context: Map<String, Value>,
}

impl RuleSet {
    /// Lenient conversion from a parsed rules document. Entries with
    /// unexpected shapes are skipped with a debug log; structural problems
    /// worth failing over are reported separately by `validate_document`.
    pub fn from_document(doc: &Value) -> Self {
        let mut rules = Self::default();

        if let Some(categories) = doc.get("agent_categories").and_then(Value::as_object) {
            for (name, data) in categories {
                match AgentCategory::from_entry(name, data) {
                    Some(category) => rules.agent_categories.push(category),
                    None => debug!(category = %name, "Skipping malformed agent category"),
                }
            }
        }

        if let Some(skills) = doc.get("skills").and_then(Value::as_object) {
            for (name, data) in skills {
                match SkillRule::from_entry(name, data) {
                    Some(skill) => rules.skills.push(skill),
                    None => debug!(skill = %name, "Skipping malformed skill"),
                }
            }
        }

        if let Some(templates) = doc.get("injection_templates").and_then(Value::as_object) {
            for (name, data) in templates {
                match serde_json::from_value(data.clone()) {
                    Ok(template) => {
                        rules.injection_templates.insert(name.clone(), template);
                    }
                    Err(_) => debug!(template = %name, "Skipping malformed injection template"),
                }
            }
        }

        rules
    }
}

impl AgentCategory {
    fn from_entry(name: &str, data: &Value) -> Option<Self> {
        let data = data.as_object()?;
        let agents = data
            .get("agents")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| match serde_json::from_value(item.clone()) {
                        Ok(agent) => Some(agent),
                        Err(_) => {
                            debug!(category = %name, "Skipping malformed agent entry");
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            name: name.to_string(),
            description: data
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            triggers: string_seq(data.get("triggers")),
            agents,
        })
    }
}

impl SkillRule {
    fn from_entry(name: &str, data: &Value) -> Option<Self> {
        let data = data.as_object()?;
        Some(Self {
            name: name.to_string(),
            triggers: string_seq(data.get("triggers")),
            patterns: string_seq(data.get("patterns")),
            purpose: data
                .get("purpose")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
    }
}

/// Extract a sequence of strings, dropping anything that is not a string.
pub(crate) fn string_seq(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

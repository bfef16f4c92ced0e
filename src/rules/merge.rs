use serde_json::{Map, Value};
use std::collections::BTreeSet;
use tracing::debug;

use super::types::{string_seq, AgentDescriptor, ProjectRules, RuleSet, SkillRule};

/// The category that receives project-defined custom agents. Custom agents
/// are dropped when the global rule set does not define it.
pub const CATCH_ALL_CATEGORY: &str = "utilities";

const CUSTOM_AGENT_PURPOSE: &str = "Project-specific agent";

/// A merged rule set plus the provenance of every project-sourced agent and
/// skill name, used later to select stronger hint wording.
#[derive(Debug)]
pub struct MergedRules {
    pub rules: RuleSet,
    pub project_agents: BTreeSet<String>,
    pub project_skills: BTreeSet<String>,
}

/// Merge project overrides into the global rule set. Deterministic and
/// order-preserving: global definition order is kept, project additions are
/// appended in their own definition order. Merging `None` returns the
/// global set unchanged with empty provenance sets.
pub fn merge_rules(
    global: RuleSet,
    project: Option<&ProjectRules>,
    allow_custom_agents: bool,
) -> MergedRules {
    let mut merged = MergedRules {
        rules: global,
        project_agents: BTreeSet::new(),
        project_skills: BTreeSet::new(),
    };
    let Some(project) = project else {
        return merged;
    };

    // List-valued project_context entries name skills this project leans on.
    for value in project.project_context.values() {
        if let Some(items) = value.as_array() {
            for skill in items.iter().filter_map(Value::as_str) {
                merged.project_skills.insert(skill.to_string());
            }
        }
    }

    merge_category_triggers(&mut merged, &project.triggers);
    merge_skills(&mut merged, &project.skills);
    merge_skill_mappings(&mut merged, &project.skill_mappings);
    if allow_custom_agents {
        merge_custom_agents(&mut merged, &project.custom_agents);
    }

    merged
}

/// Extra triggers are appended to their category (no de-duplication); every
/// agent already in that category becomes project-sourced.
fn merge_category_triggers(merged: &mut MergedRules, triggers: &Map<String, Value>) {
    for (category_name, value) in triggers {
        if !value.is_array() {
            debug!(category = %category_name, "Skipping malformed project triggers");
            continue;
        }
        let Some(category) = merged
            .rules
            .agent_categories
            .iter_mut()
            .find(|c| &c.name == category_name)
        else {
            continue;
        };
        category.triggers.extend(string_seq(Some(value)));
        for agent in &category.agents {
            merged.project_agents.insert(agent.name.clone());
        }
    }
}

/// Known skills get their trigger lists extended; unknown skills are
/// inserted wholesale. Either way the skill becomes project-sourced.
fn merge_skills(merged: &mut MergedRules, skills: &Map<String, Value>) {
    for (skill_name, value) in skills {
        let Some(data) = value.as_object() else {
            debug!(skill = %skill_name, "Skipping malformed project skill");
            continue;
        };
        if let Some(existing) = merged.rules.skills.iter_mut().find(|s| &s.name == skill_name) {
            existing.triggers.extend(string_seq(data.get("triggers")));
        } else {
            merged.rules.skills.push(SkillRule {
                name: skill_name.clone(),
                triggers: string_seq(data.get("triggers")),
                patterns: string_seq(data.get("patterns")),
                purpose: data
                    .get("purpose")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            });
        }
        merged.project_skills.insert(skill_name.clone());
    }
}

/// Each mapping keyword becomes an extra trigger on every mapped skill that
/// exists in the merged set, skipping keywords the skill already carries.
fn merge_skill_mappings(merged: &mut MergedRules, mappings: &Map<String, Value>) {
    for (keyword, value) in mappings {
        let Some(skill_names) = value.as_array() else {
            debug!(keyword = %keyword, "Skipping malformed skill mapping");
            continue;
        };
        for skill_name in skill_names.iter().filter_map(Value::as_str) {
            let Some(skill) = merged.rules.skills.iter_mut().find(|s| s.name == skill_name)
            else {
                continue;
            };
            if !skill.triggers.iter().any(|t| t == keyword) {
                skill.triggers.push(keyword.clone());
            }
            merged.project_skills.insert(skill_name.to_string());
        }
    }
}

/// Custom agents land in the catch-all category, with their triggers added
/// to that category's trigger list. Malformed entries are skipped; without
/// a catch-all category the whole block is dropped.
fn merge_custom_agents(merged: &mut MergedRules, custom_agents: &Map<String, Value>) {
    if custom_agents.is_empty() {
        return;
    }
    let Some(category) = merged
        .rules
        .agent_categories
        .iter_mut()
        .find(|c| c.name == CATCH_ALL_CATEGORY)
    else {
        debug!(
            category = CATCH_ALL_CATEGORY,
            "No catch-all category in rule set; dropping custom agents"
        );
        return;
    };

    for (agent_name, value) in custom_agents {
        let Some(data) = value.as_object() else {
            debug!(agent = %agent_name, "Skipping malformed custom agent");
            continue;
        };
        category.agents.push(AgentDescriptor {
            name: agent_name.clone(),
            purpose: data
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or(CUSTOM_AGENT_PURPOSE)
                .to_string(),
            tools: string_seq(data.get("tools")),
        });
        category.triggers.extend(string_seq(data.get("triggers")));
        merged.project_agents.insert(agent_name.clone());
    }
}

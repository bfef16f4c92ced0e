use crate::matcher::MatchResult;
use crate::rules::RuleSet;
use crate::scenario::Scenario;
use super::defaults;

/// Agents listed in a rendered hint.
const LISTED_AGENTS: usize = 3;
/// Skills listed in a rendered hint.
const LISTED_SKILLS: usize = 3;

const PROJECT_AGENT_MARKER: &str = " [PROJECT-SPECIFIC]";
const PROJECT_SKILL_MARKER: &str = " [PROJECT]";

/// Render the instructional hint for the chosen scenario. Pure: never
/// mutates its inputs and never fails on missing templates.
pub fn build_hint(scenario: Scenario, result: &MatchResult, rules: &RuleSet) -> String {
    match scenario {
        Scenario::ShortNoMatch => plain_template(rules, "short_no_match", defaults::SHORT_NO_MATCH),
        Scenario::LongNoMatch => plain_template(rules, "long_no_match", defaults::LONG_NO_MATCH),
        Scenario::AgentsOnly => {
            select_template(rules, result, "agents_only", defaults::AGENTS_ONLY, defaults::PROJECT_AGENTS_ONLY)
                .replace("{agent_list}", &agent_list(result))
        }
        Scenario::SkillsOnly => {
            select_template(rules, result, "skills_only", defaults::SKILLS_ONLY, defaults::PROJECT_SKILLS_ONLY)
                .replace("{skill_list}", &skill_list(result))
        }
        Scenario::AgentsAndSkills => select_template(
            rules,
            result,
            "agents_and_skills",
            defaults::AGENTS_AND_SKILLS,
            defaults::PROJECT_AGENTS_AND_SKILLS,
        )
        .replace("{agent_list}", &agent_list(result))
        .replace("{skill_list}", &skill_list(result)),
    }
}

fn plain_template(rules: &RuleSet, key: &str, default: &str) -> String {
    rules
        .injection_templates
        .get(key)
        .and_then(|t| t.template.clone())
        .unwrap_or_else(|| default.to_string())
}

/// Template selection with the project-flavored fallback chain: when the
/// match involves project-sourced entries, prefer `project_<key>`, then the
/// plain key, then the stronger built-in default.
fn select_template(
    rules: &RuleSet,
    result: &MatchResult,
    key: &str,
    default: &str,
    project_default: &str,
) -> String {
    if !result.has_project_matches {
        return plain_template(rules, key, default);
    }
    let project_key = format!("project_{key}");
    rules
        .injection_templates
        .get(&project_key)
        .or_else(|| rules.injection_templates.get(key))
        .and_then(|t| t.template.clone())
        .unwrap_or_else(|| project_default.to_string())
}

/// Bulleted `name: purpose` lines for the top agents, annotating
/// project-sourced ones.
fn agent_list(result: &MatchResult) -> String {
    result
        .matched_agents
        .iter()
        .take(LISTED_AGENTS)
        .map(|agent| {
            let marker = if result.is_project_agent(&agent.name) {
                PROJECT_AGENT_MARKER
            } else {
                ""
            };
            format!("  - {}: {}{}", agent.name, agent.purpose, marker)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Comma-joined top skill names, annotating project-sourced ones.
fn skill_list(result: &MatchResult) -> String {
    result
        .matched_skills
        .iter()
        .take(LISTED_SKILLS)
        .map(|skill| {
            if result.is_project_skill(skill) {
                format!("{skill}{PROJECT_SKILL_MARKER}")
            } else {
                skill.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

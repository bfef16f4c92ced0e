use regex::RegexBuilder;
use std::collections::BTreeSet;
use tracing::debug;

use crate::rules::{AgentCategory, RuleSet, SkillRule};
use super::text::{contains_keyword, count_words, normalize};
use super::types::MatchResult;

/// How many agents each matched category contributes before deduplication.
const AGENTS_PER_CATEGORY: usize = 2;
/// Cap on candidate agents across all matched categories.
const MAX_AGENTS: usize = 4;
/// Cap on retained skills.
const MAX_SKILLS: usize = 3;
/// Explicit regex patterns are stronger signals than bare keywords.
const PATTERN_WEIGHT: usize = 2;

/// Match a prompt against the merged rule set, producing the ranked
/// categories, candidate agents, and skills that drive scenario selection.
pub fn analyze_prompt(
    prompt: &str,
    rules: &RuleSet,
    project_agents: &BTreeSet<String>,
    project_skills: &BTreeSet<String>,
) -> MatchResult {
    let mut result = MatchResult {
        word_count: count_words(prompt),
        ..MatchResult::default()
    };
    let prompt_lower = normalize(prompt);

    let category_matches = match_agent_categories(&prompt_lower, rules, project_agents, &mut result);
    for (hits, category) in &category_matches {
        result.matched_categories.push(category.name.clone());
        result
            .matched_agents
            .extend(category.agents.iter().take(AGENTS_PER_CATEGORY).cloned());
        result.match_count += hits;
    }

    let skill_matches = match_skills(&prompt_lower, rules, project_skills, &mut result);
    for (weight, skill) in skill_matches.iter().take(MAX_SKILLS) {
        result.matched_skills.push(skill.name.clone());
        result.match_count += weight;
    }

    result.has_project_matches =
        !result.project_matched_agents.is_empty() || !result.project_matched_skills.is_empty();

    // Deduplicate agents by name, first occurrence wins, then cap.
    let mut seen = BTreeSet::new();
    result.matched_agents.retain(|agent| seen.insert(agent.name.clone()));
    result.matched_agents.truncate(MAX_AGENTS);

    debug!(
        categories = ?result.matched_categories,
        skills = ?result.matched_skills,
        project = result.has_project_matches,
        "Prompt analyzed"
    );

    result
}

/// Categories ranked by descending trigger hits; the stable sort keeps
/// definition order on ties. Project-sourced agents inside any matched
/// category are recorded along the way.
fn match_agent_categories<'r>(
    prompt_lower: &str,
    rules: &'r RuleSet,
    project_agents: &BTreeSet<String>,
    result: &mut MatchResult,
) -> Vec<(usize, &'r AgentCategory)> {
    let mut matches = Vec::new();
    for category in &rules.agent_categories {
        let hits = category
            .triggers
            .iter()
            .filter(|trigger| contains_keyword(prompt_lower, trigger))
            .count();
        if hits == 0 {
            continue;
        }
        matches.push((hits, category));
        for agent in &category.agents {
            if project_agents.contains(&agent.name) {
                result.project_matched_agents.push(agent.name.clone());
            }
        }
    }
    matches.sort_by(|a, b| b.0.cmp(&a.0));
    matches
}

/// Skills ranked by combined weight: 1 per trigger hit, `PATTERN_WEIGHT`
/// per matching pattern. Malformed patterns are skipped, not fatal.
fn match_skills<'r>(
    prompt_lower: &str,
    rules: &'r RuleSet,
    project_skills: &BTreeSet<String>,
    result: &mut MatchResult,
) -> Vec<(usize, &'r SkillRule)> {
    let mut matches = Vec::new();
    for skill in &rules.skills {
        let mut weight = skill
            .triggers
            .iter()
            .filter(|trigger| contains_keyword(prompt_lower, trigger))
            .count();

        for pattern in &skill.patterns {
            match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(re) => {
                    if re.is_match(prompt_lower) {
                        weight += PATTERN_WEIGHT;
                    }
                }
                Err(e) => {
                    debug!(skill = %skill.name, pattern = %pattern, error = %e, "Skipping malformed skill pattern");
                }
            }
        }

        if weight == 0 {
            continue;
        }
        matches.push((weight, skill));
        if project_skills.contains(&skill.name) {
            result.project_matched_skills.push(skill.name.clone());
        }
    }
    matches.sort_by(|a, b| b.0.cmp(&a.0));
    matches
}

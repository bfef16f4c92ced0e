use tracing::{debug, error};

use crate::config::RouterConfig;
use crate::hint::build_hint;
use crate::matcher::{analyze_prompt, MatchResult};
use crate::rules::{load_global_rules, load_project_rules, merge_rules, validate_document, RuleSet};
use crate::scenario::Scenario;
use super::io::{read_input, write_output, HookInput, HookOutput};

/// Run the UserPromptSubmit hook: one JSON request on stdin, one JSON
/// response on stdout. Never fails the caller; any internal error degrades
/// to the neutral response.
pub fn run(config: &RouterConfig) {
    let input = read_input();
    let output = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| route(config, &input)))
        .unwrap_or_else(|_| {
            error!("Unexpected router panic; emitting neutral response");
            HookOutput::neutral()
        });
    write_output(&output);
}

/// The single-pass pipeline: load, merge, analyze, classify, render.
pub fn route(config: &RouterConfig, input: &HookInput) -> HookOutput {
    debug!(chars = input.prompt.len(), cwd = %input.cwd, "Routing prompt");

    if input.prompt.is_empty() {
        // Nothing to classify; still nudge the orchestrator if rules load.
        return match load_global_rules(config).map(|doc| RuleSet::from_document(&doc)) {
            Some(rules) => {
                let hint = build_hint(Scenario::ShortNoMatch, &MatchResult::default(), &rules);
                HookOutput::with_context(hint)
            }
            None => HookOutput::neutral(),
        };
    }

    let Some(global) = load_valid_global_rules(config) else {
        debug!(path = %config.rules_path.display(), "Global rules unavailable");
        return HookOutput::neutral();
    };

    let project = load_project_rules(config, &input.cwd);
    let merged = merge_rules(global, project.as_ref(), config.custom_agents);
    debug!(
        categories = merged.rules.agent_categories.len(),
        skills = merged.rules.skills.len(),
        project_agents = merged.project_agents.len(),
        project_skills = merged.project_skills.len(),
        "Rules loaded"
    );

    let result = analyze_prompt(
        &input.prompt,
        &merged.rules,
        &merged.project_agents,
        &merged.project_skills,
    );
    let scenario = Scenario::determine(
        result.has_agents(),
        result.has_skills(),
        result.word_count < config.short_threshold,
    );
    debug!(scenario = %scenario, matches = result.match_count, "Scenario determined");

    let hint = build_hint(scenario, &result, &merged.rules);
    HookOutput::with_context(hint)
}

/// Global rules, parsed and (unless disabled) structurally validated.
/// Validation failures are configuration errors: logged, then degraded to
/// "no rules" so the caller still gets a valid response.
fn load_valid_global_rules(config: &RouterConfig) -> Option<RuleSet> {
    let doc = load_global_rules(config)?;
    if config.strict_validation {
        let report = validate_document(&doc);
        if !report.is_valid() {
            for err in &report.errors {
                error!(error = %err, "Invalid global rules");
            }
            return None;
        }
    }
    Some(RuleSet::from_document(&doc))
}

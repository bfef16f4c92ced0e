use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use prompt_router::config::RouterConfig;
use prompt_router::hook::{route, HookInput};

fn sample_rules() -> serde_json::Value {
    serde_json::json!({
        "version": "1.0.0",
        "agent_categories": {
            "development": {
                "description": "Code implementation",
                "triggers": ["implement", "code", "build", "create feature", "frontend", "backend"],
                "agents": [
                    {"name": "frontend-developer", "purpose": "UI development", "tools": ["Read", "Write"]},
                    {"name": "backend-developer", "purpose": "Server-side logic", "tools": ["Read", "Write"]}
                ]
            },
            "quality_testing": {
                "description": "Testing and review",
                "triggers": ["test", "review", "debug", "fix bug"],
                "agents": [
                    {"name": "test-runner", "purpose": "Run tests", "tools": ["Bash"]},
                    {"name": "code-reviewer", "purpose": "Review code", "tools": ["Read"]}
                ]
            },
            "utilities": {
                "description": "Ungrouped utility agents",
                "triggers": ["cleanup"],
                "agents": [
                    {"name": "general-helper", "purpose": "Small utility tasks", "tools": ["Bash"]}
                ]
            }
        },
        "skills": {
            "jest": {
                "triggers": ["jest", "javascript test", "typescript test"],
                "patterns": ["run.*jest", "jest.*test"],
                "purpose": "Jest testing"
            },
            "vercel": {
                "triggers": ["vercel", "nextjs", "next.js"],
                "patterns": ["deploy.*vercel"],
                "purpose": "Vercel deployments"
            }
        },
        "injection_templates": {}
    })
}

fn write_global_rules(dir: &TempDir, rules: &serde_json::Value) -> PathBuf {
    let path = dir.path().join("router-rules.json");
    fs::write(&path, serde_json::to_string_pretty(rules).unwrap()).unwrap();
    path
}

fn write_project_rules(dir: &Path, rules: &serde_json::Value) {
    let claude_dir = dir.join(".claude");
    fs::create_dir_all(&claude_dir).unwrap();
    fs::write(
        claude_dir.join("router-rules.json"),
        serde_json::to_string_pretty(rules).unwrap(),
    )
    .unwrap();
}

fn test_config(rules_path: PathBuf, cwd: PathBuf) -> RouterConfig {
    RouterConfig {
        rules_path,
        debug: false,
        short_threshold: 5,
        custom_agents: true,
        strict_validation: true,
        cwd,
    }
}

fn hint_for(config: &RouterConfig, prompt: &str) -> Option<String> {
    let input = HookInput {
        prompt: prompt.to_string(),
        cwd: String::new(),
    };
    route(config, &input).hook_specific_output.additional_context
}

#[test]
fn test_agent_match_produces_delegation_hint() {
    let dir = TempDir::new().unwrap();
    let rules_path = write_global_rules(&dir, &sample_rules());
    let config = test_config(rules_path, dir.path().to_path_buf());

    let hint = hint_for(&config, "Implement the frontend component").unwrap();
    assert!(hint.contains("MUST delegate"));
    assert!(hint.contains("frontend-developer"));
    assert!(hint.contains("backend-developer"));
}

#[test]
fn test_agents_and_skills_hint_lists_both() {
    let dir = TempDir::new().unwrap();
    let rules_path = write_global_rules(&dir, &sample_rules());
    let config = test_config(rules_path, dir.path().to_path_buf());

    let hint = hint_for(&config, "Build the frontend and run jest tests").unwrap();
    assert!(hint.contains("frontend-developer"));
    assert!(hint.contains("jest"));
    assert!(hint.contains("Task prompt"));
}

#[test]
fn test_skill_only_match() {
    let dir = TempDir::new().unwrap();
    let rules_path = write_global_rules(&dir, &sample_rules());
    let config = test_config(rules_path, dir.path().to_path_buf());

    let hint = hint_for(&config, "Deploy this to vercel for me").unwrap();
    assert!(hint.contains("vercel"));
    assert!(hint.contains("skill"));
    assert!(!hint.contains("frontend-developer"));
}

#[test]
fn test_short_prompt_without_match() {
    let dir = TempDir::new().unwrap();
    let rules_path = write_global_rules(&dir, &sample_rules());
    let config = test_config(rules_path, dir.path().to_path_buf());

    let hint = hint_for(&config, "thanks").unwrap();
    assert!(hint.contains("not an implementer"));
}

#[test]
fn test_long_prompt_without_match() {
    let dir = TempDir::new().unwrap();
    let rules_path = write_global_rules(&dir, &sample_rules());
    let config = test_config(rules_path, dir.path().to_path_buf());

    let hint = hint_for(&config, "Random text that matches nothing in particular here").unwrap();
    assert!(hint.contains("orchestrator"));
    assert!(!hint.contains("not an implementer"));
}

#[test]
fn test_word_boundary_does_not_match_substrings() {
    let dir = TempDir::new().unwrap();
    let rules_path = write_global_rules(&dir, &sample_rules());
    let config = test_config(rules_path, dir.path().to_path_buf());

    // "implementation" must not hit the "implement" trigger; three words
    // below the threshold means the short no-match template.
    let hint = hint_for(&config, "The implementation details").unwrap();
    assert!(hint.contains("not an implementer"));
    assert!(!hint.contains("frontend-developer"));
}

#[test]
fn test_matching_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let rules_path = write_global_rules(&dir, &sample_rules());
    let config = test_config(rules_path, dir.path().to_path_buf());

    let upper = hint_for(&config, "IMPLEMENT the feature").unwrap();
    let lower = hint_for(&config, "implement the feature").unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn test_project_triggers_select_mandatory_wording() {
    let dir = TempDir::new().unwrap();
    let rules_path = write_global_rules(&dir, &sample_rules());
    write_project_rules(
        dir.path(),
        &serde_json::json!({"triggers": {"development": ["nextjs", "react"]}}),
    );
    let config = test_config(rules_path, dir.path().to_path_buf());

    let hint = hint_for(&config, "Wire up the nextjs page for checkout").unwrap();
    assert!(hint.contains("MANDATORY"));
    assert!(hint.contains("frontend-developer"));
    assert!(hint.contains("[PROJECT-SPECIFIC]"));
}

#[test]
fn test_skill_mappings_inject_keyword_triggers() {
    let dir = TempDir::new().unwrap();
    let rules_path = write_global_rules(&dir, &sample_rules());
    write_project_rules(
        dir.path(),
        &serde_json::json!({"skill_mappings": {"storybook": ["jest"]}}),
    );
    let config = test_config(rules_path, dir.path().to_path_buf());

    let hint = hint_for(&config, "Fix the broken storybook stories please").unwrap();
    assert!(hint.contains("MANDATORY"));
    assert!(hint.contains("jest [PROJECT]"));
}

#[test]
fn test_custom_agents_join_the_catch_all_category() {
    let dir = TempDir::new().unwrap();
    let rules_path = write_global_rules(&dir, &sample_rules());
    write_project_rules(
        dir.path(),
        &serde_json::json!({
            "custom_agents": {
                "db-migrator": {
                    "description": "Run schema migrations",
                    "tools": ["Bash"],
                    "triggers": ["migrate", "migration"]
                }
            }
        }),
    );
    let config = test_config(rules_path, dir.path().to_path_buf());

    let hint = hint_for(&config, "Migrate the orders table schema").unwrap();
    assert!(hint.contains("db-migrator"));
    assert!(hint.contains("[PROJECT-SPECIFIC]"));
    assert!(hint.contains("MANDATORY"));
}

#[test]
fn test_custom_agents_disabled_by_config() {
    let dir = TempDir::new().unwrap();
    let rules_path = write_global_rules(&dir, &sample_rules());
    write_project_rules(
        dir.path(),
        &serde_json::json!({
            "custom_agents": {
                "db-migrator": {"description": "Run schema migrations", "triggers": ["migrate"]}
            }
        }),
    );
    let mut config = test_config(rules_path, dir.path().to_path_buf());
    config.custom_agents = false;

    let hint = hint_for(&config, "Migrate the orders table schema").unwrap();
    assert!(!hint.contains("db-migrator"));
}

#[test]
fn test_missing_global_rules_yields_neutral_response() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path().join("absent.json"), dir.path().to_path_buf());

    assert!(hint_for(&config, "Implement the frontend component").is_none());
}

#[test]
fn test_invalid_global_rules_yield_neutral_response() {
    let dir = TempDir::new().unwrap();
    let rules_path = write_global_rules(&dir, &serde_json::json!({"skills": {}}));
    let config = test_config(rules_path, dir.path().to_path_buf());

    assert!(hint_for(&config, "Implement the frontend component").is_none());
}

#[test]
fn test_strict_validation_can_be_disabled() {
    let dir = TempDir::new().unwrap();
    // Parseable but structurally incomplete: no skills/injection_templates.
    let rules_path = write_global_rules(
        &dir,
        &serde_json::json!({
            "agent_categories": {
                "development": {
                    "triggers": ["implement"],
                    "agents": [{"name": "frontend-developer", "purpose": "UI", "tools": []}]
                }
            }
        }),
    );
    let mut config = test_config(rules_path, dir.path().to_path_buf());
    config.strict_validation = false;

    let hint = hint_for(&config, "Implement the login form now").unwrap();
    assert!(hint.contains("frontend-developer"));
}

#[test]
fn test_empty_prompt_uses_short_no_match_hint() {
    let dir = TempDir::new().unwrap();
    let rules_path = write_global_rules(&dir, &sample_rules());
    let config = test_config(rules_path, dir.path().to_path_buf());

    let hint = hint_for(&config, "").unwrap();
    assert!(hint.contains("not an implementer"));
}

#[test]
fn test_empty_prompt_without_rules_is_neutral() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path().join("absent.json"), dir.path().to_path_buf());

    assert!(hint_for(&config, "").is_none());
}

#[test]
fn test_project_rules_absence_keeps_global_behavior() {
    let dir = TempDir::new().unwrap();
    let rules_path = write_global_rules(&dir, &sample_rules());
    let config = test_config(rules_path, dir.path().to_path_buf());

    let hint = hint_for(&config, "Implement the frontend component").unwrap();
    assert!(hint.contains("MUST delegate"));
    assert!(!hint.contains("MANDATORY"));
    assert!(!hint.contains("[PROJECT"));
}

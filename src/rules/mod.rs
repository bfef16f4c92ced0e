pub mod loader;
pub mod merge;
pub mod types;
pub mod validate;

pub use loader::{load_global_rules, load_project_rules, load_rules_file};
pub use merge::{merge_rules, MergedRules, CATCH_ALL_CATEGORY};
pub use types::{AgentCategory, AgentDescriptor, InjectionTemplate, ProjectRules, RuleSet, SkillRule};
pub use validate::{validate_document, ValidationReport};

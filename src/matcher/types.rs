use crate::rules::AgentDescriptor;

/// Result of matching one prompt against the merged rule set. Built,
/// consumed, and discarded within a single invocation.
#[derive(Debug, Default)]
pub struct MatchResult {
    /// Matched category names, strongest first.
    pub matched_categories: Vec<String>,
    /// Candidate agents, deduplicated by name and capped.
    pub matched_agents: Vec<AgentDescriptor>,
    /// Matched skill names, strongest first, capped.
    pub matched_skills: Vec<String>,
    /// Total trigger/pattern weight across the retained matches.
    pub match_count: usize,
    /// Whitespace-delimited word count of the raw prompt.
    pub word_count: usize,
    /// Project-sourced agent names inside matched categories.
    pub project_matched_agents: Vec<String>,
    /// Project-sourced skill names among the matched skills.
    pub project_matched_skills: Vec<String>,
    pub has_project_matches: bool,
}

impl MatchResult {
    pub fn has_agents(&self) -> bool {
        !self.matched_agents.is_empty()
    }

    pub fn has_skills(&self) -> bool {
        !self.matched_skills.is_empty()
    }

    pub fn is_project_agent(&self, name: &str) -> bool {
        self.project_matched_agents.iter().any(|n| n == name)
    }

    pub fn is_project_skill(&self, name: &str) -> bool {
        self.project_matched_skills.iter().any(|n| n == name)
    }
}

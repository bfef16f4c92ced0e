/// The five mutually exclusive routing scenarios. Every prompt maps to
/// exactly one; the hint builder matches exhaustively on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    ShortNoMatch,
    AgentsOnly,
    AgentsAndSkills,
    SkillsOnly,
    LongNoMatch,
}

impl Scenario {
    /// Pure decision table over the match outcome and prompt length.
    pub fn determine(has_agents: bool, has_skills: bool, is_short: bool) -> Self {
        match (has_agents, has_skills) {
            (true, true) => Self::AgentsAndSkills,
            (true, false) => Self::AgentsOnly,
            (false, true) => Self::SkillsOnly,
            (false, false) if is_short => Self::ShortNoMatch,
            (false, false) => Self::LongNoMatch,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShortNoMatch => "short_no_match",
            Self::AgentsOnly => "agents_only",
            Self::AgentsAndSkills => "agents_and_skills",
            Self::SkillsOnly => "skills_only",
            Self::LongNoMatch => "long_no_match",
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

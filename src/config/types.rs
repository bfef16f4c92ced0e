use std::path::{Path, PathBuf};

pub const DEFAULT_SHORT_THRESHOLD: usize = 5;

/// Fixed location of project overrides, relative to the hook-supplied cwd.
pub const PROJECT_RULES_PATH: &str = ".claude/router-rules.json";

/// Router configuration, read once per invocation from the environment and
/// threaded explicitly through the pipeline.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Path to the global rules document.
    pub rules_path: PathBuf,
    /// Verbose diagnostics on stderr.
    pub debug: bool,
    /// Word-count threshold below which a prompt counts as short.
    pub short_threshold: usize,
    /// Merge project-defined custom agents into the catch-all category.
    pub custom_agents: bool,
    /// Structurally validate the global rules document before use.
    pub strict_validation: bool,
    /// Fallback working directory when the hook input carries no cwd.
    pub cwd: PathBuf,
}

impl RouterConfig {
    pub fn from_env() -> Self {
        let rules_path = std::env::var_os("ROUTER_RULES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_rules_path);

        Self {
            rules_path,
            debug: parse_flag(std::env::var("ROUTER_DEBUG").ok().as_deref(), false),
            short_threshold: parse_threshold(std::env::var("ROUTER_SHORT_THRESHOLD").ok().as_deref()),
            custom_agents: parse_flag(std::env::var("ROUTER_CUSTOM_AGENTS").ok().as_deref(), true),
            strict_validation: parse_flag(std::env::var("ROUTER_STRICT_VALIDATION").ok().as_deref(), true),
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

/// Default rules location relative to the installed binary.
fn default_rules_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    exe_dir.join("..").join("lib").join("router-rules.json")
}

fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(v) => matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"),
        None => default,
    }
}

fn parse_threshold(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_SHORT_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_truthy_values() {
        assert!(parse_flag(Some("1"), false));
        assert!(parse_flag(Some("true"), false));
        assert!(parse_flag(Some("TRUE"), false));
        assert!(parse_flag(Some("yes"), false));
    }

    #[test]
    fn test_parse_flag_falsy_values() {
        assert!(!parse_flag(Some("0"), true));
        assert!(!parse_flag(Some("false"), true));
        assert!(!parse_flag(Some("no"), true));
        assert!(!parse_flag(Some("garbage"), true));
    }

    #[test]
    fn test_parse_flag_defaults_when_unset() {
        assert!(!parse_flag(None, false));
        assert!(parse_flag(None, true));
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold(Some("10")), 10);
        assert_eq!(parse_threshold(Some(" 3 ")), 3);
        assert_eq!(parse_threshold(None), DEFAULT_SHORT_THRESHOLD);
    }

    #[test]
    fn test_parse_threshold_invalid_falls_back() {
        assert_eq!(parse_threshold(Some("not-a-number")), DEFAULT_SHORT_THRESHOLD);
        assert_eq!(parse_threshold(Some("-2")), DEFAULT_SHORT_THRESHOLD);
    }
}

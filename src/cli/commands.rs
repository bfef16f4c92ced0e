use clap::{Args, Parser, Subcommand};

fn long_version() -> &'static str {
    use std::sync::LazyLock;
    static LONG_VERSION: LazyLock<String> = LazyLock::new(|| match option_env!("GIT_HASH") {
        Some(hash) => format!("{} ({}, built {})", env!("CARGO_PKG_VERSION"), hash, env!("BUILD_TIMESTAMP")),
        None => format!("{} (built {})", env!("CARGO_PKG_VERSION"), env!("BUILD_TIMESTAMP")),
    });
    &LONG_VERSION
}

#[derive(Parser)]
#[command(
    name = "prompt-router",
    version,
    long_version = long_version(),
    about = "Rule-based prompt routing hook for agent orchestration"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the UserPromptSubmit hook (JSON on stdin, JSON on stdout)
    Hook(HookArgs),
    /// Route a prompt given on the command line and print the hint
    Route(RouteArgs),
    /// Validate a routing rules file
    Validate(ValidateArgs),
}

#[derive(Args, Clone, Default)]
pub struct HookArgs {
    /// Rules file (overrides ROUTER_RULES_PATH and the built-in default)
    #[arg(long)]
    pub rules: Option<String>,
}

#[derive(Args, Clone)]
pub struct RouteArgs {
    /// Prompt text to classify
    #[arg(short, long)]
    pub prompt: String,

    /// Working directory for project-rule lookup
    #[arg(long)]
    pub cwd: Option<String>,

    /// Rules file (overrides ROUTER_RULES_PATH and the built-in default)
    #[arg(long)]
    pub rules: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Rules file to validate
    pub rules: String,
}

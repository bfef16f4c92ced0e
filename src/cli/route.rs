use crate::config::RouterConfig;
use crate::errors::RouterError;
use crate::hook::HookInput;
use super::commands::RouteArgs;

/// Dry-run the routing pipeline on an argument-supplied prompt and print
/// the hint that the hook would inject.
pub fn handle_route(args: RouteArgs, mut config: RouterConfig) -> Result<(), RouterError> {
    if let Some(rules) = args.rules {
        config.rules_path = rules.into();
    }
    if let Some(cwd) = args.cwd {
        config.cwd = cwd.into();
    }

    let input = HookInput {
        prompt: args.prompt,
        cwd: String::new(),
    };
    let output = crate::hook::route(&config, &input);
    match output.hook_specific_output.additional_context {
        Some(hint) => println!("{hint}"),
        None => println!("(no routing hint)"),
    }
    Ok(())
}

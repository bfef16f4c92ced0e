use crate::config::RouterConfig;
use crate::errors::RouterError;
use super::commands::HookArgs;

/// The hook entry point. By contract it never fails the caller: every
/// internal problem degrades to a neutral JSON response on stdout.
pub fn handle_hook(args: HookArgs, mut config: RouterConfig) -> Result<(), RouterError> {
    if let Some(rules) = args.rules {
        config.rules_path = rules.into();
    }
    crate::hook::run(&config);
    Ok(())
}

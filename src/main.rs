use clap::Parser;
use tracing_subscriber::EnvFilter;

use prompt_router::cli::{self, Cli, Commands};
use prompt_router::config::RouterConfig;
use prompt_router::errors::RouterError;

fn main() {
    let cli = Cli::parse();
    let config = RouterConfig::from_env();

    let log_level = match (cli.verbose, config.debug) {
        (0, false) => "info",
        (0, true) | (1, _) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // stdout carries the hook response; all diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Hook(args) => cli::hook::handle_hook(args, config),
        Commands::Route(args) => cli::route::handle_route(args, config),
        Commands::Validate(args) => cli::validate::handle_validate(args),
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                RouterError::Config(_) | RouterError::Rules(_) => 2,
                RouterError::Io(_) => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

pub mod commands;
pub mod hook;
pub mod route;
pub mod validate;

pub use commands::{Cli, Commands};

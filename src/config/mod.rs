pub mod types;

pub use types::{RouterConfig, DEFAULT_SHORT_THRESHOLD, PROJECT_RULES_PATH};

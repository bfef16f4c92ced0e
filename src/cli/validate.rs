use std::path::Path;

use crate::errors::RouterError;
use crate::rules::validate_document;
use super::commands::ValidateArgs;

/// Strict structural validation of a rules file, reporting every violation.
pub fn handle_validate(args: ValidateArgs) -> Result<(), RouterError> {
    let content = std::fs::read_to_string(Path::new(&args.rules))?;
    let doc: serde_json::Value = serde_json::from_str(&content)?;

    let report = validate_document(&doc);
    if report.is_valid() {
        println!("Rules are valid: {}", args.rules);
        return Ok(());
    }

    for error in &report.errors {
        eprintln!("  - {error}");
    }
    Err(RouterError::Rules(format!(
        "{} violation(s) in {}",
        report.errors.len(),
        args.rules
    )))
}

use serde_json::Value;

const REQUIRED_SECTIONS: [&str; 3] = ["agent_categories", "skills", "injection_templates"];

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Structural validation of a global rules document. Collects every
/// violation instead of stopping at the first, so rule authors get one
/// actionable report.
pub fn validate_document(doc: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    let root = match doc.as_object() {
        Some(root) => root,
        None => {
            report.errors.push("rules document must be a JSON object".to_string());
            return report;
        }
    };

    for key in REQUIRED_SECTIONS {
        match root.get(key) {
            None => report.errors.push(format!("missing required section '{key}'")),
            Some(value) if !value.is_object() => {
                report.errors.push(format!("section '{key}' must be a mapping"));
            }
            Some(_) => {}
        }
    }

    if let Some(categories) = root.get("agent_categories").and_then(Value::as_object) {
        for (name, data) in categories {
            let Some(category) = data.as_object() else {
                report.errors.push(format!("agent category '{name}' must be a mapping"));
                continue;
            };
            if !category.get("triggers").is_some_and(Value::is_array) {
                report
                    .errors
                    .push(format!("agent category '{name}' must have a 'triggers' sequence"));
            }
            if !category.get("agents").is_some_and(Value::is_array) {
                report
                    .errors
                    .push(format!("agent category '{name}' must have an 'agents' sequence"));
            }
        }
    }

    if let Some(skills) = root.get("skills").and_then(Value::as_object) {
        for (name, data) in skills {
            let Some(skill) = data.as_object() else {
                report.errors.push(format!("skill '{name}' must be a mapping"));
                continue;
            };
            if !skill.get("triggers").is_some_and(Value::is_array) {
                report
                    .errors
                    .push(format!("skill '{name}' must have a 'triggers' sequence"));
            }
        }
    }

    report
}

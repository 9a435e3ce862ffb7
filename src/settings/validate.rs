use serde_json::{Map, Value};

/// Result of structurally checking a settings document. Collects every
/// violation instead of stopping at the first so a caller can report all of
/// them at once.
#[derive(Debug, Default)]
pub struct ValidationOutcome {
    pub errors: Vec<String>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check the shape of the hooks section: an object of event name to array of
/// groups, each group an object carrying a "hooks" array. Command contents
/// are the producing strategy's responsibility and are not inspected here.
pub fn validate_document(document: &Map<String, Value>) -> ValidationOutcome {
    let mut errors = Vec::new();

    if let Some(hooks) = document.get("hooks") {
        match hooks.as_object() {
            None => errors.push(format!("\"hooks\" must be an object, found: {}", hooks)),
            Some(events) => {
                for (event, groups) in events {
                    validate_event(event, groups, &mut errors);
                }
            }
        }
    }

    ValidationOutcome { errors }
}

fn validate_event(event: &str, groups: &Value, errors: &mut Vec<String>) {
    let groups = match groups.as_array() {
        Some(groups) => groups,
        None => {
            errors.push(format!(
                "hooks for \"{}\" must be an array, found: {}",
                event, groups
            ));
            return;
        }
    };

    for (index, group) in groups.iter().enumerate() {
        let group = match group.as_object() {
            Some(group) => group,
            None => {
                errors.push(format!(
                    "group {} for \"{}\" must be an object, found: {}",
                    index, event, group
                ));
                continue;
            }
        };
        match group.get("hooks") {
            None => errors.push(format!(
                "group {} for \"{}\" is missing its \"hooks\" array",
                index, event
            )),
            Some(entries) if !entries.is_array() => errors.push(format!(
                "\"hooks\" in group {} for \"{}\" must be an array, found: {}",
                index, event, entries
            )),
            Some(_) => {}
        }
    }
}

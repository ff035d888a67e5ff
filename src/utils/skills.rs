use serde_json::Value as JsonValue;

/// Normalizes the persisted skills column into an ordered list of strings.
///
/// The stored shape has drifted over time: sometimes a genuine JSON array,
/// sometimes an array holding a single JSON-encoded string (`["[\"a\",\"b\"]"]`),
/// sometimes a bare string that is itself JSON, and in the oldest rows a
/// comma-joined string. This never fails; anything unrecognizable degrades to
/// an empty list. Applying it to its own output is a no-op.
pub fn normalize_skills(raw: Option<&JsonValue>) -> Vec<String> {
    let Some(value) = raw else {
        return Vec::new();
    };

    match value {
        JsonValue::Array(items) => {
            // A singleton string element may be a JSON-encoded list smuggled
            // in by an older writer.
            if items.len() == 1 {
                if let JsonValue::String(s) = &items[0] {
                    if let Ok(JsonValue::Array(inner)) = serde_json::from_str::<JsonValue>(s) {
                        return string_items(&inner);
                    }
                }
            }
            string_items(items)
        }
        JsonValue::String(s) => {
            if let Ok(JsonValue::Array(inner)) = serde_json::from_str::<JsonValue>(s) {
                return string_items(&inner);
            }
            if s.trim().is_empty() {
                return Vec::new();
            }
            // Legacy comma-joined representation.
            s.split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Canonical persisted form: a plain JSON array of strings.
pub fn to_canonical(skills: &[String]) -> JsonValue {
    JsonValue::Array(
        skills
            .iter()
            .map(|s| JsonValue::String(s.clone()))
            .collect(),
    )
}

fn string_items(items: &[JsonValue]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.as_str().map(|s| s.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_list_passes_through() {
        let raw = json!(["python", "go"]);
        assert_eq!(normalize_skills(Some(&raw)), vec!["python", "go"]);
    }

    #[test]
    fn nested_json_string_is_unwrapped() {
        let raw = json!(["[\"python\",\"go\"]"]);
        assert_eq!(normalize_skills(Some(&raw)), vec!["python", "go"]);
    }

    #[test]
    fn bare_json_string_is_decoded() {
        let raw = json!("[\"rust\",\"sql\"]");
        assert_eq!(normalize_skills(Some(&raw)), vec!["rust", "sql"]);
    }

    #[test]
    fn legacy_comma_joined_string_is_split() {
        let raw = json!("rust, sql,  docker");
        assert_eq!(normalize_skills(Some(&raw)), vec!["rust", "sql", "docker"]);
    }

    #[test]
    fn absent_and_malformed_degrade_to_empty() {
        assert!(normalize_skills(None).is_empty());
        assert!(normalize_skills(Some(&json!(null))).is_empty());
        assert!(normalize_skills(Some(&json!(42))).is_empty());
        assert!(normalize_skills(Some(&json!({"skills": ["x"]}))).is_empty());
        assert!(normalize_skills(Some(&json!(""))).is_empty());
    }

    #[test]
    fn single_genuine_skill_is_not_mistaken_for_json() {
        let raw = json!(["python"]);
        assert_eq!(normalize_skills(Some(&raw)), vec!["python"]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let drifted = json!(["[\"python\",\"go\"]"]);
        let once = normalize_skills(Some(&drifted));
        let canonical = to_canonical(&once);
        let twice = normalize_skills(Some(&canonical));
        assert_eq!(once, twice);
    }

    #[test]
    fn non_string_array_elements_are_dropped() {
        let raw = json!(["python", 3, null, "go"]);
        assert_eq!(normalize_skills(Some(&raw)), vec!["python", "go"]);
    }
}

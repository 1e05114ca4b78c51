pub mod values;

// Export the default values
pub use values::*;

use serde_json::Value;

/// Recursively merge `source` into `target`.
///
/// Mappings present on both sides are merged key by key; any other value in
/// `source` replaces the one in `target`.
pub fn merge_values(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, value) in source_map {
                let nested = value.is_object() && target_map.get(key).map_or(false, Value::is_object);
                match target_map.get_mut(key) {
                    Some(existing) if nested => merge_values(existing, value),
                    _ => {
                        target_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}

/// Merge a sequence of documents left to right into a fresh value
pub fn merge_all<'a, I>(documents: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut result = Value::Object(serde_json::Map::new());
    for document in documents {
        merge_values(&mut result, document);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_nested_mappings() {
        let merged = merge_all([
            &default_theme_options(),
            &json!({ "font": { "text": "Inter" }, "site_url": "https://docs.example.com" }),
        ]);

        assert_eq!(merged["font"]["text"], "Inter");
        assert_eq!(merged["font"]["code"], "Roboto Mono");
        assert_eq!(merged["site_url"], "https://docs.example.com");
        assert_eq!(merged["globaltoc_depth"], -1);
    }

    #[test]
    fn test_later_scalar_replaces_mapping() {
        let merged = merge_all([&json!({ "plugins": { "search": {} } }), &json!({ "plugins": null })]);
        assert_eq!(merged["plugins"], Value::Null);
    }

    #[test]
    fn test_merge_into_non_object() {
        let mut target = json!(3);
        merge_values(&mut target, &json!({ "a": 1 }));
        assert_eq!(target, json!({ "a": 1 }));
    }
}

//! Payload key normalization

use serde_json::{Map, Value};

/// Rewrite every key in a JSON tree from camelCase to underscore_case
///
/// The service expects underscore-cased parameter names, so `revId` becomes
/// `rev_id` at every depth, including inside arrays of objects. Non-object
/// leaves pass through unchanged. Returns a new tree; the input is not
/// modified.
pub fn keys_to_underscore(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, inner) in map {
                out.insert(underscore_key(key), keys_to_underscore(inner));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(keys_to_underscore).collect()),
        leaf => leaf.clone(),
    }
}

/// Insert `_` before each ASCII uppercase letter and lowercase the result
fn underscore_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_rewrites_nested_keys() {
        let input = json!({
            "revId": 7,
            "jobDetails": {
                "sourceLang": "en",
                "targetLang": "ja"
            }
        });

        assert_json_eq!(
            keys_to_underscore(&input),
            json!({
                "rev_id": 7,
                "job_details": {
                    "source_lang": "en",
                    "target_lang": "ja"
                }
            })
        );
    }

    #[test]
    fn test_recurses_into_arrays() {
        let input = json!({ "jobs": [{ "bodySrc": "hello" }, { "bodySrc": "bye" }] });

        assert_json_eq!(
            keys_to_underscore(&input),
            json!({ "jobs": [{ "body_src": "hello" }, { "body_src": "bye" }] })
        );
    }

    #[test]
    fn test_scalar_leaves_untouched() {
        for leaf in [json!(42), json!("Text"), json!(true), json!(null), json!([1, 2, 3])] {
            assert_eq!(keys_to_underscore(&leaf), leaf);
        }
    }

    #[test]
    fn test_idempotent() {
        let input = json!({ "revId": 7, "nested": { "autoApprove": true } });
        let once = keys_to_underscore(&input);
        let twice = keys_to_underscore(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_not_mutated() {
        let input = json!({ "revId": 7 });
        let _ = keys_to_underscore(&input);
        assert_json_eq!(input, json!({ "revId": 7 }));
    }
}

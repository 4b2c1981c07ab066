// crates/flatten_square_elements/src/lib.rs

use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Flattens the `"square_elements"` mapping of the element data document
/// into one ordered token list.
///
/// Category names are discarded; the value arrays are concatenated in
/// document order. Only non-empty string entries are kept: numbers,
/// booleans, nulls, nested containers and empty strings are silently
/// dropped. An empty result is valid.
///
/// # Errors
///
/// Returns an error if the `"square_elements"` key is missing or its
/// value is not an object.
pub fn flatten_square_elements(data: &Value) -> Result<Vec<String>> {
    let elements = data
        .get("square_elements")
        .context("Missing \"square_elements\" key in element data")?;
    let categories = match elements.as_object() {
        Some(map) => map,
        None => bail!("\"square_elements\" is not an object"),
    };

    let mut tokens = Vec::new();
    for candidates in categories.values() {
        // Category values are expected to be arrays; anything else is skipped.
        if let Some(entries) = candidates.as_array() {
            for entry in entries {
                if let Some(token) = entry.as_str() {
                    if !token.is_empty() {
                        tokens.push(token.to_string());
                    }
                }
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::flatten_square_elements;
    use serde_json::json;

    #[test]
    fn test_flatten_keeps_order_and_drops_non_strings() {
        // The empty string and the integer must be filtered out.
        let data = json!({"square_elements": {"a": ["x", "", "y", 3], "b": ["z"]}});
        let tokens = flatten_square_elements(&data).unwrap();
        assert_eq!(tokens, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_flatten_empty_mapping() {
        let data = json!({"square_elements": {}});
        let tokens = flatten_square_elements(&data).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_flatten_missing_key() {
        let data = json!({"other": {}});
        let result = flatten_square_elements(&data);
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("square_elements"));
    }

    #[test]
    fn test_flatten_non_object_value() {
        let data = json!({"square_elements": ["x", "y"]});
        let result = flatten_square_elements(&data);
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("not an object"));
    }

    #[test]
    fn test_flatten_skips_non_array_categories() {
        let data = json!({"square_elements": {"a": "not-a-list", "b": ["kept"]}});
        let tokens = flatten_square_elements(&data).unwrap();
        assert_eq!(tokens, vec!["kept"]);
    }

    #[test]
    fn test_flatten_preserves_document_order_across_categories() {
        let data = json!({"square_elements": {
            "later_alphabetically_first": ["one", "two"],
            "a_category": ["three"]
        }});
        let tokens = flatten_square_elements(&data).unwrap();
        // Document order, not alphabetical key order.
        assert_eq!(tokens, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_flatten_drops_null_bool_and_nested_values() {
        let data = json!({"square_elements": {"mixed": ["a", null, true, ["nested"], {"k": "v"}, "b"]}});
        let tokens = flatten_square_elements(&data).unwrap();
        assert_eq!(tokens, vec!["a", "b"]);
    }
}

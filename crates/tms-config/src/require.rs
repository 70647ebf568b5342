//! Nested-path presence validator
//!
//! Enforces "this specific settings path is mandatory for this call site"
//! without making the path mandatory globally in the schema. Mirrors the
//! schema's aggregate-all-errors policy: every missing path is collected
//! before failing once.

use serde::Serialize;
use serde_json::Value;
use tms_domain::error::{Error, Result};

/// Assert that every given dot-delimited path resolves to a present value
/// inside the settings tree.
///
/// A missing intermediate node short-circuits to "absent" rather than
/// raising a traversal error. Empty strings, zero, `false` and `null` all
/// count as absent (these are credential/URL checks). An empty path list
/// never fails.
pub fn require_paths<T: Serialize>(settings: &T, paths: &[&str]) -> Result<()> {
    let tree = serde_json::to_value(settings)?;

    let missing: Vec<&str> = paths
        .iter()
        .filter(|path| !is_present(resolve(&tree, path)))
        .copied()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "Missing required configuration: {}",
            missing.join(", ")
        )))
    }
}

fn resolve<'v>(tree: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.')
        .try_fold(tree, |current, key| current.get(key))
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_intermediate_node_is_absent_not_error() {
        let tree = json!({ "ai": {} });
        assert!(!is_present(resolve(&tree, "ai.openai.api_key")));
    }

    #[test]
    fn test_zero_and_false_count_as_absent() {
        let tree = json!({ "a": 0, "b": false, "c": "" });
        assert!(!is_present(resolve(&tree, "a")));
        assert!(!is_present(resolve(&tree, "b")));
        assert!(!is_present(resolve(&tree, "c")));
    }

    #[test]
    fn test_populated_values_are_present() {
        let tree = json!({ "a": 1, "b": true, "c": "x", "d": { "e": [] } });
        assert!(is_present(resolve(&tree, "a")));
        assert!(is_present(resolve(&tree, "b")));
        assert!(is_present(resolve(&tree, "c")));
        assert!(is_present(resolve(&tree, "d")));
        assert!(is_present(resolve(&tree, "d.e")));
    }
}

//! Shared test utilities for the wcagcheck workspace.

use serde_json::Value;
use std::path::PathBuf;

/// Replace run metadata that changes between runs so two envelopes can be compared.
///
/// `tool.version` is only touched on a root object shaped like a report envelope; the run
/// timestamps and `duration_ms` are replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "run", "verdict", "pages"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool.contains_key("version")
        {
            tool.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_run_recursive(&mut value);
    value
}

fn normalize_run_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "ended_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            if map.contains_key("duration_ms") {
                map.insert("duration_ms".to_string(), Value::Number(0.into()));
            }
            for val in map.values_mut() {
                normalize_run_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_run_recursive(val);
            }
        }
        _ => {}
    }
}

/// `tests/fixtures` at the workspace root, resolved from a crate's manifest directory.
pub fn fixtures_dir(manifest_dir: &str) -> PathBuf {
    let mut dir = PathBuf::from(manifest_dir);
    dir.pop();
    dir.pop();
    dir.join("tests").join("fixtures")
}

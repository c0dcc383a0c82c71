//! Assertions over JSON error bodies.

use serde_json::Value;

/// Assert that `body` is an error envelope with the given `kind`.
///
/// Panics with the full body on mismatch.
pub fn assert_error_kind(body: &Value, kind: &str) {
    assert_eq!(
        body["kind"].as_str(),
        Some(kind),
        "unexpected error body: {body}"
    );
    assert!(
        body["message"].is_string(),
        "error body without message: {body}"
    );
}

//! Error-to-text normalisation.
//!
//! Every failure that reaches the user is turned into a plain string here,
//! never an error object. Backend bodies come in several shapes (FastAPI
//! `detail` strings, validation arrays, `{message}` or `{error}`), all of
//! which collapse to one readable line.

use std::error::Error;

use serde_json::Value;

pub const GENERIC_ERROR: &str = "An unexpected error occurred";

/// Normalise an error payload of unknown shape into display text.
pub fn error_text(body: &Value) -> String {
    text_of(body)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| GENERIC_ERROR.to_string())
}

/// Normalise a raw response body, which may or may not be JSON.
pub fn error_text_from_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => error_text(&value),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => GENERIC_ERROR.to_string(),
    }
}

/// Join an error and its source chain into one line.
pub fn describe(err: &(dyn Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(e) = source {
        let text = e.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        source = e.source();
    }
    parts.join(": ")
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(text_of).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        Value::Object(map) => {
            if let Some(msg) = map.get("msg").and_then(Value::as_str) {
                return Some(with_location(msg, map.get("loc")));
            }
            ["detail", "message", "error", "errors"]
                .iter()
                .filter_map(|k| map.get(*k))
                .find_map(text_of)
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => None,
    }
}

/// FastAPI validation entries carry `loc: ["body", "field"]`; prefix the
/// message with the last location element.
fn with_location(msg: &str, loc: Option<&Value>) -> String {
    let field = loc
        .and_then(Value::as_array)
        .and_then(|parts| parts.last())
        .and_then(|last| match last {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
    match field {
        Some(field) if field != "body" => format!("{field}: {msg}"),
        _ => msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn detail_string() {
        assert_eq!(error_text(&json!({"detail": "Not found"})), "Not found");
    }

    #[test]
    fn validation_array() {
        let body = json!({"detail": [
            {"loc": ["body", "email"], "msg": "value is not a valid email", "type": "value_error"},
            {"loc": ["body"], "msg": "field required", "type": "missing"}
        ]});
        assert_eq!(
            error_text(&body),
            "email: value is not a valid email; field required"
        );
    }

    #[test]
    fn message_and_error_keys() {
        assert_eq!(error_text(&json!({"message": "Payment failed"})), "Payment failed");
        assert_eq!(error_text(&json!({"error": {"message": "nested"}})), "nested");
    }

    #[test]
    fn unknown_shapes_fall_back() {
        assert_eq!(error_text(&json!(null)), GENERIC_ERROR);
        assert_eq!(error_text(&json!({"code": 500})), GENERIC_ERROR);
        assert_eq!(error_text(&json!("")), GENERIC_ERROR);
    }

    #[test]
    fn raw_bodies() {
        assert_eq!(error_text_from_body("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_text_from_body(r#"{"detail":"nope"}"#), "nope");
        assert_eq!(error_text_from_body("  "), GENERIC_ERROR);
    }

    #[derive(Debug, thiserror::Error)]
    enum Chained {
        #[error("save failed")]
        Save(#[source] Box<Chained>),
        #[error("write failed")]
        Write(#[source] std::io::Error),
        #[error("disk full")]
        Echo(#[source] std::io::Error),
    }

    #[test]
    fn describe_walks_sources() {
        let err = Chained::Save(Box::new(Chained::Write(std::io::Error::other("disk full"))));
        assert_eq!(describe(&err), "save failed: write failed: disk full");
    }

    #[test]
    fn describe_skips_repeated_text() {
        let err = Chained::Echo(std::io::Error::other("disk full"));
        assert_eq!(describe(&err), "disk full");
    }
}

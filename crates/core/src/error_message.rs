//! Error-message extraction from backend response bodies.
//!
//! The two backends report failures in several shapes depending on the
//! framework that produced them. [`extract_error_message`] normalises all
//! of them into one human-readable string.

use serde_json::Value;

/// Plain-text bodies longer than this are treated as noise (HTML error
/// pages, stack traces) and replaced by the fallback.
const MAX_PLAIN_TEXT_LEN: usize = 300;

/// Extract a human-readable error message from a raw response body.
///
/// Recognised JSON shapes, in order of precedence:
///
/// | Shape                                   | Result              |
/// |-----------------------------------------|---------------------|
/// | `{"error": "msg"}`                      | `msg`               |
/// | `{"error": {"message": "msg"}}`         | `msg`               |
/// | `{"message": "msg"}`                    | `msg`               |
/// | `{"detail": "msg"}`                     | `msg`               |
/// | `{"detail": [{"msg": "a"}, {"msg": "b"}]}` | `a; b`           |
/// | `{"errors": ["a", {"message": "b"}]}`   | `a; b`              |
/// | `{"non_field_errors": ["a"]}`           | `a`                 |
/// | `{"name": ["required"]}`                | `name: required`    |
///
/// A short non-JSON body is returned trimmed. Anything else yields
/// `fallback`.
pub fn extract_error_message(body: &[u8], fallback: &str) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        return from_json(&value).unwrap_or_else(|| fallback.to_string());
    }

    match std::str::from_utf8(body) {
        Ok(text) => {
            let text = text.trim();
            if text.is_empty() || text.len() > MAX_PLAIN_TEXT_LEN || text.starts_with('<') {
                fallback.to_string()
            } else {
                text.to_string()
            }
        }
        Err(_) => fallback.to_string(),
    }
}

/// Extract a message from an already-parsed JSON body.
pub fn from_json(value: &Value) -> Option<String> {
    let obj = match value {
        Value::String(s) if !s.trim().is_empty() => return Some(s.trim().to_string()),
        Value::Object(obj) => obj,
        _ => return None,
    };

    if let Some(msg) = obj.get("error").and_then(message_of) {
        return Some(msg);
    }
    if let Some(msg) = obj.get("message").and_then(non_empty_str) {
        return Some(msg);
    }
    if let Some(msg) = obj.get("detail").and_then(message_of) {
        return Some(msg);
    }
    if let Some(msg) = obj.get("errors").and_then(message_of) {
        return Some(msg);
    }
    if let Some(msg) = obj.get("non_field_errors").and_then(message_of) {
        return Some(msg);
    }

    field_errors(obj)
}

/// A message from a string, a `{message|msg|detail}` object, or a list of
/// either (joined with `"; "`).
fn message_of(value: &Value) -> Option<String> {
    match value {
        Value::String(_) => non_empty_str(value),
        Value::Object(obj) => ["message", "msg", "detail", "error"]
            .iter()
            .find_map(|key| obj.get(*key).and_then(non_empty_str)),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(message_of).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}

fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Field-keyed validation errors, e.g. `{"email": ["already taken"]}`.
fn field_errors(obj: &serde_json::Map<String, Value>) -> Option<String> {
    let parts: Vec<String> = obj
        .iter()
        .filter_map(|(field, value)| match value {
            Value::Array(items) if !items.is_empty() => {
                let msgs: Vec<String> = items.iter().filter_map(message_of).collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(format!("{field}: {}", msgs.join(", ")))
                }
            }
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Request failed";

    fn extract(body: &str) -> String {
        extract_error_message(body.as_bytes(), FALLBACK)
    }

    #[test]
    fn error_string() {
        assert_eq!(extract(r#"{"error": "Order not found"}"#), "Order not found");
    }

    #[test]
    fn nested_error_object() {
        assert_eq!(
            extract(r#"{"error": {"code": 42, "message": "Station is inactive"}}"#),
            "Station is inactive"
        );
    }

    #[test]
    fn message_field() {
        assert_eq!(extract(r#"{"message": "Token expired"}"#), "Token expired");
    }

    #[test]
    fn detail_string() {
        assert_eq!(extract(r#"{"detail": "Not authenticated"}"#), "Not authenticated");
    }

    #[test]
    fn detail_list_is_joined() {
        let body = r#"{"detail": [{"loc": ["body", "title"], "msg": "field required"},
                                 {"loc": ["body", "genre"], "msg": "too long"}]}"#;
        assert_eq!(extract(body), "field required; too long");
    }

    #[test]
    fn errors_list_mixes_strings_and_objects() {
        assert_eq!(
            extract(r#"{"errors": ["first", {"message": "second"}]}"#),
            "first; second"
        );
    }

    #[test]
    fn non_field_errors() {
        assert_eq!(
            extract(r#"{"non_field_errors": ["Spots overlap"]}"#),
            "Spots overlap"
        );
    }

    #[test]
    fn field_keyed_errors() {
        assert_eq!(
            extract(r#"{"email": ["already taken", "invalid"]}"#),
            "email: already taken, invalid"
        );
    }

    #[test]
    fn error_takes_precedence_over_message() {
        assert_eq!(extract(r#"{"message": "b", "error": "a"}"#), "a");
    }

    #[test]
    fn empty_error_falls_through_to_message() {
        assert_eq!(extract(r#"{"error": "", "message": "real"}"#), "real");
    }

    #[test]
    fn bare_json_string() {
        assert_eq!(extract(r#""Bad gateway""#), "Bad gateway");
    }

    #[test]
    fn short_plain_text_is_used() {
        assert_eq!(extract("Service unavailable\n"), "Service unavailable");
    }

    #[test]
    fn html_page_uses_fallback() {
        assert_eq!(extract("<html><body>502</body></html>"), FALLBACK);
    }

    #[test]
    fn unrecognised_json_uses_fallback() {
        assert_eq!(extract(r#"{"status": 500}"#), FALLBACK);
    }

    #[test]
    fn empty_body_uses_fallback() {
        assert_eq!(extract(""), FALLBACK);
    }

    #[test]
    fn binary_body_uses_fallback() {
        assert_eq!(extract_error_message(&[0xff, 0xfe, 0x00], FALLBACK), FALLBACK);
    }
}

//! Flattening of API error payloads into per-field messages.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Message used when a failure carries no usable payload.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Key under which whole-form messages are stored.
pub const MESSAGE_KEY: &str = "message";

/// Field name to human-readable message, as shown next to auth forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Creates a map holding only a form-level message.
    ///
    /// # Arguments
    /// * `message` - The error message
    pub fn message(message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(MESSAGE_KEY.to_string(), message.into());
        Self(errors)
    }

    /// The fallback used when nothing better is available.
    pub fn generic() -> Self {
        Self::message(GENERIC_ERROR_MESSAGE)
    }

    /// Builds the map from an error response body.
    ///
    /// Objects are flattened one level: string values are kept, arrays of
    /// strings are joined with a space and nested objects (such as a
    /// validation `errors` block) contribute their own keys. A bare string
    /// becomes the form-level message. Anything else, including a missing
    /// body, yields [`FieldErrors::generic`].
    ///
    /// # Arguments
    /// * `body` - The decoded response body, if any
    pub fn from_body(body: Option<&Value>) -> Self {
        match body {
            Some(Value::Object(fields)) if !fields.is_empty() => {
                let mut errors = BTreeMap::new();
                for (key, value) in fields {
                    match value {
                        Value::Object(nested) => {
                            for (nested_key, nested_value) in nested {
                                errors.insert(nested_key.clone(), describe(nested_value));
                            }
                        }
                        other => {
                            errors.insert(key.clone(), describe(other));
                        }
                    }
                }
                Self(errors)
            }
            Some(Value::String(message)) if !message.is_empty() => Self::message(message.clone()),
            _ => Self::generic(),
        }
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of recorded fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(describe).collect::<Vec<_>>().join(" "),
        other => other.to_string(),
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generic_when_body_missing() {
        let errors = FieldErrors::from_body(None);
        assert_eq!(errors.get("message"), Some(GENERIC_ERROR_MESSAGE));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn generic_when_body_is_null_or_empty() {
        assert_eq!(FieldErrors::from_body(Some(&Value::Null)), FieldErrors::generic());
        assert_eq!(FieldErrors::from_body(Some(&json!({}))), FieldErrors::generic());
        assert_eq!(FieldErrors::from_body(Some(&json!(""))), FieldErrors::generic());
    }

    #[test]
    fn string_body_becomes_message() {
        let errors = FieldErrors::from_body(Some(&json!("Unauthorized")));
        assert_eq!(errors.get("message"), Some("Unauthorized"));
    }

    #[test]
    fn flat_object_is_kept() {
        let body = json!({ "error": "Invalid credentials" });
        let errors = FieldErrors::from_body(Some(&body));
        assert_eq!(errors.get("error"), Some("Invalid credentials"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn validation_block_is_flattened() {
        let body = json!({
            "message": "The given data was invalid.",
            "errors": {
                "email": ["The email has already been taken."],
                "password": ["Too short.", "Needs a digit."]
            }
        });

        let errors = FieldErrors::from_body(Some(&body));

        assert_eq!(errors.get("message"), Some("The given data was invalid."));
        assert_eq!(errors.get("email"), Some("The email has already been taken."));
        assert_eq!(errors.get("password"), Some("Too short. Needs a digit."));
        assert!(errors.get("errors").is_none());
    }

    #[test]
    fn scalars_are_stringified() {
        let errors = FieldErrors::from_body(Some(&json!({ "code": 401 })));
        assert_eq!(errors.get("code"), Some("401"));
    }

    #[test]
    fn display_joins_fields() {
        let errors = FieldErrors::from_body(Some(&json!({ "a": "x", "b": "y" })));
        assert_eq!(errors.to_string(), "a: x; b: y");
    }
}

// src/shared/validation.rs
//
// Field-level validation shared by the contact form and the admin forms.
// Errors are keyed by field name and keep only the first message per field.

use std::collections::BTreeMap;

use email_address::EmailAddress;
use reqwest::Url;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` unless the field already has one.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<String> = self.0.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        write!(f, "{}", joined.join(", "))
    }
}

/// Trimmed value, or a `"<Label> is required"` error when blank.
pub fn required(errors: &mut FieldErrors, field: &str, label: &str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, format!("{} is required", label));
    }
    value.to_string()
}

/// Trimmed value, `None` when blank.
pub fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn is_valid_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

/// Absolute URL with a scheme and host, e.g. `https://example.com`.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| url.has_host())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_first_message() {
        let mut errors = FieldErrors::new();
        errors.add("name", "Name is required");
        errors.add("name", "Name is too long");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn test_required_trims_and_reports_blank() {
        let mut errors = FieldErrors::new();

        assert_eq!(required(&mut errors, "title", "Title", "  Hello "), "Hello");
        assert!(errors.is_empty());

        required(&mut errors, "title", "Title", "   ");
        assert_eq!(errors.get("title"), Some("Title is required"));
    }

    #[test]
    fn test_optional_drops_blank() {
        assert_eq!(optional(Some("  ")), None);
        assert_eq!(optional(None), None);
        assert_eq!(optional(Some(" x ")).as_deref(), Some("x"));
    }

    #[test]
    fn test_url_and_email_checks() {
        assert!(is_valid_url("https://github.com/aryan"));
        assert!(!is_valid_url("github.com/aryan"));
        assert!(!is_valid_url("not a url"));

        assert!(is_valid_email("jane@example.com"));
        assert!(!is_valid_email("jane@"));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Invalid email");

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value["email"], "Invalid email");
    }
}

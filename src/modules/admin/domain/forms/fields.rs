// src/modules/admin/domain/forms/fields.rs
//
// Readers over a raw JSON form body. Missing and null inputs take the form's
// default ("" / false / 0) rather than failing.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::shared::validation::{self, FieldErrors};

pub type FormInput = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldInput {
    Text,
    Textarea,
    Email,
    Url,
    Date,
    Number,
    Checkbox,
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub input: FieldInput,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str, input: FieldInput) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            input,
            required: false,
            options: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = Some(options);
        self
    }
}

pub fn text(input: &FormInput, errors: &mut FieldErrors, key: &str) -> String {
    match input.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(_) => {
            errors.add(key, "Expected text");
            String::new()
        }
    }
}

pub fn required_text(
    input: &FormInput,
    errors: &mut FieldErrors,
    key: &str,
    label: &str,
) -> String {
    let raw = text(input, errors, key);
    validation::required(errors, key, label, &raw)
}

/// Blank becomes `None`.
pub fn optional_text(input: &FormInput, errors: &mut FieldErrors, key: &str) -> Option<String> {
    let raw = text(input, errors, key);
    validation::optional(Some(&raw))
}

pub fn flag(input: &FormInput, errors: &mut FieldErrors, key: &str) -> bool {
    flag_or(input, errors, key, false)
}

pub fn flag_or(input: &FormInput, errors: &mut FieldErrors, key: &str, default: bool) -> bool {
    match input.get(key) {
        None | Some(Value::Null) => default,
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            errors.add(key, "Expected true or false");
            default
        }
    }
}

/// Numbers and numeric strings are accepted; blank means 0.
pub fn sort_order(input: &FormInput, errors: &mut FieldErrors, key: &str) -> i32 {
    let parsed = match input.get(key) {
        None | Some(Value::Null) => return 0,
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => return 0,
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match parsed {
        Some(n) if n.is_finite() && n.fract() == 0.0 => {
            if n < i32::MIN as f64 || n > i32::MAX as f64 {
                errors.add(key, "Number is out of range");
                0
            } else {
                n as i32
            }
        }
        Some(n) if n.is_finite() => {
            errors.add(key, "Expected a whole number");
            0
        }
        _ => {
            errors.add(key, "Expected number");
            0
        }
    }
}

/// `"Rust, Actix ,  "` → `["Rust", "Actix"]`.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn check_url(errors: &mut FieldErrors, key: &str, value: &str) {
    if !validation::is_valid_url(value) {
        errors.add(key, "Invalid url");
    }
}

/// Empty is allowed; anything else must be a URL.
pub fn url_or_empty(input: &FormInput, errors: &mut FieldErrors, key: &str) -> Option<String> {
    let value = optional_text(input, errors, key)?;
    check_url(errors, key, &value);
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: Value) -> FormInput {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_text_defaults_and_type_errors() {
        let form = input(json!({ "a": "  hi ", "b": null, "c": 5 }));
        let mut errors = FieldErrors::new();

        assert_eq!(text(&form, &mut errors, "a"), "hi");
        assert_eq!(text(&form, &mut errors, "b"), "");
        assert_eq!(text(&form, &mut errors, "missing"), "");
        assert!(errors.is_empty());

        text(&form, &mut errors, "c");
        assert_eq!(errors.get("c"), Some("Expected text"));
    }

    #[test]
    fn test_sort_order_coercion() {
        let form = input(json!({
            "int": 3,
            "str": " 7 ",
            "blank": "",
            "float_whole": 2.0,
            "frac": "1.5",
            "word": "first",
            "flag": true,
            "huge": 1e12
        }));
        let mut errors = FieldErrors::new();

        assert_eq!(sort_order(&form, &mut errors, "int"), 3);
        assert_eq!(sort_order(&form, &mut errors, "str"), 7);
        assert_eq!(sort_order(&form, &mut errors, "blank"), 0);
        assert_eq!(sort_order(&form, &mut errors, "float_whole"), 2);
        assert_eq!(sort_order(&form, &mut errors, "missing"), 0);
        assert!(errors.is_empty());

        sort_order(&form, &mut errors, "frac");
        sort_order(&form, &mut errors, "word");
        sort_order(&form, &mut errors, "flag");
        sort_order(&form, &mut errors, "huge");
        assert_eq!(errors.get("frac"), Some("Expected a whole number"));
        assert_eq!(errors.get("word"), Some("Expected number"));
        assert_eq!(errors.get("flag"), Some("Expected number"));
        assert_eq!(errors.get("huge"), Some("Number is out of range"));
    }

    #[test]
    fn test_split_list_drops_empties() {
        assert_eq!(split_list("Rust, Actix ,  ,"), vec!["Rust", "Actix"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_url_or_empty() {
        let form = input(json!({ "ok": "https://x.dev", "blank": " ", "bad": "x.dev" }));
        let mut errors = FieldErrors::new();

        assert_eq!(url_or_empty(&form, &mut errors, "ok").as_deref(), Some("https://x.dev"));
        assert_eq!(url_or_empty(&form, &mut errors, "blank"), None);
        assert!(errors.is_empty());

        url_or_empty(&form, &mut errors, "bad");
        assert_eq!(errors.get("bad"), Some("Invalid url"));
    }

    #[test]
    fn test_flag_rejects_non_bool() {
        let form = input(json!({ "on": true, "odd": "yes" }));
        let mut errors = FieldErrors::new();

        assert!(flag(&form, &mut errors, "on"));
        assert!(!flag(&form, &mut errors, "missing"));
        assert!(flag_or(&form, &mut errors, "missing", true));

        flag(&form, &mut errors, "odd");
        assert_eq!(errors.get("odd"), Some("Expected true or false"));
    }
}

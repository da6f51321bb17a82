// src/modules/contact/domain/contact_message.rs

use serde::Serialize;

use crate::shared::validation::{self, FieldErrors};

/// A validated contact-form submission, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewContactMessage {
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
}

impl NewContactMessage {
    pub fn new(
        name: &str,
        email: &str,
        subject: Option<&str>,
        message: &str,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = validation::required(&mut errors, "name", "Name", name);
        let email = validation::required(&mut errors, "email", "Email", email);
        if !email.is_empty() && !validation::is_valid_email(&email) {
            errors.add("email", "Invalid email");
        }
        let message = validation::required(&mut errors, "message", "Message", message);

        errors.into_result(Self {
            name,
            email,
            subject: validation::optional(subject),
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_message_is_trimmed() {
        let msg = NewContactMessage::new(
            "  Jane ",
            " jane@example.com ",
            Some("  Hello "),
            " Let's talk ",
        )
        .unwrap();

        assert_eq!(msg.name(), "Jane");
        assert_eq!(msg.email(), "jane@example.com");
        assert_eq!(msg.subject(), Some("Hello"));
        assert_eq!(msg.message(), "Let's talk");
    }

    #[test]
    fn test_blank_subject_is_absent() {
        let msg = NewContactMessage::new("Jane", "jane@example.com", Some("   "), "Hi").unwrap();
        assert_eq!(msg.subject(), None);
    }

    #[test]
    fn test_required_fields_reported_together() {
        let errors = NewContactMessage::new("", " ", None, "").unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("message"), Some("Message is required"));
    }

    #[test]
    fn test_malformed_email_rejected() {
        let errors = NewContactMessage::new("Jane", "jane-at-example", None, "Hi").unwrap_err();
        assert_eq!(errors.get("email"), Some("Invalid email"));
    }
}

// src/modules/admin/domain/credentials.rs

use std::env;
use std::fmt;

/// The single admin account. There is no user table and no session; a match
/// only tells the client where to go next.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    email: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn from_env() -> Self {
        let email = env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL is not set in .env file");
        let password = env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD is not set in .env file");

        if email.is_empty() || password.is_empty() {
            panic!("ADMIN_EMAIL and ADMIN_PASSWORD must not be empty");
        }

        Self::new(email, password)
    }

    /// Both values must match exactly, as typed.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exactly() {
        let creds = AdminCredentials::new("admin@example.com", "s3cret");

        assert!(creds.matches("admin@example.com", "s3cret"));
        assert!(!creds.matches("admin@example.com", "S3CRET"));
        assert!(!creds.matches("other@example.com", "s3cret"));
    }

    #[test]
    fn test_email_case_and_whitespace_are_significant() {
        let creds = AdminCredentials::new("admin@example.com", "s3cret");

        assert!(!creds.matches("Admin@Example.com", "s3cret"));
        assert!(!creds.matches(" admin@example.com ", "s3cret"));
    }

    #[test]
    fn test_debug_hides_password() {
        let creds = AdminCredentials::new("admin@example.com", "s3cret");
        let debug = format!("{:?}", creds);

        assert!(debug.contains("admin@example.com"));
        assert!(!debug.contains("s3cret"));
    }
}

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const SENT_MESSAGE: &str = "Thank you — your message has been sent.";
pub const SENDING_MESSAGE: &str = "Sending…";

// local@domain.tld, nothing more
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    MissingFields,
    InvalidEmail,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingFields => write!(f, "Please fill out all fields."),
            ContactError::InvalidEmail => write!(f, "Please enter a valid email address."),
        }
    }
}

/// What the relay answers on `/api/contact`.
#[derive(Debug, Deserialize)]
pub struct RelayReply {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        ContactSubmission {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }
}

pub fn is_plausible_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

pub fn validate_submission(submission: &ContactSubmission) -> Result<(), ContactError> {
    if submission.name.is_empty() || submission.email.is_empty() || submission.message.is_empty() {
        return Err(ContactError::MissingFields);
    }
    if !is_plausible_email(&submission.email) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_every_field() {
        let submission = ContactSubmission::new("  Jane ", "\tjane@example.com\n", " Hello ");
        assert_eq!(submission, ContactSubmission {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello".to_string(),
        });
    }

    #[test]
    fn empty_or_blank_fields_are_missing() {
        for (name, email, message) in [
            ("", "jane@example.com", "Hello"),
            ("Jane", "  ", "Hello"),
            ("Jane", "jane@example.com", "\n"),
            ("", "", ""),
        ] {
            let submission = ContactSubmission::new(name, email, message);
            assert_eq!(validate_submission(&submission), Err(ContactError::MissingFields));
        }
    }

    #[test]
    fn email_needs_at_sign_and_dotted_domain() {
        for email in ["jane", "jane@example", "@example.com", "jane@@example.com", "jane doe@example.com"] {
            let submission = ContactSubmission::new("Jane", email, "Hello");
            assert_eq!(
                validate_submission(&submission),
                Err(ContactError::InvalidEmail),
                "{}",
                email
            );
        }
    }

    #[test]
    fn valid_submission_passes() {
        let submission = ContactSubmission::new("Jane", "jane@example.com", "Hello");
        assert_eq!(validate_submission(&submission), Ok(()));
        assert!(is_plausible_email("first.last@mail.example.com.au"));
    }

    #[test]
    fn errors_read_as_notices() {
        assert_eq!(ContactError::MissingFields.to_string(), "Please fill out all fields.");
        assert_eq!(ContactError::InvalidEmail.to_string(), "Please enter a valid email address.");
    }
}

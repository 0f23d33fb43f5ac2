use lettre::Address;
use serde::Deserialize;
use thiserror::Error;

/// Raw fields as posted by the contact form. Missing fields deserialize to
/// empty strings so they fail validation instead of the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields.")]
    MissingFields,
    #[error("Invalid email address.")]
    InvalidEmail,
}

/// A submission that passed validation. Text fields are trimmed and
/// HTML-escaped; `reply_to` is the parsed submitter address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
    pub reply_to: Address,
}

impl ValidContact {
    pub fn email_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }
}

pub fn validate(submission: ContactSubmission) -> Result<ValidContact, ValidationError> {
    let name = submission.name.trim();
    let email = submission.email.trim();
    let message = submission.message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let reply_to = parse_email(email).ok_or(ValidationError::InvalidEmail)?;

    Ok(ValidContact {
        name: escape_html(name),
        email: escape_html(email),
        message: escape_html(message),
        reply_to,
    })
}

/// RFC address syntax plus a dotted domain, which rules out bare hosts
/// like `jane@localhost`.
fn parse_email(email: &str) -> Option<Address> {
    let address = email.parse::<Address>().ok()?;
    let domain = address.domain();
    let dotted = domain.contains('.') && domain.split('.').all(|label| !label.is_empty());
    dotted.then_some(address)
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn any_empty_field_is_missing() {
        let cases = [
            ("", "jane@example.com", "Hello"),
            ("Jane", "", "Hello"),
            ("Jane", "jane@example.com", ""),
            ("   ", "jane@example.com", "Hello"),
            ("Jane", "jane@example.com", "\n\t "),
        ];
        for (name, email, message) in cases {
            assert_eq!(
                validate(submission(name, email, message)),
                Err(ValidationError::MissingFields),
                "{:?}",
                (name, email, message)
            );
        }
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["jane", "jane@", "@example.com", "jane@example", "jane@example.", "jane@.com", "ja ne@example.com"] {
            assert_eq!(
                validate(submission("Jane", email, "Hello")),
                Err(ValidationError::InvalidEmail),
                "{}",
                email
            );
        }
    }

    #[test]
    fn valid_submission_is_trimmed() {
        let contact = validate(submission("  Jane ", " jane@example.com ", "Hello\n")).unwrap();
        assert_eq!(contact.name, "Jane");
        assert_eq!(contact.email, "jane@example.com");
        assert_eq!(contact.message, "Hello");
        assert_eq!(contact.reply_to.to_string(), "jane@example.com");
    }

    #[test]
    fn fields_are_escaped_for_display() {
        let contact = validate(submission("<b>Jane</b>", "jane@example.com", "Tom & \"Jerry\" 'n co")).unwrap();
        assert_eq!(contact.name, "&lt;b&gt;Jane&lt;/b&gt;");
        assert_eq!(contact.message, "Tom &amp; &quot;Jerry&quot; &#039;n co");
    }

    #[test]
    fn body_embeds_all_fields() {
        let contact = validate(submission("Jane", "jane@example.com", "Hello")).unwrap();
        assert_eq!(
            contact.email_body(),
            "Name: Jane\nEmail: jane@example.com\n\nMessage:\nHello"
        );
    }
}

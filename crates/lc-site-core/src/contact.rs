//! Contact form validation.
//!
//! A submission is turned into a [`FormSnapshot`] of trimmed values, then
//! checked for the required fields and a plausible email address. The error
//! `Display` strings are the messages shown to the visitor.

use crate::status::StatusMessage;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

/// Browser whitespace (`String.prototype.trim` and the regex `\s` class),
/// which differs from Unicode White_Space: U+FEFF is included, U+0085 is not.
const JS_SPACE_CLASS: &str = r"\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^@{JS_SPACE_CLASS}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern compiles")
});

pub const SUCCESS_MESSAGE: &str = "Thank you for your enquiry! We will be in touch shortly.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Field name → trimmed value, as entered at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    fields: BTreeMap<String, String>,
}

impl FormSnapshot {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let fields = entries
            .into_iter()
            .map(|(name, value)| (name.into(), value.as_ref().trim_matches(is_js_space).to_owned()))
            .collect();
        Self { fields }
    }

    /// Trimmed value, or empty when the field was not submitted.
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }
}

/// The validated required fields of an enquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactEnquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub fn validate(snapshot: &FormSnapshot) -> Result<ContactEnquiry, ValidationError> {
    let name = snapshot.get("name");
    let email = snapshot.get("email");
    let phone = snapshot.get("phone");

    if name.is_empty() || email.is_empty() || phone.is_empty() {
        debug!(
            name = !name.is_empty(),
            email = !email.is_empty(),
            phone = !phone.is_empty(),
            "contact form missing required fields"
        );
        return Err(ValidationError::MissingRequired);
    }

    if !is_valid_email(email) {
        debug!("contact form email rejected");
        return Err(ValidationError::InvalidEmail);
    }

    Ok(ContactEnquiry {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
    })
}

pub fn is_js_space(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `local@domain.tld` with no `@` or whitespace inside any part.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// What the page does with one submit: the message to show, and whether
/// the form fields are cleared. Only a valid enquiry clears the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub message: StatusMessage,
    pub reset: bool,
}

pub fn submit(snapshot: &FormSnapshot) -> Submission {
    let outcome = validate(snapshot);
    Submission {
        message: StatusMessage::for_outcome(&outcome),
        reset: outcome.is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusKind;

    fn snapshot(name: &str, email: &str, phone: &str) -> FormSnapshot {
        FormSnapshot::from_entries([("name", name), ("email", email), ("phone", phone)])
    }

    #[test]
    fn missing_name_is_rejected() {
        let result = validate(&snapshot("", "a@b.com", "123"));
        assert_eq!(result, Err(ValidationError::MissingRequired));
        assert_eq!(
            ValidationError::MissingRequired.to_string(),
            "Please fill in all required fields."
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let result = validate(&snapshot("A", "a@b.com", "   "));
        assert_eq!(result, Err(ValidationError::MissingRequired));
    }

    #[test]
    fn absent_field_counts_as_missing() {
        let partial = FormSnapshot::from_entries([("name", "A"), ("email", "a@b.com")]);
        assert_eq!(validate(&partial), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let result = validate(&snapshot("A", "not-an-email", "123"));
        assert_eq!(result, Err(ValidationError::InvalidEmail));
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn required_check_runs_before_email_check() {
        let result = validate(&snapshot("", "not-an-email", "123"));
        assert_eq!(result, Err(ValidationError::MissingRequired));
    }

    #[test]
    fn valid_submission_is_trimmed() {
        let enquiry = validate(&snapshot("  A ", " a@b.com", "123 ")).expect("should validate");
        assert_eq!(
            enquiry,
            ContactEnquiry {
                name: "A".to_owned(),
                email: "a@b.com".to_owned(),
                phone: "123".to_owned(),
            }
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.example.co.uk"));
        assert!(is_valid_email("a@b..c"));

        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b.c om"));
    }

    #[test]
    fn snapshot_serializes_as_flat_object() {
        let snap = FormSnapshot::from_entries([("name", " A "), ("message", "Hi")]);
        let json = serde_json::to_string(&snap).expect("snapshot serializes");
        assert_eq!(json, r#"{"message":"Hi","name":"A"}"#);
    }

    #[test]
    fn byte_order_mark_is_trimmed_like_the_browser() {
        let result = validate(&snapshot("\u{FEFF}", "a@b.com", "123"));
        assert_eq!(result, Err(ValidationError::MissingRequired));
    }

    #[test]
    fn next_line_is_not_browser_whitespace() {
        let snap = FormSnapshot::from_entries([("name", "\u{85}A\u{85}")]);
        assert_eq!(snap.get("name"), "\u{85}A\u{85}");
        assert!(is_valid_email("a\u{85}b@c.com"));
    }

    #[test]
    fn browser_whitespace_inside_email_is_rejected() {
        assert!(!is_valid_email("a\u{FEFF}b@c.com"));
        assert!(!is_valid_email("a@b.c\u{00A0}om"));
        assert!(!is_valid_email("a\u{3000}@b.com"));
        assert!(!is_valid_email("a@b\u{2028}.com"));
    }

    #[test]
    fn missing_field_submission_keeps_form() {
        let submission = submit(&snapshot("", "a@b.com", "123"));
        assert_eq!(submission.message.kind, StatusKind::Error);
        assert_eq!(submission.message.text, "Please fill in all required fields.");
        assert!(!submission.reset);
    }

    #[test]
    fn bad_email_submission_keeps_form() {
        let submission = submit(&snapshot("A", "not-an-email", "123"));
        assert_eq!(submission.message.kind, StatusKind::Error);
        assert_eq!(submission.message.text, "Please enter a valid email address.");
        assert!(!submission.reset);
    }

    #[test]
    fn valid_submission_clears_form() {
        let submission = submit(&snapshot("A", "a@b.com", "123"));
        assert_eq!(submission.message.kind, StatusKind::Success);
        assert_eq!(submission.message.text, SUCCESS_MESSAGE);
        assert!(submission.reset);
    }
}

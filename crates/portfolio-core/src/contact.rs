//! Contact form validation
//!
//! Presence checks on every field plus a shape check on the email address.
//! There is no backend; a valid form just shows the success message.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters the browser's `\s` class treats as whitespace. Differs from
/// the regex crate's Unicode `\s`: adds U+FEFF, leaves out U+0085.
const BROWSER_SPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$` with the browser's whitespace set
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{BROWSER_SPACE}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("valid email regex")
});

/// Shown after a successful submission
pub const SUCCESS_MESSAGE: &str = "Thanks for your message! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn id(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

/// One failed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: ContactField, message: &'static str) -> Self {
        Self { field, message }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check every field, collecting all failures in field order.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new(ContactField::Name, "Please enter your name"));
        }

        if self.email.trim().is_empty() {
            errors.push(FieldError::new(ContactField::Email, "Please enter your email"));
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError::new(
                ContactField::Email,
                "Please enter a valid email address",
            ));
        }

        if self.message.trim().is_empty() {
            errors.push(FieldError::new(ContactField::Message, "Please enter your message"));
        }

        if errors.is_empty() {
            tracing::debug!("Contact form valid");
            Ok(())
        } else {
            tracing::debug!(errors = errors.len(), "Contact form rejected");
            Err(errors)
        }
    }

    /// Clear all fields after a successful submission
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// `local@domain.tld`: no whitespace, a single `@`, and a dot inside the
/// domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hello");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_all_blank_reports_every_field() {
        let errors = ContactForm::new("  ", "", "\n").validate().unwrap_err();
        let fields: Vec<ContactField> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
        assert_eq!(errors[1].message, "Please enter your email");
    }

    #[test]
    fn test_bad_email_message() {
        let errors = ContactForm::new("Ada", "ada@example", "Hi").validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ContactField::Email);
        assert_eq!(errors[0].message, "Please enter a valid email address");
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(is_valid_email("a@b.c.d"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@b@c.de"));
        assert!(!is_valid_email("plain"));
    }

    #[test]
    fn test_email_whitespace_follows_browser_class() {
        assert!(!is_valid_email("a\u{FEFF}@b.co"));
        assert!(!is_valid_email("a@b\u{00A0}c.de"));
        assert!(!is_valid_email("a@b.c\u{3000}"));
        assert!(!is_valid_email("a\tb@c.de"));
        // NEL is not whitespace in the browser's class
        assert!(is_valid_email("a\u{0085}b@c.de"));
    }

    #[test]
    fn test_reset() {
        let mut form = ContactForm::new("Ada", "ada@example.com", "Hello");
        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}

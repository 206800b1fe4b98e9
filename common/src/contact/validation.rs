//! Field validation for the contact form.
//!
//! Runs synchronously before any network call. Every failing field gets exactly
//! one error; the first rule that fails for a field wins.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::form::SubmissionForm;

/// Minimum number of characters in the trimmed message.
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Input fields of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Email,
    EnquiryType,
    Message,
}

impl FormField {
    /// The `name`/`id` attribute of the matching form control.
    pub fn id(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::EnquiryType => "enquiryType",
            FormField::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required")]
    Required,
    #[error("invalid-format")]
    InvalidFormat,
    #[error("too-short")]
    TooShort,
}

impl ValidationError {
    /// Machine-readable error code.
    pub fn code(self) -> &'static str {
        match self {
            ValidationError::Required => "required",
            ValidationError::InvalidFormat => "invalid-format",
            ValidationError::TooShort => "too-short",
        }
    }

    /// Text rendered under the offending control.
    pub fn message_for(self, field: FormField) -> &'static str {
        match (field, self) {
            (FormField::Name, _) => "Name is required",
            (FormField::Email, ValidationError::InvalidFormat) => "Please enter a valid email",
            (FormField::Email, _) => "Email is required",
            (FormField::EnquiryType, _) => "Please select an enquiry type",
            (FormField::Message, ValidationError::TooShort) => {
                "Message must be at least 10 characters"
            }
            (FormField::Message, _) => "Message is required",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validates all fields and returns the errors keyed by field.
///
/// An empty map means the form may be submitted.
pub fn validate(form: &SubmissionForm) -> BTreeMap<FormField, ValidationError> {
    let mut errors = BTreeMap::new();

    if form.name.trim().is_empty() {
        errors.insert(FormField::Name, ValidationError::Required);
    }

    if form.email.trim().is_empty() {
        errors.insert(FormField::Email, ValidationError::Required);
    } else if !is_valid_email(&form.email) {
        errors.insert(FormField::Email, ValidationError::InvalidFormat);
    }

    if form.enquiry_type.is_none() {
        errors.insert(FormField::EnquiryType, ValidationError::Required);
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.insert(FormField::Message, ValidationError::Required);
    } else if message.chars().count() < MESSAGE_MIN_CHARS {
        errors.insert(FormField::Message, ValidationError::TooShort);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::contact::EnquiryType;

    fn valid_form() -> SubmissionForm {
        let mut form = SubmissionForm::new();
        form.name = "Jane".into();
        form.email = "jane@x.com".into();
        form.enquiry_type = Some(EnquiryType::Job);
        form.message = "Let's talk about a role".into();
        form
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn blank_fields_are_required() {
        let mut form = SubmissionForm::new();
        form.name = "   ".into();
        form.email = "\t".into();
        form.message = " \n ".into();

        let errors = validate(&form);
        assert_eq!(errors.len(), 4);
        assert!(errors.values().all(|e| *e == ValidationError::Required));
    }

    #[test]
    fn email_format_is_checked() {
        let mut form = valid_form();
        form.email = "not-an-email".into();
        assert_eq!(
            validate(&form).get(&FormField::Email).map(|e| e.code()),
            Some("invalid-format")
        );

        form.email = "a@b.co".into();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn message_length_boundary() {
        let mut form = valid_form();
        form.message = "123456789".into();
        assert_eq!(
            validate(&form).get(&FormField::Message),
            Some(&ValidationError::TooShort)
        );

        form.message = "1234567890".into();
        assert!(validate(&form).is_empty());

        // Padding does not count towards the minimum.
        form.message = "   123456789   ".into();
        assert_eq!(
            validate(&form).get(&FormField::Message).map(|e| e.code()),
            Some("too-short")
        );
    }

    #[test]
    fn messages_are_field_specific() {
        assert_eq!(
            ValidationError::Required.message_for(FormField::EnquiryType),
            "Please select an enquiry type"
        );
        assert_eq!(
            ValidationError::InvalidFormat.message_for(FormField::Email),
            "Please enter a valid email"
        );
    }
}

//! Wire types shared by the contact form and the relay endpoint.
//!
//! The browser sends a `ContactMessage` with the enquiry type already resolved
//! to its display label. The server reads the same JSON as a `ContactRequest`
//! whose fields accept any JSON value, so that a missing or falsy field can be
//! answered with the fixed "All fields are required" body instead of a decoder
//! error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category the submitter picks to classify their message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryType {
    General,
    Job,
    Project,
    Freelance,
    Other,
}

impl EnquiryType {
    /// Options in the order the select control lists them.
    pub const ALL: [EnquiryType; 5] = [
        EnquiryType::General,
        EnquiryType::Job,
        EnquiryType::Project,
        EnquiryType::Freelance,
        EnquiryType::Other,
    ];

    /// Human-readable label, used both in the UI and in the outgoing email.
    pub fn label(self) -> &'static str {
        match self {
            EnquiryType::General => "General Inquiry",
            EnquiryType::Job => "Job Opportunity",
            EnquiryType::Project => "Project Collaboration",
            EnquiryType::Freelance => "Freelance Work",
            EnquiryType::Other => "Other",
        }
    }

    /// Stable option value for `<option value=...>`.
    pub fn key(self) -> &'static str {
        match self {
            EnquiryType::General => "general",
            EnquiryType::Job => "job",
            EnquiryType::Project => "project",
            EnquiryType::Freelance => "freelance",
            EnquiryType::Other => "other",
        }
    }

    pub fn from_key(key: &str) -> Option<EnquiryType> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Message posted by the form. Consumed once by the relay and never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    /// Display label of the enquiry type, e.g. "Job Opportunity".
    pub enquiry_type: String,
    pub message: String,
}

/// Server-side view of the posted payload. Every field may be missing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub email: Value,
    #[serde(default)]
    pub enquiry_type: Value,
    #[serde(default)]
    pub message: Value,
}

impl ContactRequest {
    /// Presence check only: a field is missing when absent, `null`, `false`,
    /// `0` or an empty string. Any other value is relayed as text.
    ///
    /// Whitespace-only values pass, and neither the email format nor the
    /// message length is checked here.
    pub fn into_message(self) -> Option<ContactMessage> {
        Some(ContactMessage {
            name: present(self.name)?,
            email: present(self.email)?,
            enquiry_type: present(self.enquiry_type)?,
            message: present(self.message)?,
        })
    }
}

fn present(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Body returned by the relay on success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
}

impl ContactResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body returned by the relay on any failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_serializes_with_camel_case_keys() {
        let message = ContactMessage {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            enquiry_type: EnquiryType::Job.label().into(),
            message: "Let's talk about a role".into(),
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "name": "Jane",
                "email": "jane@x.com",
                "enquiryType": "Job Opportunity",
                "message": "Let's talk about a role",
            })
        );
    }

    #[test]
    fn request_with_missing_fields_is_rejected() {
        let request: ContactRequest =
            serde_json::from_value(json!({ "name": "Jane", "email": "jane@x.com" })).unwrap();
        assert!(request.into_message().is_none());
    }

    #[test]
    fn request_with_empty_field_is_rejected() {
        let request: ContactRequest = serde_json::from_value(json!({
            "name": "Jane",
            "email": "jane@x.com",
            "enquiryType": "",
            "message": "hello there",
        }))
        .unwrap();
        assert!(request.into_message().is_none());
    }

    #[test]
    fn request_accepts_values_the_form_would_reject() {
        let request: ContactRequest = serde_json::from_value(json!({
            "name": " ",
            "email": "not-an-email",
            "enquiryType": "Other",
            "message": "x",
        }))
        .unwrap();

        let message = request.into_message().unwrap();
        assert_eq!(message.email, "not-an-email");
        assert_eq!(message.message, "x");
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for falsy in [json!(null), json!(false), json!(0)] {
            let request: ContactRequest = serde_json::from_value(json!({
                "name": "Jane",
                "email": "jane@x.com",
                "enquiryType": falsy,
                "message": "hello there",
            }))
            .unwrap();
            assert!(request.into_message().is_none());
        }
    }

    #[test]
    fn other_values_are_relayed_as_text() {
        let request: ContactRequest = serde_json::from_value(json!({
            "name": 42,
            "email": "jane@x.com",
            "enquiryType": true,
            "message": "hello there",
        }))
        .unwrap();

        let message = request.into_message().unwrap();
        assert_eq!(message.name, "42");
        assert_eq!(message.enquiry_type, "true");
    }

    #[test]
    fn enquiry_keys_round_trip_through_option_values() {
        for kind in EnquiryType::ALL {
            assert_eq!(EnquiryType::from_key(kind.key()), Some(kind));
        }
        assert_eq!(EnquiryType::from_key(""), None);
    }
}

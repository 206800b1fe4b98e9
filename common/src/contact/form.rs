//! Submission lifecycle of the contact form.
//!
//! `SubmissionForm` is an explicit state machine. The UI feeds it `FormEvent`s
//! and carries out the returned `FormEffect`: re-rendering, sending the one
//! POST request, or arming the reset timer. The machine itself performs no I/O,
//! so the same rules hold in the browser and in tests.
//!
//! ```text
//! Editing --Submit(valid)--> Submitting --SubmitSucceeded--> Submitted --ResetElapsed--> Editing
//!                                 |
//!                                 +--SubmitFailed--> Failed --Edit/Submit--> Editing/Submitting
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use crate::model::contact::{ContactMessage, EnquiryType};

use super::validation::{FormField, ValidationError, validate};

/// How long the success panel stays up before the form comes back.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_millis(5000);

/// Form-level text shown when the relay call fails for any reason.
pub const SUBMIT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    /// Exactly one request is in flight.
    Submitting,
    /// Success panel is shown; fields are already cleared.
    Submitted,
    /// Last attempt failed; fields are kept for a retry.
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Edit(FormField, String),
    SelectEnquiry(Option<EnquiryType>),
    Submit,
    SubmitSucceeded,
    SubmitFailed(String),
    ResetElapsed,
}

/// What the caller has to do after an event was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEffect {
    /// Nothing changed.
    Noop,
    /// State changed; re-render.
    Render,
    /// Re-render and issue exactly one POST carrying this message.
    Send(ContactMessage),
    /// Re-render and dispatch `ResetElapsed` after the delay.
    ScheduleReset(Duration),
}

impl FormEffect {
    pub fn should_render(&self) -> bool {
        !matches!(self, FormEffect::Noop)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub name: String,
    pub email: String,
    pub enquiry_type: Option<EnquiryType>,
    pub message: String,
    pub errors: BTreeMap<FormField, ValidationError>,
    pub status: FormStatus,
    pub submit_error: Option<String>,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The submit control is disabled while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn error_for(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).map(|e| e.message_for(field))
    }

    pub fn dispatch(&mut self, event: FormEvent) -> FormEffect {
        match event {
            FormEvent::Edit(field, value) => {
                match field {
                    FormField::Name => self.name = value,
                    FormField::Email => self.email = value,
                    FormField::Message => self.message = value,
                    FormField::EnquiryType => self.enquiry_type = EnquiryType::from_key(&value),
                }
                self.touch(field);
                FormEffect::Render
            }
            FormEvent::SelectEnquiry(kind) => {
                self.enquiry_type = kind;
                self.touch(FormField::EnquiryType);
                FormEffect::Render
            }
            FormEvent::Submit => self.submit(),
            FormEvent::SubmitSucceeded => {
                if self.status != FormStatus::Submitting {
                    return FormEffect::Noop;
                }
                self.clear_fields();
                self.status = FormStatus::Submitted;
                FormEffect::ScheduleReset(SUCCESS_RESET_DELAY)
            }
            FormEvent::SubmitFailed(_reason) => {
                if self.status != FormStatus::Submitting {
                    return FormEffect::Noop;
                }
                self.submit_error = Some(SUBMIT_ERROR_MESSAGE.to_string());
                self.status = FormStatus::Failed;
                FormEffect::Render
            }
            FormEvent::ResetElapsed => {
                if self.status != FormStatus::Submitted {
                    return FormEffect::Noop;
                }
                self.status = FormStatus::Editing;
                FormEffect::Render
            }
        }
    }

    fn submit(&mut self) -> FormEffect {
        if matches!(self.status, FormStatus::Submitting | FormStatus::Submitted) {
            return FormEffect::Noop;
        }

        self.submit_error = None;
        self.errors = validate(self);
        // A valid form always carries an enquiry type.
        let kind = match self.enquiry_type {
            Some(kind) if self.errors.is_empty() => kind,
            _ => {
                self.status = FormStatus::Editing;
                return FormEffect::Render;
            }
        };

        self.status = FormStatus::Submitting;
        FormEffect::Send(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            enquiry_type: kind.label().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Clears the field's error without re-validating; a failed form goes
    /// back to editing once the user changes something.
    fn touch(&mut self, field: FormField) {
        self.errors.remove(&field);
        if self.status == FormStatus::Failed {
            self.status = FormStatus::Editing;
            self.submit_error = None;
        }
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.enquiry_type = None;
        self.message.clear();
        self.errors.clear();
        self.submit_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubmissionForm {
        let mut form = SubmissionForm::new();
        form.dispatch(FormEvent::Edit(FormField::Name, "Jane".into()));
        form.dispatch(FormEvent::Edit(FormField::Email, "jane@x.com".into()));
        form.dispatch(FormEvent::SelectEnquiry(Some(EnquiryType::Job)));
        form.dispatch(FormEvent::Edit(
            FormField::Message,
            "Let's talk about a role".into(),
        ));
        form
    }

    #[test]
    fn invalid_submit_sends_nothing_and_reports_every_field() {
        let mut form = SubmissionForm::new();
        form.name = "  ".into();

        let effect = form.dispatch(FormEvent::Submit);

        assert_eq!(effect, FormEffect::Render);
        assert_eq!(form.status, FormStatus::Editing);
        assert_eq!(
            form.errors.keys().copied().collect::<Vec<_>>(),
            vec![
                FormField::Name,
                FormField::Email,
                FormField::EnquiryType,
                FormField::Message
            ]
        );
    }

    #[test]
    fn missing_enquiry_type_alone_blocks_submission() {
        let mut form = filled();
        form.dispatch(FormEvent::SelectEnquiry(None));

        assert_eq!(form.dispatch(FormEvent::Submit), FormEffect::Render);
        assert_eq!(
            form.errors.get(&FormField::EnquiryType),
            Some(&ValidationError::Required)
        );
    }

    #[test]
    fn valid_submit_sends_one_message_with_label() {
        let mut form = filled();

        let effect = form.dispatch(FormEvent::Submit);

        assert_eq!(
            effect,
            FormEffect::Send(ContactMessage {
                name: "Jane".into(),
                email: "jane@x.com".into(),
                enquiry_type: "Job Opportunity".into(),
                message: "Let's talk about a role".into(),
            })
        );
        assert!(form.is_busy());

        // A second submit while the first is in flight is ignored.
        assert_eq!(form.dispatch(FormEvent::Submit), FormEffect::Noop);
        assert_eq!(form.status, FormStatus::Submitting);
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = SubmissionForm::new();
        form.dispatch(FormEvent::Submit);

        form.dispatch(FormEvent::Edit(FormField::Email, "j".into()));

        assert!(form.error_for(FormField::Email).is_none());
        assert_eq!(form.error_for(FormField::Name), Some("Name is required"));
        // Not re-validated until the next submit.
        assert_eq!(form.email, "j");
    }

    #[test]
    fn success_clears_form_and_resets_after_delay() {
        let mut form = filled();
        form.dispatch(FormEvent::Submit);

        let effect = form.dispatch(FormEvent::SubmitSucceeded);

        assert_eq!(effect, FormEffect::ScheduleReset(Duration::from_millis(5000)));
        assert_eq!(form.status, FormStatus::Submitted);
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
        assert!(form.enquiry_type.is_none());

        // Submitting from the success panel does nothing.
        assert_eq!(form.dispatch(FormEvent::Submit), FormEffect::Noop);

        assert_eq!(form.dispatch(FormEvent::ResetElapsed), FormEffect::Render);
        assert_eq!(form, SubmissionForm::new());
    }

    #[test]
    fn failure_keeps_values_and_allows_retry() {
        let mut form = filled();
        form.dispatch(FormEvent::Submit);

        let effect = form.dispatch(FormEvent::SubmitFailed("status 500".into()));

        assert_eq!(effect, FormEffect::Render);
        assert_eq!(form.status, FormStatus::Failed);
        assert_eq!(form.submit_error.as_deref(), Some(SUBMIT_ERROR_MESSAGE));
        assert_eq!(form.name, "Jane");
        assert!(!form.is_busy());

        assert!(matches!(form.dispatch(FormEvent::Submit), FormEffect::Send(_)));
        assert_eq!(form.status, FormStatus::Submitting);
        assert!(form.submit_error.is_none());
    }

    #[test]
    fn editing_after_failure_returns_to_editing() {
        let mut form = filled();
        form.dispatch(FormEvent::Submit);
        form.dispatch(FormEvent::SubmitFailed("offline".into()));

        form.dispatch(FormEvent::Edit(FormField::Name, "Janet".into()));

        assert_eq!(form.status, FormStatus::Editing);
        assert!(form.submit_error.is_none());
    }

    #[test]
    fn stray_completion_events_are_ignored() {
        let mut form = filled();
        assert_eq!(form.dispatch(FormEvent::SubmitSucceeded), FormEffect::Noop);
        assert_eq!(form.dispatch(FormEvent::ResetElapsed), FormEffect::Noop);
        assert_eq!(form.dispatch(FormEvent::SubmitFailed("late".into())), FormEffect::Noop);
        assert_eq!(form.status, FormStatus::Editing);
    }
}

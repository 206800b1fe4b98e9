//! Client-side contact form: validation rules and the submission state machine.

mod form;
mod validation;

pub use form::{
    FormEffect, FormEvent, FormStatus, SUBMIT_ERROR_MESSAGE, SUCCESS_RESET_DELAY, SubmissionForm,
};
pub use validation::{FormField, MESSAGE_MIN_CHARS, ValidationError, is_valid_email, validate};

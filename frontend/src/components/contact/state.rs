use common::contact::SubmissionForm;

/// State of the contact section.
///
/// The form is owned here and only changed through `SubmissionForm::dispatch`.
pub struct ContactComponent {
    pub form: SubmissionForm,
}

impl ContactComponent {
    pub fn new() -> Self {
        Self {
            form: SubmissionForm::new(),
        }
    }
}

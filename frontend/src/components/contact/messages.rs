use common::contact::FormField;
use common::model::contact::EnquiryType;

pub enum Msg {
    Edit(FormField, String),
    SelectEnquiry(Option<EnquiryType>),
    Submit,
    /// Outcome of the POST request; `Err` carries a log-only reason.
    Sent(Result<(), String>),
    ResetElapsed,
}

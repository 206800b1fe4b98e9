//! # Contact Relay
//!
//! Backend logic for `POST /api/contact`.
//!
//! ## Workflow
//!
//! 1.  **Presence check**: the payload is read as a `ContactRequest`; if any of
//!     `name`, `email`, `enquiryType` or `message` is missing or empty the call
//!     fails with `400 {"error": "All fields are required"}`. Format and length
//!     rules are left to the form.
//!
//! 2.  **Composition**: a plain-text body embedding all four fields is built from
//!     a fixed template, and the subject reads `[Portfolio] New {enquiryType} from {name}`.
//!
//! 3.  **Delivery**: with a provider configured the message is sent from the
//!     fixed sender to the fixed recipient, with `reply_to` set to the submitter.
//!     A provider that answers with an error status is logged with its details
//!     and answered with `500 {"error": "Failed to send email"}`; a provider
//!     that cannot be reached is answered with `500 {"error": "Internal server
//!     error"}`. Without a provider the message is written to the log and the
//!     call succeeds.
//!
//! Each call is independent: nothing is stored, retried or deduplicated.

use actix_web::{web, HttpResponse};
use common::model::contact::{ContactMessage, ContactRequest, ContactResponse};
use log::{error, info};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::mail::{Delivery, MailError, OutboundEmail};

/// Fixed envelope of relayed messages.
#[derive(Clone, Debug)]
pub struct Envelope {
    pub from: String,
    pub to: String,
}

impl From<&RelayConfig> for Envelope {
    fn from(config: &RelayConfig) -> Self {
        Envelope {
            from: config.contact_from.clone(),
            to: config.contact_to.clone(),
        }
    }
}

/// Actix web handler for `POST /api/contact`.
pub(crate) async fn process(
    delivery: web::Data<Delivery>,
    envelope: web::Data<Envelope>,
    payload: web::Json<ContactRequest>,
) -> Result<HttpResponse, RelayError> {
    let message = payload.into_inner().into_message().ok_or(RelayError::BadRequest)?;
    relay(&delivery, &envelope, &message).await?;
    Ok(HttpResponse::Ok().json(ContactResponse::ok()))
}

pub async fn relay(
    delivery: &Delivery,
    envelope: &Envelope,
    message: &ContactMessage,
) -> Result<(), RelayError> {
    let text = compose_body(message);

    match delivery {
        Delivery::Provider(provider) => {
            let email = OutboundEmail {
                from: envelope.from.clone(),
                to: vec![envelope.to.clone()],
                subject: subject(message),
                text,
                reply_to: message.email.clone(),
            };
            provider.send(&email).await.map_err(|e| match e {
                MailError::Rejected { .. } => {
                    error!("Resend API error: {}", e);
                    RelayError::Upstream(e)
                }
                MailError::Transport(_) => {
                    error!("Contact form error: {}", e);
                    RelayError::internal(e)
                }
            })?;
            info!("Relayed {} from {}", message.enquiry_type, message.email);
        }
        Delivery::Log => {
            info!(
                "=== CONTACT FORM SUBMISSION ===\n{}\n================================",
                text
            );
        }
    }

    Ok(())
}

pub fn subject(message: &ContactMessage) -> String {
    format!("[Portfolio] New {} from {}", message.enquiry_type, message.name)
}

pub fn compose_body(message: &ContactMessage) -> String {
    format!(
        "New Contact Form Submission\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         Enquiry Type: {}\n\
         \n\
         Message:\n\
         {}\n\
         \n\
         ---\n\
         Sent from your portfolio contact form",
        message.name, message.email, message.enquiry_type, message.message
    )
}

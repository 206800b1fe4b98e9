//! # Contact Service Module
//!
//! Exposes the relay endpoint that forwards contact form submissions to the
//! site owner by email.
//!
//! ## Sub-modules:
//! - `relay`: Validates the presence of every field, composes the email and hands
//!   it to the configured `Delivery`.

mod relay;

pub use relay::Envelope;

use actix_web::error::JsonPayloadError;
use actix_web::web::{post, scope, JsonConfig};
use actix_web::{HttpRequest, Scope};
use log::error;

use crate::error::RelayError;

/// The path of the relay endpoint.
const API_PATH: &str = "/api/contact";

/// Largest accepted request body (10 MiB). Messages have no length cap of
/// their own; this only bounds what is buffered per request.
const JSON_LIMIT: usize = 10 * 1024 * 1024;

/// Configures and returns the Actix `Scope` for the contact routes.
///
/// # Registered Routes:
///
/// *   **`POST /api/contact`**:
///     - **Handler**: `relay::process`
///     - **Description**: Accepts `{name, email, enquiryType, message}`. Replies
///       `200 {"success": true}` once the message was emailed (or logged when no
///       provider credential is configured), `400` when a field is missing and
///       `500` when the provider rejects the message or cannot be reached, or the
///       body is unreadable.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .app_data(json_config())
        .route("", post().to(relay::process))
}

/// The body is parsed as JSON whatever its declared content type. Bodies that
/// cannot be read are answered like any other unexpected failure instead of
/// with actix's default plain-text 400.
fn json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_LIMIT)
        .content_type_required(false)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            error!("Contact form error: {}", err);
            RelayError::internal(err).into()
        })
}

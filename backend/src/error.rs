//! Errors returned by the relay endpoint.
//!
//! The `Display` text of each variant is exactly what the caller sees in the
//! `{"error": ...}` body. Provider details stay in the source error and only
//! reach the server log.
//!
//! Only a provider that answered with a non-2xx status is an `Upstream`
//! failure. A request that never got an answer is `Internal`, like an
//! unreadable body.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::model::contact::ErrorBody;
use thiserror::Error;

use crate::mail::MailError;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("All fields are required")]
    BadRequest,
    #[error("Failed to send email")]
    Upstream(#[source] MailError),
    #[error("Internal server error")]
    Internal(#[source] Box<dyn std::error::Error>),
}

impl RelayError {
    pub fn internal<E: std::error::Error + 'static>(err: E) -> Self {
        RelayError::Internal(Box::new(err))
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::BadRequest => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) | RelayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

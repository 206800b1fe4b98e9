//! Outbound email for relayed contact messages.
//!
//! `Delivery` is decided once at startup: with a provider credential messages
//! go through an `EmailProvider`, without one they are only logged.

mod resend;

use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::config::RelayConfig;

pub use resend::ResendProvider;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("provider responded {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Request body understood by the transactional email API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub reply_to: String,
}

#[async_trait]
pub trait EmailProvider: Send + Sync + 'static {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

/// How the relay hands off a composed message.
#[derive(Clone)]
pub enum Delivery {
    Provider(Arc<dyn EmailProvider>),
    /// Development fallback: print the message to the server log.
    Log,
}

impl Delivery {
    pub fn from_config(config: &RelayConfig) -> Delivery {
        match config.api_key() {
            Some(key) => Delivery::Provider(Arc::new(ResendProvider::new(
                key,
                &config.resend_endpoint,
            ))),
            None => {
                info!("RESEND_API_KEY not set, contact messages will only be logged");
                Delivery::Log
            }
        }
    }
}

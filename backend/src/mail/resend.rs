use async_trait::async_trait;
use reqwest::Client;

use super::{EmailProvider, MailError, OutboundEmail};

/// Sends email through the Resend HTTP API (bearer token, JSON body).
pub struct ResendProvider {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl ResendProvider {
    pub fn new(api_key: &str, endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

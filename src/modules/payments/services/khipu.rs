use super::super::models::PaymentRequest;
use super::provider_trait::PaymentProvider;
use crate::config::KhipuConfig;
use crate::core::{AppError, Result};
use actix_web::http::StatusCode;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Khipu payment provider client
///
/// Talks to the v3 payments API, authenticating with the `x-api-key` header.
/// API Documentation: https://docs.khipu.com/portal/en/payment-api/
pub struct KhipuClient {
    client: Client,
    api_key: String,
    payments_url: String,
}

impl KhipuClient {
    /// Create a new Khipu client
    ///
    /// # Arguments
    /// * `api_key` - Merchant API key (from KHIPU_API_KEY env var)
    /// * `payments_url` - Full payment creation endpoint
    pub fn new(api_key: String, payments_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            payments_url,
        }
    }

    pub fn from_config(config: &KhipuConfig) -> Self {
        Self::new(config.api_key.clone(), config.payments_url())
    }
}

/// Provider bodies are JSON when possible, raw text otherwise, `null` when empty.
fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

#[async_trait]
impl PaymentProvider for KhipuClient {
    async fn create_payment(&self, request: &PaymentRequest) -> Result<Value> {
        tracing::debug!(
            url = %self.payments_url,
            transaction_id = %request.transaction_id,
            "Sending payment to Khipu"
        );

        let response = self
            .client
            .post(&self.payments_url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = parse_body(&response.text().await?);

        if !status.is_success() {
            return Err(AppError::Provider {
                status: StatusCode::from_u16(status.as_u16())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                detail: body,
            });
        }

        Ok(body)
    }

    fn name(&self) -> &str {
        "khipu"
    }
}

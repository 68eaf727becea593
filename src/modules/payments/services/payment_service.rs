use super::super::models::{CreatePaymentInput, PaymentRequest};
use super::khipu::KhipuClient;
use super::payload_builder::PayloadBuilder;
use super::provider_trait::PaymentProvider;
use crate::config::KhipuConfig;
use crate::core::Result;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

/// Outcome of a successful payment creation
#[derive(Debug, Clone)]
pub struct CreatedPayment {
    pub request: PaymentRequest,
    pub provider_response: Value,
}

/// Builds payment requests and forwards them to the provider
#[derive(Clone)]
pub struct PaymentService {
    builder: PayloadBuilder,
    provider: Arc<dyn PaymentProvider>,
}

impl PaymentService {
    pub fn new(builder: PayloadBuilder, provider: Arc<dyn PaymentProvider>) -> Self {
        Self { builder, provider }
    }

    pub fn from_config(config: &KhipuConfig) -> Self {
        Self::new(
            PayloadBuilder::from_config(config),
            Arc::new(KhipuClient::from_config(config)),
        )
    }

    /// Build the request and send it. No retries.
    pub async fn create_payment(&self, input: &CreatePaymentInput) -> Result<CreatedPayment> {
        let request = self.builder.build(input);

        info!(
            provider = %self.provider.name(),
            transaction_id = %request.transaction_id,
            amount = ?request.amount,
            currency = %request.currency,
            callbacks = request.notify_url.is_some(),
            "Creating payment with provider"
        );

        match self.provider.create_payment(&request).await {
            Ok(provider_response) => {
                info!(
                    provider = %self.provider.name(),
                    transaction_id = %request.transaction_id,
                    "Payment created successfully"
                );
                Ok(CreatedPayment {
                    request,
                    provider_response,
                })
            }
            Err(e) => {
                error!(
                    provider = %self.provider.name(),
                    transaction_id = %request.transaction_id,
                    detail = %e.detail(),
                    "Payment creation failed"
                );
                Err(e)
            }
        }
    }
}

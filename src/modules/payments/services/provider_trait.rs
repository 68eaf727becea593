use super::super::models::PaymentRequest;
use crate::core::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Payment provider able to create payments
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a payment and return the provider's response body as-is
    ///
    /// Non-2xx answers come back as `AppError::Provider` carrying the
    /// provider's status and body.
    async fn create_payment(&self, request: &PaymentRequest) -> Result<Value>;

    /// Get provider name
    fn name(&self) -> &str;
}

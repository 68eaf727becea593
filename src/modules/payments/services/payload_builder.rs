use super::super::models::{CreatePaymentInput, PaymentRequest};
use crate::config::khipu::{KhipuConfig, SECURE_SCHEME};
use crate::core::Currency;

pub const TRANSACTION_PREFIX: &str = "csmdemo-";
pub const NOTIFY_API_VERSION: &str = "3.0";

/// Builds the provider request from caller input and callback settings.
///
/// Transaction ids are the prefix plus the current time in milliseconds.
/// Two requests built within the same millisecond get the same id.
#[derive(Debug, Clone, Default)]
pub struct PayloadBuilder {
    public_url: Option<String>,
}

impl PayloadBuilder {
    pub fn new(public_url: Option<String>) -> Self {
        Self { public_url }
    }

    pub fn from_config(config: &KhipuConfig) -> Self {
        Self::new(config.public_url.clone())
    }

    pub fn build(&self, input: &CreatePaymentInput) -> PaymentRequest {
        self.build_at(input, chrono::Utc::now().timestamp_millis())
    }

    /// Same as [`build`](Self::build) with an explicit Unix timestamp in ms.
    pub fn build_at(&self, input: &CreatePaymentInput, timestamp_ms: i64) -> PaymentRequest {
        let callback_base = self
            .public_url
            .as_deref()
            .filter(|url| url.starts_with(SECURE_SCHEME));

        PaymentRequest {
            amount: input.amount(),
            currency: Currency::CLP,
            subject: input.subject(),
            transaction_id: format!("{}{}", TRANSACTION_PREFIX, timestamp_ms),
            return_url: callback_base.map(|base| format!("{}/success", base)),
            notify_url: callback_base.map(|base| format!("{}/webhook", base)),
            notify_api_version: callback_base.map(|_| NOTIFY_API_VERSION.to_string()),
            payer_email: input.payer_email(),
            payer_name: input.payer_name(),
        }
    }
}

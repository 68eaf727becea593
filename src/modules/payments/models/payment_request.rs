use crate::core::Currency;
use serde::Serialize;
use serde_json::Number;

/// Payment creation request sent to the provider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    /// Coerced amount; `None` (serialized as `null`) when the input was not a number
    pub amount: Option<Number>,

    pub currency: Currency,

    pub subject: String,

    /// Merchant-side reference, `csmdemo-<unix millis>`
    pub transaction_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_api_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<String>,
}

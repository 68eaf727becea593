use crate::core::{AppError, Result};

/// Secure scheme a public URL must use before callbacks are advertised
pub const SECURE_SCHEME: &str = "https://";

/// Khipu provider settings
#[derive(Clone)]
pub struct KhipuConfig {
    /// Provider API base, without trailing path
    pub base_url: String,
    /// API key sent as `x-api-key`; also the webhook HMAC secret
    pub api_key: String,
    /// Public base URL the provider can reach us on (e.g. an ngrok tunnel)
    pub public_url: Option<String>,
}

impl KhipuConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://payment-api.khipu.com";

    pub(crate) fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            base_url: var("BASE_URL").unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
            api_key: var("KHIPU_API_KEY")
                .ok_or_else(|| AppError::configuration("KHIPU_API_KEY not set"))?,
            public_url: var("PUBLIC_URL").filter(|url| !url.is_empty()),
        })
    }

    /// Payment creation endpoint
    pub fn payments_url(&self) -> String {
        format!("{}/v3/payments", self.base_url)
    }

    /// Whether return/notify URLs will be attached to new payments
    pub fn callbacks_enabled(&self) -> bool {
        self.public_url
            .as_deref()
            .is_some_and(|url| url.starts_with(SECURE_SCHEME))
    }
}

// Keep the API key out of logs.
impl std::fmt::Debug for KhipuConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KhipuConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("public_url", &self.public_url)
            .finish()
    }
}

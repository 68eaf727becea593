use crate::core::{AppError, Result};
use std::env;

pub mod khipu;
pub mod server;

pub use khipu::KhipuConfig;
pub use server::ServerConfig;

/// Main application configuration
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub khipu: KhipuConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            app: AppConfig {
                env: var("APP_ENV").unwrap_or_else(|| "development".to_string()),
            },
            server: ServerConfig::from_lookup(&var)?,
            khipu: KhipuConfig::from_lookup(&var)?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.khipu.api_key.trim().is_empty() {
            return Err(AppError::configuration("KHIPU_API_KEY must not be empty"));
        }

        if self.khipu.base_url.trim().is_empty() {
            return Err(AppError::configuration("BASE_URL must not be empty"));
        }

        if let Some(public_url) = &self.khipu.public_url {
            if !self.khipu.callbacks_enabled() {
                tracing::warn!(
                    public_url = %public_url,
                    "PUBLIC_URL is not https; return and notify URLs will not be sent"
                );
            }
        }

        Ok(())
    }
}

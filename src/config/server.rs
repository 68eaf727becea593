use crate::core::{AppError, Result};

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 3000;

    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    pub(crate) fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = var("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| AppError::configuration(format!("Invalid PORT: {}", port)))?,
            None => Self::DEFAULT_PORT,
        };

        Ok(Self::new(host, port))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

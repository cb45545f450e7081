//! # Application Configuration
//!
//! Environment-driven configuration for the server binary: bind address and
//! optional overrides folded into the standards table. Everything defaults to
//! sensible values so the binary runs with no environment at all.

use std::env;

use crate::standards::BusinessStandards;

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind host (`APP_HOST`, default `0.0.0.0`)
    pub host: String,
    /// Bind port (`APP_PORT`, default `8000`)
    pub port: u16,
    /// Standards table with any environment overrides applied
    pub standards: BusinessStandards,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// Recognized variables: `APP_HOST`, `APP_PORT` and `MIN_ORDER_AMOUNT`
    /// (overrides the default minimum order total). Malformed numeric values
    /// fall back to defaults.
    pub fn from_env() -> Self {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8000);

        let mut standards = BusinessStandards::default();
        if let Some(min_order) = env::var("MIN_ORDER_AMOUNT")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
        {
            standards.min_order_amount = min_order;
        }

        Self {
            host,
            port,
            standards,
        }
    }

    /// The socket address string to bind to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            standards: BusinessStandards::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.standards.min_order_amount, 10_000.0);
    }
}

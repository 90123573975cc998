use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::{AppError, Result};

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
///
/// Loaded once at startup from a YAML file and passed into handlers by
/// reference via `web::Data`; never mutated after load.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// API credential for the upstream payment gateway
    pub partner_key: String,
    /// Merchant account identifier at the upstream gateway
    pub merchant_id: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://sandbox.tappaysdk.com".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the YAML file named by `RELAY_CONFIG`
    /// (default `config.yaml`). A `.env` file is honored if present.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = env::var("RELAY_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());
        Self::from_file(Path::new(&path))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(raw)
            .map_err(|e| AppError::configuration(format!("invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.partner_key.is_empty() {
            return Err(AppError::configuration("partner_key must not be empty"));
        }

        if self.merchant_id.is_empty() {
            return Err(AppError::configuration("merchant_id must not be empty"));
        }

        Ok(())
    }
}

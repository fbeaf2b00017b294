use crate::error::AppError;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

/// Runtime configuration for the drafting core.
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
}

/// Where the quotation/catalog/client endpoints live.
#[derive(Deserialize, Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SessionConfig {
    pub inactivity_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let base_url = env::var("COTIZADOR_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());

        let timeout_secs = env::var("COTIZADOR_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|e| AppError::Config(anyhow::anyhow!("invalid COTIZADOR_HTTP_TIMEOUT_SECS: {e}")))?;

        // Matches the five-minute window the hosted UI always used.
        let inactivity_timeout_secs = env::var("COTIZADOR_INACTIVITY_TIMEOUT_SECS")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .map_err(|e| {
                AppError::Config(anyhow::anyhow!("invalid COTIZADOR_INACTIVITY_TIMEOUT_SECS: {e}"))
            })?;

        Ok(Self {
            api: ApiConfig {
                base_url,
                timeout_secs,
            },
            session: SessionConfig {
                inactivity_timeout_secs,
            },
        })
    }
}

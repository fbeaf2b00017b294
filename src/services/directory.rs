//! Client directory adapter: the read-only list used to pick a
//! quotation's client.

use crate::config::ApiConfig;
use crate::dtos::ClientRecord;
use crate::error::AppError;
use crate::models::Customer;
use std::time::Duration;

#[derive(Clone)]
pub struct ClientDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl ClientDirectory {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List the registered clients. Unlike the catalog this is a primary
    /// input (a draft cannot be submitted without a client), so failures
    /// propagate.
    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        let url = format!("{}/api/clientes", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AppError::Service(format!("client directory returned {status}")));
        }

        let records: Vec<ClientRecord> = serde_json::from_str(&body)?;
        tracing::debug!(count = records.len(), "Client directory loaded");
        Ok(records.into_iter().map(Customer::from).collect())
    }
}

//! Catalog lookup adapter.
//!
//! Read-only projection of the product/service catalog used to prefill
//! line items. Loading is soft-fail: a catalog outage leaves an empty
//! snapshot and the ledger keeps working with free-text items.

use crate::config::ApiConfig;
use crate::dtos::{CreateProductResponse, NewProductPayload, ProductRecord};
use crate::error::AppError;
use crate::models::{CatalogEntry, NewCatalogEntry};
use reqwest::Client;
use std::time::Duration;

#[derive(Clone)]
pub struct CatalogAdapter {
    client: Client,
    base_url: String,
    entries: Vec<CatalogEntry>,
}

impl CatalogAdapter {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            entries: Vec::new(),
        })
    }

    /// Fetch the active catalog, replacing the current snapshot. Never
    /// errors: on failure the snapshot is emptied and the cause is logged.
    pub async fn load(&mut self) {
        let url = format!("{}/api/productos", self.base_url);
        match self.fetch_entries(&url).await {
            Ok(entries) => {
                tracing::info!(count = entries.len(), "Catalog loaded");
                self.entries = entries;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Catalog load failed, continuing with an empty snapshot");
                self.entries = Vec::new();
            }
        }
    }

    async fn fetch_entries(&self, url: &str) -> Result<Vec<CatalogEntry>, AppError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::Service(format!("catalog endpoint returned {status}")));
        }
        let records: Vec<ProductRecord> = serde_json::from_str(&body)?;
        Ok(records.into_iter().map(CatalogEntry::from).collect())
    }

    pub fn find_by_id(&self, id: i64) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create a catalog entry from the drafting flow ("quick product"),
    /// reload the snapshot, and return the new entry so the caller can
    /// reconcile it into the row that requested it.
    pub async fn create_entry(&mut self, input: &NewCatalogEntry) -> Result<CatalogEntry, AppError> {
        let url = format!("{}/api/productos", self.base_url);
        let payload = NewProductPayload::from(input);
        let response = self.client.post(&url).json(&payload).send().await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = %status, body = %body, "Create product response");

        let envelope: CreateProductResponse = serde_json::from_str(&body).unwrap_or_default();
        if !(status.is_success() && envelope.success) {
            return Err(AppError::Service(
                envelope
                    .message
                    .unwrap_or_else(|| "failed to create catalog entry".to_string()),
            ));
        }
        let id = envelope.producto_id.ok_or_else(|| {
            AppError::Service("create response did not include a product id".to_string())
        })?;

        self.load().await;
        self.find_by_id(id).cloned().ok_or_else(|| {
            AppError::Service("created catalog entry missing from reloaded snapshot".to_string())
        })
    }
}

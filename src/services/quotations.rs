//! Quotation service client.
//!
//! Talks to the create/update/fetch/attachment endpoints of the quotation
//! API and maps its `{success, message}` envelopes onto typed errors.

use crate::config::ApiConfig;
use crate::dtos::{QuotationPayload, QuotationRecord, SaveQuotationResponse, StatusResponse};
use crate::error::AppError;
use crate::models::PendingAttachment;
use reqwest::Client;
use std::time::Duration;

const GENERIC_SAVE_ERROR: &str = "failed to process quotation";
const GENERIC_UPLOAD_ERROR: &str = "failed to upload attachments";

/// Identifier assigned (or confirmed) by a successful create/update call.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedQuotation {
    pub id: i64,
    pub number: Option<String>,
}

/// Client for the quotation endpoints.
#[derive(Clone)]
pub struct QuotationsClient {
    client: Client,
    base_url: String,
}

impl QuotationsClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new quotation. The server must return the assigned id.
    pub async fn create(&self, payload: &QuotationPayload) -> Result<SavedQuotation, AppError> {
        let url = format!("{}/api/cotizaciones", self.base_url);
        let response = self.client.post(&url).json(payload).send().await?;
        let envelope = Self::decode_save(response).await?;

        let id = envelope.cotizacion_id.ok_or_else(|| {
            AppError::Service("create response did not include a quotation id".to_string())
        })?;
        tracing::info!(
            quotation_id = id,
            number = ?envelope.numero_cotizacion,
            "Quotation created"
        );
        Ok(SavedQuotation {
            id,
            number: envelope.numero_cotizacion,
        })
    }

    /// Update an existing quotation in place.
    pub async fn update(&self, id: i64, payload: &QuotationPayload) -> Result<SavedQuotation, AppError> {
        let url = format!("{}/api/cotizaciones/{}", self.base_url, id);
        let response = self.client.put(&url).json(payload).send().await?;
        let envelope = Self::decode_save(response).await?;

        tracing::info!(quotation_id = id, "Quotation updated");
        // The id of a persisted quotation is fixed; whatever the envelope
        // echoes, the known id stands.
        Ok(SavedQuotation {
            id,
            number: envelope.numero_cotizacion,
        })
    }

    /// Fetch the full record of a persisted quotation.
    pub async fn fetch(&self, id: i64) -> Result<QuotationRecord, AppError> {
        let url = format!("{}/api/cotizaciones/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = %status, quotation_id = id, "Fetch quotation response");

        if !status.is_success() {
            return Err(AppError::Service(service_message(
                &body,
                "failed to fetch quotation",
            )));
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Upload staged files as a single multipart request with repeated
    /// `archivos` parts.
    pub async fn upload_attachments(
        &self,
        id: i64,
        attachments: &[PendingAttachment],
    ) -> Result<(), AppError> {
        let mut form = reqwest::multipart::Form::new();
        for attachment in attachments {
            let content = tokio::fs::read(&attachment.path).await?;
            let part =
                reqwest::multipart::Part::bytes(content).file_name(attachment.file_name.clone());
            form = form.part("archivos", part);
        }

        let url = format!("{}/api/cotizaciones/{}/adjuntos", self.base_url, id);
        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(
            status = %status,
            quotation_id = id,
            count = attachments.len(),
            "Attachment upload response"
        );

        let envelope: StatusResponse = serde_json::from_str(&body).unwrap_or_default();
        if status.is_success() && envelope.success {
            tracing::info!(quotation_id = id, count = attachments.len(), "Attachments uploaded");
            Ok(())
        } else {
            Err(AppError::Service(
                envelope
                    .message
                    .unwrap_or_else(|| GENERIC_UPLOAD_ERROR.to_string()),
            ))
        }
    }

    async fn decode_save(response: reqwest::Response) -> Result<SaveQuotationResponse, AppError> {
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = %status, body = %body, "Quotation save response");

        let envelope: SaveQuotationResponse = serde_json::from_str(&body).unwrap_or_default();
        if status.is_success() && envelope.success {
            Ok(envelope)
        } else {
            Err(AppError::Service(
                envelope
                    .message
                    .unwrap_or_else(|| GENERIC_SAVE_ERROR.to_string()),
            ))
        }
    }
}

fn service_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<StatusResponse>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| fallback.to_string())
}

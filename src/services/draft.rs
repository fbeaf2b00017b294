//! Quotation draft controller: validation, payload mapping, submission.

use crate::dtos::{ItemPayload, QuotationPayload};
use crate::error::{AppError, ValidationError};
use crate::models::{DraftMode, QuotationDraft};
use crate::services::ledger::LineItemLedger;
use crate::services::notifier::{NoopNotifier, Notifier, Severity};
use crate::services::quotations::QuotationsClient;
use crate::services::session::QuotationDraftSession;
use std::sync::Arc;

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub quotation_id: i64,
    /// Server-assigned quotation number, when the deployment reports one.
    pub number: Option<String>,
    /// Whether this submit created the record (false for updates).
    pub created: bool,
}

/// Orchestrates create-vs-update submission of a draft session.
#[derive(Clone)]
pub struct DraftController {
    quotations: QuotationsClient,
    notifier: Arc<dyn Notifier>,
}

impl DraftController {
    pub fn new(quotations: QuotationsClient) -> Self {
        Self {
            quotations,
            notifier: Arc::new(NoopNotifier),
        }
    }

    /// Replace the notifier decided at construction time.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Pre-submission checks: a client must be selected and at least one
    /// row must qualify.
    pub fn validate(draft: &QuotationDraft, ledger: &LineItemLedger) -> Result<(), ValidationError> {
        if draft.client_id.is_none() {
            return Err(ValidationError::MissingClient);
        }
        if ledger.qualifying_items().next().is_none() {
            return Err(ValidationError::NoItems);
        }
        Ok(())
    }

    /// Map the draft and its qualifying rows onto the wire payload. Pure;
    /// the draft is not mutated.
    pub fn build_payload(
        draft: &QuotationDraft,
        ledger: &LineItemLedger,
    ) -> Result<QuotationPayload, ValidationError> {
        Self::validate(draft, ledger)?;
        let cliente_id = draft.client_id.ok_or(ValidationError::MissingClient)?;
        Ok(QuotationPayload {
            cliente_id,
            items: ledger.qualifying_items().map(ItemPayload::from).collect(),
            fecha_validez: draft.valid_until,
            notas: draft.notes.clone(),
            condiciones_comerciales: draft.commercial_terms.clone(),
        })
    }

    /// Load a persisted quotation into the session for editing. Staged
    /// attachments from any previous draft are discarded.
    pub async fn begin_edit(
        &self,
        session: &mut QuotationDraftSession,
        id: i64,
    ) -> Result<(), AppError> {
        let record = self.quotations.fetch(id).await?;
        session.apply_record(id, &record, false);
        tracing::info!(
            quotation_id = id,
            items = session.ledger.len(),
            "Quotation loaded for editing"
        );
        Ok(())
    }

    /// Persist the draft: POST when New, PUT when Editing, then upload any
    /// staged attachments keyed by the now-known quotation id.
    ///
    /// A create that succeeds flips the session to Editing before the
    /// attachment phase, so re-invoking after a partial failure retries
    /// only the upload and never creates a duplicate quotation.
    pub async fn submit(
        &self,
        session: &mut QuotationDraftSession,
    ) -> Result<SubmitReceipt, AppError> {
        let payload = match Self::build_payload(&session.draft, &session.ledger) {
            Ok(payload) => payload,
            Err(err) => {
                self.notifier.notify(Severity::Error, &err.to_string());
                return Err(AppError::Validation(err));
            }
        };

        let created = matches!(session.draft.mode, DraftMode::New);
        let saved = match session.draft.mode {
            DraftMode::Editing(id) => self.quotations.update(id, &payload).await,
            DraftMode::New => self.quotations.create(&payload).await,
        };
        let saved = match saved {
            Ok(saved) => saved,
            Err(err) => {
                self.notifier.notify(Severity::Error, &err.to_string());
                return Err(err);
            }
        };

        // From here on the record exists server-side; this session must
        // never re-create it.
        session.draft.mode = DraftMode::Editing(saved.id);

        if !session.draft.pending_attachments.is_empty() {
            if let Err(err) = self
                .quotations
                .upload_attachments(saved.id, &session.draft.pending_attachments)
                .await
            {
                let message = err.to_string();
                // Reconcile with the persisted record; staged files stay
                // queued so a retry runs the upload phase alone.
                match self.quotations.fetch(saved.id).await {
                    Ok(record) => session.apply_record(saved.id, &record, true),
                    Err(fetch_err) => {
                        tracing::warn!(
                            quotation_id = saved.id,
                            error = %fetch_err,
                            "Could not reconcile session after attachment failure"
                        );
                    }
                }
                self.notifier
                    .notify(Severity::Warning, &format!("Attachments: {message}"));
                return Err(AppError::PartialFailure {
                    quotation_id: saved.id,
                    message,
                });
            }

            let uploaded: Vec<String> = session
                .draft
                .pending_attachments
                .drain(..)
                .map(|attachment| attachment.file_name)
                .collect();
            session.draft.existing_attachments.extend(uploaded);
        }

        let receipt = SubmitReceipt {
            quotation_id: saved.id,
            number: saved.number,
            created,
        };
        let notice = match (&receipt.number, created) {
            (Some(number), true) => format!("Quotation {number} created successfully"),
            (None, true) => "Quotation created successfully".to_string(),
            (_, false) => "Quotation updated successfully".to_string(),
        };
        self.notifier.notify(Severity::Success, &notice);
        Ok(receipt)
    }
}

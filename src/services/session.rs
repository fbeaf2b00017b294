//! The draft session: the single owner of a quotation being composed.

use crate::dtos::QuotationRecord;
use crate::models::{DraftMode, PendingAttachment, QuotationDraft};
use crate::services::inactivity::InactivityTimer;
use crate::services::ledger::LineItemLedger;

/// Owns the draft metadata and the ledger for one quotation at a time.
///
/// There are no ambient globals: the id counter, the editing flag, and the
/// staged attachments all live here, and controller operations borrow the
/// session explicitly.
#[derive(Debug, Default)]
pub struct QuotationDraftSession {
    pub draft: QuotationDraft,
    pub ledger: LineItemLedger,
    watchdog: Option<InactivityTimer>,
}

impl QuotationDraftSession {
    /// Fresh session with a single empty row, the way the form opens.
    pub fn new() -> Self {
        let mut session = Self::default();
        session.ledger.add_item(None);
        session
    }

    /// Reset back to a blank New-mode draft with one empty row.
    pub fn reset(&mut self) {
        self.draft = QuotationDraft::new();
        self.ledger.clear();
        self.ledger.add_item(None);
    }

    /// Stage a local file for upload after the quotation persists.
    pub fn stage_attachment(&mut self, attachment: PendingAttachment) {
        self.draft.pending_attachments.push(attachment);
    }

    /// Names of files staged for upload, for display.
    pub fn staged_attachment_names(&self) -> Vec<&str> {
        self.draft
            .pending_attachments
            .iter()
            .map(|attachment| attachment.file_name.as_str())
            .collect()
    }

    /// Replace the session contents with a persisted record. Used both when
    /// entering edit mode and when reconciling after a partial failure;
    /// staged attachments survive only in the latter case (`keep_pending`).
    pub(crate) fn apply_record(&mut self, id: i64, record: &QuotationRecord, keep_pending: bool) {
        self.draft.mode = DraftMode::Editing(id);
        self.draft.client_id = Some(record.cliente_id);
        self.draft.valid_until = record.fecha_validez;
        self.draft.notes = record.notas.clone();
        self.draft.commercial_terms = record.condiciones_comerciales.clone();
        self.draft.existing_attachments = record
            .adjuntos
            .iter()
            .map(|attachment| attachment.nombre_original.clone())
            .collect();
        if !keep_pending {
            self.draft.pending_attachments.clear();
        }

        let items = record
            .items
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, item)| item.into_line_item(index as u64 + 1))
            .collect();
        self.ledger.load_items(items);
    }

    /// Attach an inactivity watchdog owned by this session. Any previous
    /// watchdog is cancelled first.
    pub fn arm_watchdog(&mut self, timer: InactivityTimer) {
        if let Some(previous) = self.watchdog.take() {
            previous.cancel();
        }
        self.watchdog = Some(timer);
    }

    /// Record user activity, pushing the watchdog deadline out.
    pub fn touch(&self) {
        if let Some(watchdog) = &self.watchdog {
            watchdog.touch();
        }
    }

    pub fn disarm_watchdog(&mut self) {
        if let Some(watchdog) = self.watchdog.take() {
            watchdog.cancel();
        }
    }
}

//! cotizador-client: Client-side quotation drafting core for the cotizador suite.
//!
//! Owns the editable line-item ledger with derived totals, the draft
//! controller that persists quotations against the quotation API (including
//! the two-phase attachment upload), and the read-only catalog lookup used
//! to prefill line items. The hosting UI injects its own notification
//! capability and owns a [`services::QuotationDraftSession`] per draft.

pub mod config;
pub mod dtos;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;

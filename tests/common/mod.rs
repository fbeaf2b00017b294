//! Common test utilities for the integration suite.

#![allow(dead_code)]

use cotizador_client::config::ApiConfig;
use cotizador_client::models::LineItemPatch;
use cotizador_client::services::{DraftController, QuotationDraftSession, QuotationsClient};
use std::sync::Once;
use wiremock::MockServer;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        cotizador_client::observability::init_tracing("debug");
    });
}

/// Spawn a mock API server and the config pointing at it.
pub async fn spawn_api() -> (MockServer, ApiConfig) {
    init_tracing();
    let server = MockServer::start().await;
    let config = ApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    };
    (server, config)
}

pub fn controller(config: &ApiConfig) -> DraftController {
    DraftController::new(QuotationsClient::new(config).expect("Failed to build quotations client"))
}

/// Session with one qualifying consulting row for client 5.
pub fn drafted_session() -> QuotationDraftSession {
    let mut session = QuotationDraftSession::new();
    session.draft.client_id = Some(5);
    let row = session.ledger.items()[0].id;
    session.ledger.update_item(
        row,
        LineItemPatch {
            concept: Some("Consulting".to_string()),
            quantity: Some("3".to_string()),
            unit_price: Some("100".to_string()),
            ..Default::default()
        },
    );
    session
}

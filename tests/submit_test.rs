//! Submission flow tests: create vs update, error surfacing, and the
//! attachment phase ordering guarantees.

mod common;

use common::{controller, drafted_session, spawn_api};
use cotizador_client::error::{AppError, ValidationError};
use cotizador_client::models::{DraftMode, PendingAttachment};
use cotizador_client::services::{Notifier, Severity};
use std::io::Write;
use std::sync::Mutex;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

/// Notifier that records every message for assertions.
#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .expect("notifier mutex poisoned")
            .push((severity, message.to_string()));
    }
}

fn staged_file(content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content).expect("Failed to write temp file");
    file
}

#[tokio::test]
async fn create_submit_posts_payload_and_captures_id() {
    let (server, config) = spawn_api().await;

    Mock::given(method("POST"))
        .and(path("/api/cotizaciones"))
        .and(body_json(serde_json::json!({
            "cliente_id": 5,
            "items": [{
                "producto_id": null,
                "concepto": "Consulting",
                "descripcion": "",
                "cantidad": 3.0,
                "precio_unitario": 100.0
            }],
            "fecha_validez": null,
            "notas": "",
            "condiciones_comerciales": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "success": true,
            "cotizacion_id": 42,
            "numero_cotizacion": "COT-0042"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller(&config);
    let mut session = drafted_session();

    let receipt = controller.submit(&mut session).await.expect("submit failed");
    assert_eq!(receipt.quotation_id, 42);
    assert_eq!(receipt.number.as_deref(), Some("COT-0042"));
    assert!(receipt.created);
    // The session now edits the persisted record.
    assert_eq!(session.draft.mode, DraftMode::Editing(42));
}

#[tokio::test]
async fn editing_submit_puts_to_the_known_id() {
    let (server, config) = spawn_api().await;

    Mock::given(method("PUT"))
        .and(path("/api/cotizaciones/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller(&config);
    let mut session = drafted_session();
    session.draft.mode = DraftMode::Editing(7);

    let receipt = controller.submit(&mut session).await.expect("submit failed");
    assert_eq!(receipt.quotation_id, 7);
    assert!(!receipt.created);
    assert_eq!(session.draft.mode, DraftMode::Editing(7));
}

#[tokio::test]
async fn server_message_is_surfaced_verbatim() {
    let (server, config) = spawn_api().await;

    Mock::given(method("POST"))
        .and(path("/api/cotizaciones"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "success": false,
            "message": "Cliente no encontrado"
        })))
        .mount(&server)
        .await;

    let controller = controller(&config);
    let mut session = drafted_session();

    match controller.submit(&mut session).await {
        Err(AppError::Service(message)) => assert_eq!(message, "Cliente no encontrado"),
        other => panic!("expected service error, got {other:?}"),
    }
    // A failed create leaves the draft in New mode.
    assert_eq!(session.draft.mode, DraftMode::New);
}

#[tokio::test]
async fn missing_server_message_falls_back_to_a_generic_one() {
    let (server, config) = spawn_api().await;

    Mock::given(method("POST"))
        .and(path("/api/cotizaciones"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let controller = controller(&config);
    let mut session = drafted_session();

    match controller.submit(&mut session).await {
        Err(AppError::Service(message)) => assert_eq!(message, "failed to process quotation"),
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_primary_call_never_touches_the_attachment_endpoint() {
    let (server, config) = spawn_api().await;

    Mock::given(method("POST"))
        .and(path("/api/cotizaciones"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "success": false,
            "message": "Error interno"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Any attachment upload at all is a failure here.
    Mock::given(method("POST"))
        .and(path("/api/cotizaciones/42/adjuntos"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let file = staged_file(b"quote attachment");
    let controller = controller(&config);
    let mut session = drafted_session();
    session.stage_attachment(PendingAttachment::from_path(file.path()));

    assert!(controller.submit(&mut session).await.is_err());
    // Staged files remain queued for the next attempt.
    assert_eq!(session.draft.pending_attachments.len(), 1);
}

#[tokio::test]
async fn successful_submit_uploads_staged_attachments_and_clears_them() {
    let (server, config) = spawn_api().await;

    Mock::given(method("POST"))
        .and(path("/api/cotizaciones"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "success": true,
            "cotizacion_id": 42
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/cotizaciones/42/adjuntos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Adjuntos guardados: 1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = staged_file(b"quote attachment");
    let file_name = file
        .path()
        .file_name()
        .expect("temp file name")
        .to_string_lossy()
        .into_owned();

    let controller = controller(&config);
    let mut session = drafted_session();
    session.stage_attachment(PendingAttachment::from_path(file.path()));

    let receipt = controller.submit(&mut session).await.expect("submit failed");
    assert_eq!(receipt.quotation_id, 42);
    assert!(session.draft.pending_attachments.is_empty());
    assert_eq!(session.draft.existing_attachments, vec![file_name]);
}

#[tokio::test]
async fn attachment_failure_is_partial_and_retry_runs_upload_phase_only() {
    let (server, config) = spawn_api().await;

    // The create must happen exactly once across both submits.
    Mock::given(method("POST"))
        .and(path("/api/cotizaciones"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "success": true,
            "cotizacion_id": 42
        })))
        .expect(1)
        .mount(&server)
        .await;

    // First upload attempt fails, the retry succeeds.
    Mock::given(method("POST"))
        .and(path("/api/cotizaciones/42/adjuntos"))
        .respond_with(ResponseTemplate::new(413).set_body_json(serde_json::json!({
            "success": false,
            "message": "Tamaño total de adjuntos excedido"
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/cotizaciones/42/adjuntos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Reconciliation fetch after the failed upload.
    Mock::given(method("GET"))
        .and(path("/api/cotizaciones/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cliente_id": 5,
            "fecha_validez": null,
            "notas": "",
            "condiciones_comerciales": "",
            "items": [{
                "producto_id": null,
                "concepto": "Consulting",
                "descripcion": "",
                "cantidad": 3.0,
                "precio_unitario": 100.0
            }],
            "adjuntos": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The retry must update, never re-create.
    Mock::given(method("PUT"))
        .and(path("/api/cotizaciones/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = staged_file(b"quote attachment");
    let controller = controller(&config);
    let mut session = drafted_session();
    session.stage_attachment(PendingAttachment::from_path(file.path()));

    match controller.submit(&mut session).await {
        Err(AppError::PartialFailure { quotation_id, message }) => {
            assert_eq!(quotation_id, 42);
            assert_eq!(message, "Tamaño total de adjuntos excedido");
        }
        other => panic!("expected partial failure, got {other:?}"),
    }
    assert_eq!(session.draft.mode, DraftMode::Editing(42));
    assert_eq!(session.draft.pending_attachments.len(), 1);

    let receipt = controller.submit(&mut session).await.expect("retry failed");
    assert_eq!(receipt.quotation_id, 42);
    assert!(!receipt.created);
    assert!(session.draft.pending_attachments.is_empty());
}

#[tokio::test]
async fn validation_failure_notifies_and_skips_the_network() {
    let (server, config) = spawn_api().await;

    Mock::given(method("POST"))
        .and(path("/api/cotizaciones"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let notifier = std::sync::Arc::new(RecordingNotifier::default());
    let controller = controller(&config).with_notifier(notifier.clone());

    let mut session = drafted_session();
    session.draft.client_id = None;

    match controller.submit(&mut session).await {
        Err(AppError::Validation(ValidationError::MissingClient)) => {}
        other => panic!("expected validation error, got {other:?}"),
    }

    let messages = notifier.messages.lock().expect("notifier mutex poisoned");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, Severity::Error);
}

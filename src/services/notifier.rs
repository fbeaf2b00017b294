//! Host notification capability.
//!
//! The hosting UI decides how messages surface (toast, dialog, status bar).
//! The implementation is injected at construction time; nothing is probed
//! at call time. The default discards everything.

/// Message severity, mirroring the notification styles of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _severity: Severity, _message: &str) {}
}

/// Routes messages to the tracing pipeline. Useful for headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => tracing::error!("{message}"),
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Success | Severity::Info => tracing::info!("{message}"),
        }
    }
}

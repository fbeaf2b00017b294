//! Session inactivity watchdog.
//!
//! The hosted UI armed a global five-minute timeout that forced a logout.
//! Here the timer is an explicit task owned by the session: reset on
//! activity, cancelled on drop, firing its callback at most once.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub struct InactivityTimer {
    activity: Arc<Notify>,
    shutdown: CancellationToken,
}

impl InactivityTimer {
    /// Spawn the watchdog task. `on_timeout` runs once if the timeout
    /// elapses with no intervening [`touch`](Self::touch).
    pub fn spawn<F>(timeout: Duration, on_timeout: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let activity = Arc::new(Notify::new());
        let shutdown = CancellationToken::new();

        let task_activity = Arc::clone(&activity);
        let task_shutdown = shutdown.clone();
        tokio::spawn(async move {
            let mut on_timeout = Some(on_timeout);
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(timeout) => {
                        if let Some(on_timeout) = on_timeout.take() {
                            on_timeout();
                        }
                        break;
                    }
                    _ = task_activity.notified() => {}
                    _ = task_shutdown.cancelled() => break,
                }
            }
        });

        Self { activity, shutdown }
    }

    /// Push the deadline out by another full timeout window.
    pub fn touch(&self) {
        self.activity.notify_one();
    }

    /// Stop the watchdog without firing.
    pub fn cancel(&self) {
        self.shutdown.cancel();
    }
}

impl Drop for InactivityTimer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

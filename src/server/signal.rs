// Signal handling module
//
// Supported signals:
// - SIGINT:  Graceful shutdown (Ctrl+C)
// - SIGTERM: Graceful shutdown

use std::sync::Arc;
use tokio::sync::Notify;

/// Signal handler state
pub struct SignalHandler {
    /// Notified once when SIGINT or SIGTERM arrives
    pub shutdown: Arc<Notify>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
        }
    }

    fn trigger(&self, signal_name: &str) {
        crate::logger::log_info(&format!("{signal_name} received, stopping server..."));
        // notify_one keeps a permit if the loop is not waiting yet
        self.shutdown.notify_one();
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start signal handlers (Unix)
///
/// Spawns a background task that waits for SIGINT or SIGTERM.
/// Registration failures are logged and leave the server running.
#[cfg(unix)]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(term), Ok(int)) => (term, int),
                (Err(e), _) | (_, Err(e)) => {
                    crate::logger::log_error(&format!("Failed to register signal handlers: {e}"));
                    return;
                }
            };

        tokio::select! {
            _ = sigterm.recv() => handler.trigger("SIGTERM"),
            _ = sigint.recv() => handler.trigger("SIGINT (Ctrl+C)"),
        }
    });
}

/// Non-Unix fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            handler.trigger("Ctrl+C");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_before_wait_still_wakes_loop() {
        let handler = SignalHandler::new();
        handler.trigger("SIGTERM");

        tokio::time::timeout(Duration::from_secs(1), handler.shutdown.notified())
            .await
            .expect("shutdown permit was lost");
    }
}

//! Graceful stop of the mock listener.

use tokio::sync::broadcast;

/// Broadcast handle that tells the mock server to stop.
///
/// `main` hands one receiver to the HTTP server and the handle itself to the
/// signal listener. Integration tests keep the handle and fire it on drop.
#[derive(Clone, Debug)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver that resolves once the server should stop accepting requests.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed server to drain and stop. Repeat calls are no-ops
    /// once nobody is listening.
    pub fn trigger(&self) {
        let listening = self.tx.send(()).unwrap_or(0);
        tracing::debug!(listening, "Shutdown requested");
    }

    /// Servers still waiting for the stop signal.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

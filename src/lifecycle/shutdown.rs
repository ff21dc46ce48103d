//! Shutdown coordination for the gateway.

use tokio::sync::broadcast;

use crate::lifecycle::signals;

/// Coordinator for graceful shutdown.
///
/// The server holds a receiver; whoever owns the coordinator (the binary on
/// a signal, a test when it is done) fires it.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the shutdown signal. Returns how many receivers were notified.
    pub fn trigger(&self) -> usize {
        self.tx.send(()).unwrap_or(0)
    }

    /// Fire the shutdown signal once the process is asked to terminate.
    pub fn trigger_on_signal(&self) -> tokio::task::JoinHandle<()> {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            signals::termination().await;
            let _ = tx.send(());
        })
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

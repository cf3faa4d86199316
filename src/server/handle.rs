// src/server/handle.rs

use tokio::sync::broadcast;
use tracing::debug;

/// One notification on the live-update channel.
#[derive(Debug, Clone)]
pub enum ChangeEvent {
    /// Hot-apply the listed output files (project-root-relative paths)
    /// without a full page reload.
    Update { paths: Vec<String> },
    /// Instruct clients to completely re-fetch the page.
    Reload,
}

/// Handle to the dev server's live-update channel.
///
/// Constructed explicitly at startup and passed by reference to every task
/// invocation and to the watch loop; there is no process-wide singleton.
/// Notifications are fire-and-forget single sends: no connected client is
/// not an error.
#[derive(Debug, Clone)]
pub struct ServerHandle {
    tx: broadcast::Sender<ChangeEvent>,
}

impl ServerHandle {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(64);
        Self { tx }
    }

    /// A handle with no server behind it. Used by one-shot task commands and
    /// watch-only mode, where notifications become no-ops.
    pub fn detached() -> Self {
        Self::new()
    }

    /// Push a streaming (hot-apply) update for freshly written output files.
    pub fn stream(&self, paths: Vec<String>) {
        debug!(count = paths.len(), "stream update");
        let _ = self.tx.send(ChangeEvent::Update { paths });
    }

    /// Trigger a full reload in connected clients.
    pub fn reload(&self) {
        debug!("full reload");
        let _ = self.tx.send(ChangeEvent::Reload);
    }

    /// Subscribe to the change events (used by the SSE endpoint).
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }
}

impl Default for ServerHandle {
    fn default() -> Self {
        Self::new()
    }
}

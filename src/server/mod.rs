// src/server/mod.rs

//! The local dev server.
//!
//! Serves the output directory statically and exposes the live-update
//! channel as a server-sent-event stream at `/__siteforge/events`. The
//! server has two states, stopped and running; a bind failure is fatal to
//! develop mode (there is no retry or recovery policy).

pub mod handle;

use std::convert::Infallible;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerSection;
use crate::paths::SERVE_DIR;

pub use handle::{ChangeEvent, ServerHandle};

/// A running dev server.
#[derive(Debug)]
pub struct DevServer {
    addr: SocketAddr,
}

impl DevServer {
    /// Bind `127.0.0.1:<port>` and start serving `<root>/dist` in the
    /// background. The returned value is proof the server is running; the
    /// watcher must only be started afterwards so early change events always
    /// have a server to notify.
    pub async fn start(root: &Path, cfg: &ServerSection, handle: ServerHandle) -> Result<DevServer> {
        let serve_dir = root.join(SERVE_DIR);

        let app = Router::new()
            .route("/__siteforge/events", get(change_events))
            .fallback_service(ServeDir::new(&serve_dir))
            .layer(TraceLayer::new_for_http())
            .with_state(handle);

        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, cfg.port))
            .await
            .with_context(|| format!("binding dev server on 127.0.0.1:{}", cfg.port))?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                error!(error = %err, "dev server stopped unexpectedly");
            }
        });

        info!(%addr, dir = ?serve_dir, "dev server running");
        Ok(DevServer { addr })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

/// SSE endpoint streaming [`ChangeEvent`]s to connected clients.
async fn change_events(
    State(handle): State<ServerHandle>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(handle.subscribe()).filter_map(|msg| match msg {
        Ok(ev) => Some(Ok(sse_event(ev))),
        // A lagged receiver skipped events; clients recover on the next one.
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

fn sse_event(ev: ChangeEvent) -> Event {
    match ev {
        ChangeEvent::Update { paths } => Event::default().event("update").data(paths.join("\n")),
        ChangeEvent::Reload => Event::default().event("reload").data("reload"),
    }
}

//! Real-time sync feed
//!
//! Socket.io broadcast channel for change notifications. Admin clients
//! subscribe once and replace their local list wholesale on every `sync`
//! event; the per-resource version inside the payload lets them detect
//! missed updates and refetch.
//!
//! The feed is created with the server state and attached to the socket.io
//! layer during server startup; publishes before attachment (or with no
//! connected clients) are silently dropped - delivery is best-effort and
//! never fails the mutation that triggered it.

use std::sync::{Arc, OnceLock};

use socketioxide::SocketIo;

use shared::sync::SyncPayload;

/// Broadcast handle for sync notifications - cheap to clone
#[derive(Clone, Default)]
pub struct SyncFeed {
    io: Arc<OnceLock<SocketIo>>,
}

impl SyncFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the socket.io instance once the layer exists.
    ///
    /// Later attach calls are ignored; the feed binds to the first socket
    /// layer the server creates.
    pub fn attach(&self, io: SocketIo) {
        if self.io.set(io).is_err() {
            tracing::debug!("sync feed already attached, ignoring");
        }
    }

    /// Broadcast one change notification to every connected client
    pub async fn publish(&self, payload: &SyncPayload) {
        let Some(io) = self.io.get() else {
            return;
        };
        if let Err(e) = io.emit("sync", payload).await {
            tracing::debug!(error = %e, "sync broadcast dropped");
        }
    }
}

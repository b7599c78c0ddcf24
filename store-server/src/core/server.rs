//! Server Implementation
//!
//! HTTP server startup: router assembly, middleware layers, sync feed
//! socket, graceful shutdown.

use socketioxide::SocketIo;
use socketioxide::extract::SocketRef;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::{Config, ServerState};
use crate::db::seed;

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (tests, embedded setups)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        if state.config.seed_sample_data {
            if let Err(e) = seed::seed_sample_catalog(&state.db).await {
                tracing::warn!("Sample catalog seeding failed: {e}");
            }
        }

        // Sync feed socket; clients subscribe and receive SyncPayload events
        let (socket_layer, io) = SocketIo::new_layer();
        io.ns("/", async |socket: SocketRef| {
            tracing::debug!(sid = %socket.id, "sync feed client connected");
        });
        state.feed.attach(io);

        let app = crate::api::router(state)
            .layer(socket_layer)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("Store server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
            })
            .await?;

        Ok(())
    }
}

//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the album handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, metrics)
//! - Bind server to listener
//! - Serve until the shutdown signal fires, then drain

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::catalog::AlbumStore;
use crate::config::CatalogConfig;
use crate::http::handlers;
use crate::http::middleware::track_requests;
use crate::http::request::{request_span, UuidRequestId};
use crate::lifecycle::shutdown;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: AlbumStore,
}

/// Error type for server operations.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &CatalogConfig, state: AppState) -> Router {
    Router::new()
        .route(
            "/albums",
            get(handlers::list_albums).post(handlers::create_album),
        )
        .route("/albums/{id}", get(handlers::get_album))
        .route_layer(middleware::from_fn(track_requests))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.security.max_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.timeouts.request_secs,
                ))),
        )
}

/// HTTP server for the album catalog.
pub struct HttpServer {
    router: Router,
    config: CatalogConfig,
    store: AlbumStore,
}

impl HttpServer {
    /// Create a server whose store is seeded according to `config.store`.
    pub fn new(config: CatalogConfig) -> Self {
        let store = if config.store.seed {
            AlbumStore::seeded()
        } else {
            AlbumStore::new()
        };
        Self::with_store(config, store)
    }

    /// Create a server around an existing store.
    pub fn with_store(config: CatalogConfig, store: AlbumStore) -> Self {
        let state = AppState {
            store: store.clone(),
        };
        let router = build_router(&config, state);
        Self {
            router,
            config,
            store,
        }
    }

    /// Bind the configured listener address.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let address = &self.config.listener.bind_address;
        TcpListener::bind(address.as_str())
            .await
            .map_err(|source| ServerError::Bind {
                address: address.clone(),
                source,
            })
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown_rx` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        self.publish_store_size();
        tracing::info!(
            address = %addr,
            albums = self.store.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Set the store-size gauge from the current store contents.
    pub fn publish_store_size(&self) {
        metrics::record_store_size(self.store.len());
    }

    /// A handle to the router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn store(&self) -> &AlbumStore {
        &self.store
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

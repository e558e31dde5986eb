//! Shared utilities for integration tests.

use std::net::SocketAddr;

use album_catalog::{AlbumStore, CatalogConfig, HttpServer, Shutdown};
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use tokio::net::TcpListener;

/// A running catalog bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: AlbumStore,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<()>,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn stop(self) {
        self.shutdown.trigger();
        let _ = self.handle.await;
    }
}

/// Start a seeded server on `127.0.0.1:0`.
#[allow(dead_code)]
pub async fn start_server() -> TestServer {
    start_server_with_store(AlbumStore::seeded()).await
}

#[allow(dead_code)]
pub async fn start_server_with_store(store: AlbumStore) -> TestServer {
    let mut config = CatalogConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();

    let server = HttpServer::with_store(config, store.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        store,
        shutdown,
        handle,
    }
}

/// Router for a seeded catalog, driven without sockets.
#[allow(dead_code)]
pub fn seeded_router() -> (axum::Router, AlbumStore) {
    let server = HttpServer::with_store(CatalogConfig::default(), AlbumStore::seeded());
    (server.router(), server.store().clone())
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

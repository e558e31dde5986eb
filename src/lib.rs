//! In-memory album catalog served over a small JSON HTTP API.

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use catalog::{Album, AlbumStore};
pub use config::CatalogConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

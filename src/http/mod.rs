//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, access-log span)
//!     → middleware/ (per-route metrics)
//!     → handlers.rs (read or append the album store)
//!     → response.rs (indented JSON, error mapping)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::{ApiError, ErrorBody, PrettyJson};
pub use server::{build_router, AppState, HttpServer, ServerError};

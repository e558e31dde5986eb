//! Async client for the album catalog HTTP API.

pub mod client;

pub use client::{Album, CatalogClient, ClientError};

//! Album catalog domain.
//!
//! # Data Flow
//! ```text
//! startup
//!     → album.rs (seed_albums: three fixed entries)
//!     → store.rs (AlbumStore, shared via Arc to all handlers)
//!
//! request
//!     → http::handlers borrow the store for one read or one append
//! ```
//!
//! # Design Decisions
//! - Storage is volatile; nothing survives process exit
//! - Insertion order is the only ordering
//! - Ids are caller-supplied and never checked for collisions

pub mod album;
pub mod store;

pub use album::{seed_albums, Album};
pub use store::AlbumStore;

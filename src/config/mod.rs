//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI overrides applied by the binary
//!     → validation.rs (semantic checks)
//!     → CatalogConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    CatalogConfig, ListenerConfig, LogFormat, ObservabilityConfig, SecurityConfig, StoreConfig,
    TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};

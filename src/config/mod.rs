//! Configuration loading, parsing, and validation.
//!
//! # Modules
//!
//! - [`loader`] - Config file discovery and parsing
//! - [`schema`] - Serde types mapping the `belay.yml` format

pub mod loader;
pub mod schema;

pub use loader::{discover, load_config, parse_file};
pub use schema::{BelayConfig, BuildConfig, ModuleConfig, OnUnusable, Settings, VersionConfig};

//! Configuration module for Resolver Audit
//!
//! - `root`: Main configuration and CLI overrides
//! - `sources`: Where each resolver source reads from
//! - `namespace`: Isolated-worker settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod namespace;
pub mod root;
pub mod sources;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use namespace::NamespaceConfig;
pub use root::{CliOverrides, Config};
pub use sources::{SourcesConfig, DEFAULT_NETWORK_MANAGER_COMMAND, DEFAULT_RESOLV_CONF_PATH};

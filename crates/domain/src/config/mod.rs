//! Configuration module for ipgroups
//!
//! Configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Web server port and binding
//! - `resolver`: DNS lookup settings
//! - `cache`: Cache TTL and refresh cadence
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;

//! ipgroups Domain Layer
pub mod config;
pub mod errors;
pub mod family;
pub mod group;
pub mod resolution;
pub mod stats;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use family::AddressFamily;
pub use group::GroupSet;
pub use resolution::Resolution;
pub use stats::CacheStats;

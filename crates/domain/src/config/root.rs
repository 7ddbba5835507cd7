use serde::Deserialize;
use std::collections::HashMap;

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;
use crate::group::GroupSet;

/// Main configuration structure for ipgroups
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Web server configuration (port, bind address, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// DNS lookup configuration
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Cache TTL and refresh cadence
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Optional JSON file with `{"name": ["domain", ...]}` group lists,
    /// merged over the `[groups]` table (the file wins per group name).
    #[serde(default)]
    pub groups_file: Option<String>,

    /// Domain groups: `name = ["domain", ...]`
    #[serde(default)]
    pub groups: GroupSet,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ipgroups.toml in current directory
    /// 3. /etc/ipgroups/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("ipgroups.toml").exists() {
            Self::from_file("ipgroups.toml")?
        } else if std::path::Path::new("/etc/ipgroups/config.toml").exists() {
            Self::from_file("/etc/ipgroups/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.merge_groups_file()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(timeout) = overrides.timeout_ms {
            self.resolver.timeout_ms = timeout;
        }
        if let Some(ttl) = overrides.ttl_secs {
            self.cache.ttl_secs = ttl;
        }
        if let Some(interval) = overrides.refresh_interval_secs {
            self.cache.refresh_interval_secs = interval;
        }
    }

    /// Merge group lists from `groups_file` over the `[groups]` table
    fn merge_groups_file(&mut self) -> Result<(), ConfigError> {
        let Some(path) = &self.groups_file else {
            return Ok(());
        };

        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.clone(), e.to_string()))?;
        let file_groups: HashMap<String, Vec<String>> = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("groups file '{}': {}", path, e)))?;

        for (name, domains) in file_groups {
            self.groups.insert(&name, domains);
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Validation("Cache TTL cannot be 0".to_string()));
        }

        if self.cache.refresh_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Refresh interval cannot be 0".to_string(),
            ));
        }

        for (name, domains) in self.groups.iter() {
            if name.is_empty() {
                return Err(ConfigError::Validation(
                    "Group name cannot be empty".to_string(),
                ));
            }
            if domains.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Group '{}' has no domains",
                    name
                )));
            }
            if domains.iter().any(|d| d.is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "Group '{}' contains an empty domain name",
                    name
                )));
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub timeout_ms: Option<u64>,
    pub ttl_secs: Option<u64>,
    pub refresh_interval_secs: Option<u64>,
}

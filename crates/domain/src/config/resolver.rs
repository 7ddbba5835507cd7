use serde::Deserialize;

/// DNS lookup settings
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// Per-lookup deadline in milliseconds. A lookup that exceeds it
    /// yields an empty result, never an error.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    2000
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

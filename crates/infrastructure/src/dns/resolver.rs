use async_trait::async_trait;
use ipgroups_application::ports::IpResolver;
use ipgroups_domain::AddressFamily;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// Resolver backed by the operating system's lookup path.
///
/// Each lookup runs under its own deadline; timeouts and lookup errors
/// both collapse to an empty result, so callers never see an error from
/// this adapter.
pub struct SystemIpResolver {
    timeout: Duration,
}

impl SystemIpResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl IpResolver for SystemIpResolver {
    async fn resolve_with_filter(&self, domain: &str, family: AddressFamily) -> Vec<IpAddr> {
        // Port 0 is only there to satisfy the lookup API
        let lookup = tokio::net::lookup_host((domain, 0));

        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(addrs)) => addrs
                .map(|addr| addr.ip())
                .filter(|ip| family.matches(ip))
                .collect(),
            Ok(Err(e)) => {
                debug!(domain = %domain, family = %family, error = %e, "Lookup failed");
                Vec::new()
            }
            Err(_) => {
                debug!(
                    domain = %domain,
                    family = %family,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Lookup timed out"
                );
                Vec::new()
            }
        }
    }
}

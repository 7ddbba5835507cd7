use async_trait::async_trait;
use ipgroups_domain::{AddressFamily, Resolution};
use std::net::IpAddr;
use std::sync::Arc;

/// Upstream lookup primitive the cache and the serving layer depend on.
///
/// Lookup failure and timeout are absorbed here: both operations return
/// empty results, never an error. A caller cannot distinguish "lookup
/// failed" from "domain has no records" — by contract.
#[async_trait]
pub trait IpResolver: Send + Sync {
    /// Resolve a single domain, keeping only addresses matching `family`.
    async fn resolve_with_filter(&self, domain: &str, family: AddressFamily) -> Vec<IpAddr>;

    /// Resolve each domain independently, preserving input order. An
    /// individual failure yields an empty `ips` list for that domain and
    /// does not terminate the batch.
    async fn resolve_many_with_filter(
        &self,
        domains: &[Arc<str>],
        family: AddressFamily,
    ) -> Vec<Resolution> {
        let mut results = Vec::with_capacity(domains.len());
        for domain in domains {
            let ips = self.resolve_with_filter(domain, family).await;
            results.push(Resolution::new(Arc::clone(domain), ips));
        }
        results
    }
}

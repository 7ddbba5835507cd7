use crate::ports::IpResolver;
use ipgroups_domain::{AddressFamily, Resolution};
use std::sync::Arc;
use tracing::debug;

/// Resolve a group's domain list through the upstream resolver.
///
/// Used by the serving layer to fill cache misses; the refresh job goes
/// through the cache's own update path instead.
pub struct ResolveGroupUseCase {
    resolver: Arc<dyn IpResolver>,
}

impl ResolveGroupUseCase {
    pub fn new(resolver: Arc<dyn IpResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, domains: &[Arc<str>], family: AddressFamily) -> Vec<Resolution> {
        debug!(domains = domains.len(), family = %family, "Resolving group");
        self.resolver.resolve_many_with_filter(domains, family).await
    }
}

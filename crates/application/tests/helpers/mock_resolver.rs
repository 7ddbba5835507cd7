#![allow(dead_code)]

use async_trait::async_trait;
use ipgroups_application::ports::IpResolver;
use ipgroups_domain::AddressFamily;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory resolver with canned per-domain answers. Unknown domains
/// resolve to nothing, the same way a failed lookup does.
pub struct MockIpResolver {
    responses: RwLock<HashMap<String, Vec<IpAddr>>>,
    call_count: AtomicUsize,
}

impl MockIpResolver {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    pub async fn set_response(&self, domain: &str, ips: Vec<IpAddr>) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), ips);
    }

    /// Number of single-domain lookups performed so far.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockIpResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IpResolver for MockIpResolver {
    async fn resolve_with_filter(&self, domain: &str, family: AddressFamily) -> Vec<IpAddr> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let responses = self.responses.read().await;
        responses
            .get(domain)
            .map(|ips| {
                ips.iter()
                    .copied()
                    .filter(|ip| family.matches(ip))
                    .collect()
            })
            .unwrap_or_default()
    }
}

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

pub fn domain_list(domains: &[&str]) -> Vec<Arc<str>> {
    domains.iter().map(|d| Arc::from(*d)).collect()
}

use serde::Serialize;
use std::net::IpAddr;
use std::sync::Arc;

/// One domain together with the addresses it resolved to, in
/// resolver-returned order. No de-duplication, no sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub domain: Arc<str>,
    pub ips: Vec<IpAddr>,
}

impl Resolution {
    pub fn new(domain: Arc<str>, ips: Vec<IpAddr>) -> Self {
        Self { domain, ips }
    }
}

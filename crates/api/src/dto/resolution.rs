use ipgroups_domain::Resolution;
use serde::Serialize;
use std::net::IpAddr;

/// Response DTO for one resolved domain
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionEntry {
    pub domain: String,
    pub ips: Vec<IpAddr>,
}

impl From<&Resolution> for ResolutionEntry {
    fn from(resolution: &Resolution) -> Self {
        Self {
            domain: resolution.domain.to_string(),
            ips: resolution.ips.clone(),
        }
    }
}

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Address-family filter applied to resolved addresses.
///
/// Used both as the cache's inner key and as the resolver filter. On the
/// HTTP surface it maps to the `type` query parameter: absent or empty
/// means `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    All,
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    /// Every variant, in the order refresh cycles visit them.
    pub const ALL: [AddressFamily; 3] = [Self::All, Self::Ipv4, Self::Ipv6];

    /// Parse the `type` query parameter.
    pub fn from_query(value: Option<&str>) -> Result<Self, DomainError> {
        match value.unwrap_or("") {
            "" => Ok(Self::All),
            "ipv4" => Ok(Self::Ipv4),
            "ipv6" => Ok(Self::Ipv6),
            other => Err(DomainError::InvalidAddressFamily(other.to_string())),
        }
    }

    pub fn matches(&self, ip: &IpAddr) -> bool {
        match self {
            Self::All => true,
            Self::Ipv4 => ip.is_ipv4(),
            Self::Ipv6 => ip.is_ipv6(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Local systemd-resolved stub listener. It proxies to the real upstreams and
/// is never reported as a nameserver from resolv.conf.
pub const STUB_LISTENER_ADDRESS: &str = "127.0.0.53";

/// Netmask reported for plain nameservers (a host route).
pub const HOST_NETMASK: u32 = 32;

/// `pid_with_namespace` value for rows collected outside any namespace.
pub const NO_NAMESPACE: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Nameserver,
    Sortlist,
    Search,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Nameserver => "nameserver",
            EntryType::Sortlist => "sortlist",
            EntryType::Search => "search",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nameserver" => Ok(EntryType::Nameserver),
            "sortlist" => Ok(EntryType::Sortlist),
            "search" => Ok(EntryType::Search),
            other => Err(DomainError::InvalidEntryType(other.to_string())),
        }
    }
}

/// One row of the resolver table.
///
/// `id` is only unique within the scope that numbered it: the shared counter of
/// the file + network-manager strategy, or one entry type of the resolver
/// library strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverEntry {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub address: String,
    #[serde(default)]
    pub netmask: Option<u32>,
    /// Resolver library option flags; only set for library-sourced rows.
    #[serde(default)]
    pub options: Option<u64>,
    pub pid_with_namespace: String,
}

impl ResolverEntry {
    /// Nameserver read from resolv.conf or scraped from the network manager.
    pub fn nameserver(id: u32, address: impl Into<String>) -> Self {
        Self {
            id,
            kind: EntryType::Nameserver,
            address: address.into(),
            netmask: Some(HOST_NETMASK),
            options: None,
            pid_with_namespace: NO_NAMESPACE.to_string(),
        }
    }

    pub fn library_nameserver(id: u32, address: impl Into<String>, options: u64) -> Self {
        Self {
            options: Some(options),
            ..Self::nameserver(id, address)
        }
    }

    pub fn sortlist(id: u32, address: impl Into<String>, mask: u32, options: u64) -> Self {
        Self {
            id,
            kind: EntryType::Sortlist,
            address: address.into(),
            netmask: Some(mask),
            options: Some(options),
            pid_with_namespace: NO_NAMESPACE.to_string(),
        }
    }

    pub fn search(id: u32, domain: impl Into<String>, options: u64) -> Self {
        Self {
            id,
            kind: EntryType::Search,
            address: domain.into(),
            netmask: None,
            options: Some(options),
            pid_with_namespace: NO_NAMESPACE.to_string(),
        }
    }

    /// Stamps the row with the pid whose namespace it was collected in.
    pub fn in_namespace(mut self, pid: u32) -> Self {
        self.pid_with_namespace = pid.to_string();
        self
    }
}

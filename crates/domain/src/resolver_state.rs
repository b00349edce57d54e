use std::net::{IpAddr, Ipv4Addr};

/// Capacity of the resolver library's search-domain array (MAXDNSRCH).
pub const MAX_SEARCH_DOMAINS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortlistEntry {
    pub address: Ipv4Addr,
    /// Mask exactly as the resolver library stores it.
    pub mask: u32,
}

/// Owned copy of the resolver library's default state.
///
/// The library state lives only between init and close; readers copy what they
/// need into this struct before releasing it, so nothing here points into
/// library memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverState {
    pub options: u64,
    pub nameservers: Vec<IpAddr>,
    pub sortlist: Vec<SortlistEntry>,
    /// Fixed-capacity slot array; `None` marks an empty slot.
    pub search: Vec<Option<String>>,
}

impl ResolverState {
    pub fn new(options: u64) -> Self {
        Self {
            options,
            nameservers: Vec::new(),
            sortlist: Vec::new(),
            search: vec![None; MAX_SEARCH_DOMAINS],
        }
    }

    pub fn with_nameserver(mut self, address: IpAddr) -> Self {
        self.nameservers.push(address);
        self
    }

    pub fn with_sortlist(mut self, address: Ipv4Addr, mask: u32) -> Self {
        self.sortlist.push(SortlistEntry { address, mask });
        self
    }

    /// Fills search slot `slot`. Slots past the fixed capacity are ignored.
    pub fn with_search_slot(mut self, slot: usize, domain: impl Into<String>) -> Self {
        if let Some(entry) = self.search.get_mut(slot) {
            *entry = Some(domain.into());
        }
        self
    }
}

use crate::ports::{ResolverAggregation, ResolverStateReader};
use async_trait::async_trait;
use resolver_audit_domain::{QueryContext, ResolverEntry, ResolverState};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case: report the OS resolver library's default state
///
/// All-or-nothing: if the library cannot be initialized the table is empty.
pub struct CollectLibraryResolversUseCase {
    reader: Arc<dyn ResolverStateReader>,
}

impl CollectLibraryResolversUseCase {
    pub fn new(reader: Arc<dyn ResolverStateReader>) -> Self {
        Self { reader }
    }

    pub async fn execute(&self) -> Vec<ResolverEntry> {
        match self.reader.read_state().await {
            Ok(state) => {
                let entries = entries_from_state(&state);
                debug!(
                    nameservers = state.nameservers.len(),
                    sortlist = state.sortlist.len(),
                    rows = entries.len(),
                    "Resolver library state read"
                );
                entries
            }
            Err(e) => {
                warn!(error = %e, "Resolver library unavailable");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl ResolverAggregation for CollectLibraryResolversUseCase {
    async fn aggregate(&self, _context: &QueryContext) -> Vec<ResolverEntry> {
        self.execute().await
    }
}

/// Converts a library snapshot into rows: nameservers, then sortlist, then
/// search domains.
///
/// Ids are per type: nameservers and sortlist rows use their slot index, and
/// search rows use the index of their slot in the fixed array, so gaps are
/// possible there. Every row carries the same options value.
pub fn entries_from_state(state: &ResolverState) -> Vec<ResolverEntry> {
    let options = state.options;

    let nameservers = state
        .nameservers
        .iter()
        .enumerate()
        .map(|(slot, addr)| ResolverEntry::library_nameserver(slot as u32, addr.to_string(), options));

    let sortlist = state
        .sortlist
        .iter()
        .enumerate()
        .map(|(slot, sort)| {
            ResolverEntry::sortlist(slot as u32, sort.address.to_string(), sort.mask, options)
        });

    let search = state
        .search
        .iter()
        .enumerate()
        .filter_map(|(slot, domain)| {
            domain
                .as_ref()
                .map(|domain| ResolverEntry::search(slot as u32, domain.clone(), options))
        });

    nameservers.chain(sortlist).chain(search).collect()
}

use crate::ports::{NameserverSource, ResolverAggregation};
use async_trait::async_trait;
use resolver_audit_domain::{QueryContext, ResolverEntry};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case: merge the nameservers stated by text sources into one table
///
/// Sources run in the order given. One counter numbers every row, so ids are
/// strictly increasing across the merged table and earlier sources come first.
/// Identical addresses from different sources are all kept.
pub struct CollectConfiguredResolversUseCase {
    sources: Vec<Arc<dyn NameserverSource>>,
}

impl CollectConfiguredResolversUseCase {
    pub fn new(sources: Vec<Arc<dyn NameserverSource>>) -> Self {
        Self { sources }
    }

    pub async fn execute(&self) -> Vec<ResolverEntry> {
        let mut entries = Vec::new();
        let mut next_id: u32 = 0;

        for source in &self.sources {
            let addresses = match source.read_nameservers().await {
                Ok(addresses) => addresses,
                Err(e) => {
                    warn!(source = source.name(), error = %e, "Resolver source unavailable, skipping");
                    continue;
                }
            };

            debug!(source = source.name(), count = addresses.len(), "Resolver source read");

            for address in addresses {
                entries.push(ResolverEntry::nameserver(next_id, address));
                next_id += 1;
            }
        }

        entries
    }
}

#[async_trait]
impl ResolverAggregation for CollectConfiguredResolversUseCase {
    async fn aggregate(&self, _context: &QueryContext) -> Vec<ResolverEntry> {
        self.execute().await
    }
}

use async_trait::async_trait;
use resolver_audit_domain::{QueryContext, ResolverEntry};

/// One way of producing the full resolver table for a query.
///
/// Implementations never fail: unavailable sources shrink the result instead.
#[async_trait]
pub trait ResolverAggregation: Send + Sync {
    async fn aggregate(&self, context: &QueryContext) -> Vec<ResolverEntry>;
}

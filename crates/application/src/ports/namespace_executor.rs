use async_trait::async_trait;
use resolver_audit_domain::{DomainError, QueryContext, ResolverEntry};

/// Runs an aggregation inside the namespaces of another process.
#[async_trait]
pub trait NamespaceExecutor: Send + Sync {
    async fn execute(
        &self,
        pid: u32,
        context: &QueryContext,
    ) -> Result<Vec<ResolverEntry>, DomainError>;
}

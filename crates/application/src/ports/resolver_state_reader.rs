use async_trait::async_trait;
use resolver_audit_domain::{DomainError, ResolverState};

#[async_trait]
pub trait ResolverStateReader: Send + Sync {
    /// Initializes the OS resolver library, copies its default state and
    /// releases it again. Initialization failure is the only error.
    async fn read_state(&self) -> Result<ResolverState, DomainError>;
}

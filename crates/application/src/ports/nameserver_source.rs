use async_trait::async_trait;
use resolver_audit_domain::DomainError;

/// A medium that states nameserver addresses in plain text (a config file, a
/// network manager's output, ...).
///
/// Sources only extract addresses; numbering them into rows is the
/// aggregator's job.
#[async_trait]
pub trait NameserverSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    async fn read_nameservers(&self) -> Result<Vec<String>, DomainError>;
}

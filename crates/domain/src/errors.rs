use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Resolver library initialization failed: {0}")]
    ResolverInitFailed(String),

    #[error("Namespace execution failed: {0}")]
    NamespaceExecution(String),

    #[error("Invalid entry type: {0}")]
    InvalidEntryType(String),

    #[error("Invalid aggregation strategy: {0}")]
    InvalidStrategy(String),
}

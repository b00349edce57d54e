//! Resolver Audit Domain Layer
pub mod config;
pub mod errors;
pub mod query_context;
pub mod resolver_entry;
pub mod resolver_state;
pub mod strategy;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use query_context::QueryContext;
pub use resolver_entry::{
    EntryType, ResolverEntry, HOST_NETMASK, NO_NAMESPACE, STUB_LISTENER_ADDRESS,
};
pub use resolver_state::{ResolverState, SortlistEntry, MAX_SEARCH_DOMAINS};
pub use strategy::AggregationStrategy;

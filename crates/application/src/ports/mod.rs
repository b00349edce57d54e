pub mod namespace_executor;
pub mod nameserver_source;
pub mod resolver_aggregation;
pub mod resolver_state_reader;

pub use namespace_executor::NamespaceExecutor;
pub use nameserver_source::NameserverSource;
pub use resolver_aggregation::ResolverAggregation;
pub use resolver_state_reader::ResolverStateReader;

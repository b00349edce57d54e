pub mod mock_sources;

pub use mock_sources::{MockNameserverSource, MockNamespaceExecutor, MockResolverStateReader};

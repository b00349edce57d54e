use crate::ports::{NamespaceExecutor, ResolverAggregation};
use resolver_audit_domain::{QueryContext, ResolverEntry};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case: answer a resolver query, in this process or in another
/// process's namespaces
///
/// The aggregation itself is chosen by whoever builds this use case; this type
/// only decides where it runs.
pub struct DispatchResolversUseCase {
    aggregation: Arc<dyn ResolverAggregation>,
    namespace_executor: Arc<dyn NamespaceExecutor>,
}

impl DispatchResolversUseCase {
    pub fn new(
        aggregation: Arc<dyn ResolverAggregation>,
        namespace_executor: Arc<dyn NamespaceExecutor>,
    ) -> Self {
        Self {
            aggregation,
            namespace_executor,
        }
    }

    pub async fn execute(&self, context: &QueryContext) -> Vec<ResolverEntry> {
        let pid = match context.pid_with_namespace {
            Some(pid) if context.has_namespace_constraint() => pid,
            _ => return self.aggregation.aggregate(context).await,
        };

        debug!(pid, "Collecting resolvers inside process namespace");

        match self.namespace_executor.execute(pid, context).await {
            Ok(entries) => entries
                .into_iter()
                .map(|entry| entry.in_namespace(pid))
                .collect(),
            Err(e) => {
                warn!(pid, error = %e, "Namespace worker failed");
                Vec::new()
            }
        }
    }
}

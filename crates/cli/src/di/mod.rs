use resolver_audit_application::ports::{NameserverSource, ResolverAggregation};
use resolver_audit_application::use_cases::{
    CollectConfiguredResolversUseCase, CollectLibraryResolversUseCase, DispatchResolversUseCase,
};
use resolver_audit_domain::{AggregationStrategy, Config};
use resolver_audit_infrastructure::system::{
    LibResolvReader, NetworkManagerReader, NsenterExecutor, ResolvConfReader,
};
use std::sync::Arc;

/// Builds the aggregation selected by `config.sources.strategy`.
pub fn build_aggregation(config: &Config) -> Arc<dyn ResolverAggregation> {
    match config.sources.strategy {
        AggregationStrategy::Files => {
            let sources: Vec<Arc<dyn NameserverSource>> = vec![
                Arc::new(ResolvConfReader::with_path(
                    config.sources.resolv_conf_path.clone(),
                )),
                Arc::new(NetworkManagerReader::with_command(
                    config.sources.network_manager_command.clone(),
                )),
            ];
            Arc::new(CollectConfiguredResolversUseCase::new(sources))
        }
        AggregationStrategy::Library => Arc::new(CollectLibraryResolversUseCase::new(Arc::new(
            LibResolvReader::new(),
        ))),
    }
}

pub fn build_dispatcher(config: &Config) -> DispatchResolversUseCase {
    let executor = NsenterExecutor::new(
        config.namespace.nsenter_path.clone(),
        config.sources.strategy,
    );

    DispatchResolversUseCase::new(build_aggregation(config), Arc::new(executor))
}

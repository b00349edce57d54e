use resolver_audit_application::ports::NameserverSource;
use resolver_audit_application::use_cases::{
    CollectConfiguredResolversUseCase, DispatchResolversUseCase,
};
use resolver_audit_domain::{QueryContext, ResolverEntry};
use std::sync::Arc;

mod helpers;
use helpers::{MockNameserverSource, MockNamespaceExecutor};

fn local_aggregation(source: Arc<MockNameserverSource>) -> Arc<CollectConfiguredResolversUseCase> {
    Arc::new(CollectConfiguredResolversUseCase::new(vec![
        source as Arc<dyn NameserverSource>,
    ]))
}

#[tokio::test]
async fn test_without_namespace_runs_locally() {
    // Arrange
    let source = Arc::new(MockNameserverSource::with_addresses(
        "resolv.conf",
        &["1.1.1.1"],
    ));
    let executor = Arc::new(MockNamespaceExecutor::new());
    let use_case = DispatchResolversUseCase::new(local_aggregation(source.clone()), executor.clone());

    // Act
    let entries = use_case.execute(&QueryContext::new()).await;

    // Assert
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].pid_with_namespace, "0");
    assert_eq!(source.call_count(), 1);
    assert!(executor.seen_pids().is_empty());
}

#[tokio::test]
async fn test_namespace_constraint_delegates_and_stamps_pid() {
    // Arrange
    let source = Arc::new(MockNameserverSource::with_addresses(
        "resolv.conf",
        &["1.1.1.1"],
    ));
    let executor = Arc::new(MockNamespaceExecutor::with_entries(vec![
        ResolverEntry::nameserver(0, "10.96.0.10"),
        ResolverEntry::nameserver(1, "10.96.0.11"),
    ]));
    let use_case = DispatchResolversUseCase::new(local_aggregation(source.clone()), executor.clone());

    // Act
    let entries = use_case.execute(&QueryContext::in_namespace_of(777)).await;

    // Assert
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.pid_with_namespace == "777"));
    assert_eq!(entries[0].address, "10.96.0.10");
    assert_eq!(executor.seen_pids(), vec![777]);
    assert_eq!(source.call_count(), 0);
}

#[tokio::test]
async fn test_failed_worker_yields_empty_table() {
    let source = Arc::new(MockNameserverSource::with_addresses(
        "resolv.conf",
        &["1.1.1.1"],
    ));
    let use_case = DispatchResolversUseCase::new(
        local_aggregation(source),
        Arc::new(MockNamespaceExecutor::failing()),
    );

    let entries = use_case.execute(&QueryContext::in_namespace_of(31337)).await;

    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_pid_zero_is_not_delegated() {
    let source = Arc::new(MockNameserverSource::with_addresses(
        "resolv.conf",
        &["1.1.1.1"],
    ));
    let executor = Arc::new(MockNamespaceExecutor::new());
    let use_case = DispatchResolversUseCase::new(local_aggregation(source), executor.clone());

    let entries = use_case.execute(&QueryContext::in_namespace_of(0)).await;

    assert_eq!(entries.len(), 1);
    assert!(executor.seen_pids().is_empty());
}

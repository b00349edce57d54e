use resolver_audit_application::ports::ResolverStateReader;
use resolver_audit_application::use_cases::CollectLibraryResolversUseCase;
use resolver_audit_domain::MAX_SEARCH_DOMAINS;
use resolver_audit_infrastructure::system::{read_default_state, LibResolvReader};
use std::sync::Arc;

// These tests read the host's real resolver configuration, so they only
// assert properties that hold for any configuration.

#[tokio::test]
async fn test_consecutive_reads_are_identical() {
    let reader = LibResolvReader::new();

    let first = reader.read_state().await.ok();
    let second = reader.read_state().await.ok();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_state_respects_library_capacities() {
    if let Ok(state) = LibResolvReader::new().read_state().await {
        assert!(state.nameservers.len() <= 3);
        assert!(state.sortlist.len() <= 10);
        assert_eq!(state.search.len(), MAX_SEARCH_DOMAINS);
    }
}

#[tokio::test]
async fn test_rows_share_one_options_value() {
    let use_case = CollectLibraryResolversUseCase::new(Arc::new(LibResolvReader::new()));

    let entries = use_case.execute().await;

    if let Some(first) = entries.first() {
        assert!(entries.iter().all(|e| e.options == first.options));
        assert!(first.options.is_some());
    }
}

#[test]
fn test_concurrent_readers_are_serialized() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| read_default_state().ok()))
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

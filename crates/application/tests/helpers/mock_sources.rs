#![allow(dead_code)]

use async_trait::async_trait;
use resolver_audit_application::ports::{
    NameserverSource, NamespaceExecutor, ResolverStateReader,
};
use resolver_audit_domain::{DomainError, QueryContext, ResolverEntry, ResolverState};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock NameserverSource
// ============================================================================

pub struct MockNameserverSource {
    name: &'static str,
    addresses: Vec<String>,
    should_fail: bool,
    call_count: Arc<AtomicU64>,
}

impl MockNameserverSource {
    pub fn with_addresses(name: &'static str, addresses: &[&str]) -> Self {
        Self {
            name,
            addresses: addresses.iter().map(|a| a.to_string()).collect(),
            should_fail: false,
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn failing(name: &'static str) -> Self {
        Self {
            should_fail: true,
            ..Self::with_addresses(name, &[])
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl NameserverSource for MockNameserverSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn read_nameservers(&self) -> Result<Vec<String>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail {
            return Err(DomainError::SourceUnavailable(format!(
                "{} unavailable",
                self.name
            )));
        }
        Ok(self.addresses.clone())
    }
}

// ============================================================================
// Mock ResolverStateReader
// ============================================================================

pub struct MockResolverStateReader {
    state: Option<ResolverState>,
    call_count: Arc<AtomicU64>,
}

impl MockResolverStateReader {
    pub fn with_state(state: ResolverState) -> Self {
        Self {
            state: Some(state),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            state: None,
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ResolverStateReader for MockResolverStateReader {
    async fn read_state(&self) -> Result<ResolverState, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.state
            .clone()
            .ok_or_else(|| DomainError::ResolverInitFailed("res_ninit returned -1".to_string()))
    }
}

// ============================================================================
// Mock NamespaceExecutor
// ============================================================================

pub struct MockNamespaceExecutor {
    entries: Vec<ResolverEntry>,
    should_fail: bool,
    seen_pids: Mutex<Vec<u32>>,
}

impl MockNamespaceExecutor {
    pub fn new() -> Self {
        Self::with_entries(Vec::new())
    }

    pub fn with_entries(entries: Vec<ResolverEntry>) -> Self {
        Self {
            entries,
            should_fail: false,
            seen_pids: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn seen_pids(&self) -> Vec<u32> {
        self.seen_pids.lock().unwrap().clone()
    }
}

#[async_trait]
impl NamespaceExecutor for MockNamespaceExecutor {
    async fn execute(
        &self,
        pid: u32,
        _context: &QueryContext,
    ) -> Result<Vec<ResolverEntry>, DomainError> {
        self.seen_pids.lock().unwrap().push(pid);
        if self.should_fail {
            return Err(DomainError::NamespaceExecution(format!(
                "no such process {}",
                pid
            )));
        }
        Ok(self.entries.clone())
    }
}

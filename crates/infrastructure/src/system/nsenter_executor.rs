use async_trait::async_trait;
use resolver_audit_application::ports::NamespaceExecutor;
use resolver_audit_domain::{AggregationStrategy, DomainError, QueryContext, ResolverEntry};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs the aggregation in a child that joins the network and UTS namespaces
/// of the target process.
///
/// The child is this same binary re-executed through `nsenter`. It keeps the
/// host mount namespace (so the binary stays reachable) and reads the target's
/// resolv.conf through `/proc/<pid>/root`. Rows come back as JSON on stdout.
pub struct NsenterExecutor {
    nsenter_path: String,
    program: Option<PathBuf>,
    strategy: AggregationStrategy,
}

impl NsenterExecutor {
    pub fn new(nsenter_path: String, strategy: AggregationStrategy) -> Self {
        Self {
            nsenter_path,
            program: None,
            strategy,
        }
    }

    /// Use `program` as the worker instead of the current executable.
    pub fn with_program(mut self, program: PathBuf) -> Self {
        self.program = Some(program);
        self
    }

    fn program(&self) -> Result<PathBuf, DomainError> {
        match &self.program {
            Some(program) => Ok(program.clone()),
            None => std::env::current_exe().map_err(|e| {
                DomainError::NamespaceExecution(format!("Cannot locate worker binary: {}", e))
            }),
        }
    }

    pub fn resolv_conf_path(pid: u32) -> String {
        format!("/proc/{}/root/etc/resolv.conf", pid)
    }
}

#[async_trait]
impl NamespaceExecutor for NsenterExecutor {
    async fn execute(
        &self,
        pid: u32,
        _context: &QueryContext,
    ) -> Result<Vec<ResolverEntry>, DomainError> {
        let program = self.program()?;
        let resolv_conf = Self::resolv_conf_path(pid);

        debug!(
            pid,
            nsenter = %self.nsenter_path,
            strategy = %self.strategy,
            "Spawning namespace worker"
        );

        let output = Command::new(&self.nsenter_path)
            .arg("--target")
            .arg(pid.to_string())
            .arg("--net")
            .arg("--uts")
            .arg("--")
            .arg(&program)
            .arg("--strategy")
            .arg(self.strategy.as_str())
            .arg("--resolv-conf")
            .arg(&resolv_conf)
            .arg("--format")
            .arg("json")
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                DomainError::NamespaceExecution(format!(
                    "Failed to spawn {}: {}",
                    self.nsenter_path, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DomainError::NamespaceExecution(format!(
                "Worker for pid {} exited with {}: {}",
                pid,
                output.status,
                stderr.trim()
            )));
        }

        let entries: Vec<ResolverEntry> = serde_json::from_slice(&output.stdout).map_err(|e| {
            DomainError::NamespaceExecution(format!("Invalid worker output: {}", e))
        })?;

        debug!(pid, rows = entries.len(), "Namespace worker finished");
        Ok(entries)
    }
}

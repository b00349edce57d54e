use async_trait::async_trait;
use resolver_audit_application::ports::NameserverSource;
use resolver_audit_domain::config::DEFAULT_NETWORK_MANAGER_COMMAND;
use resolver_audit_domain::DomainError;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, warn};

const READ_BUFFER_SIZE: usize = 128;

/// Extracts the value of a `key: value` line such as `IP4.DNS[1]: 8.8.8.8`.
///
/// Everything after the first colon is the value, trimmed on both sides.
/// Lines without a colon or with an empty value yield None.
pub fn parse_device_dns_line(line: &str) -> Option<String> {
    let (_, value) = line.split_once(':')?;
    let value = value.trim_matches(&[' ', '\t', '\r', '\n'][..]);

    if value.is_empty() {
        return None;
    }

    Some(value.to_string())
}

/// Drains `reader` to EOF and returns the value of every DNS line.
pub async fn collect_dns_values<R>(reader: R) -> Result<Vec<String>, DomainError>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, reader);
    let mut line = Vec::with_capacity(READ_BUFFER_SIZE);
    let mut values = Vec::new();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to read command output: {}", e)))?;
        if read == 0 {
            break;
        }

        if let Some(value) = parse_device_dns_line(&String::from_utf8_lossy(&line)) {
            values.push(value);
        }
    }

    Ok(values)
}

/// Scrapes nameservers from NetworkManager's device status
///
/// One shell child per call. The child is always waited for, and killed if
/// the future is dropped mid-read.
pub struct NetworkManagerReader {
    command: String,
}

impl NetworkManagerReader {
    pub fn new() -> Self {
        Self {
            command: DEFAULT_NETWORK_MANAGER_COMMAND.to_string(),
        }
    }

    /// Create a reader that runs a custom shell pipeline (useful for testing)
    pub fn with_command(command: String) -> Self {
        Self { command }
    }
}

impl Default for NetworkManagerReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameserverSource for NetworkManagerReader {
    fn name(&self) -> &'static str {
        "nmcli"
    }

    async fn read_nameservers(&self) -> Result<Vec<String>, DomainError> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| DomainError::SourceUnavailable(format!("Failed to spawn shell: {}", e)))?;

        let values = match child.stdout.take() {
            Some(stdout) => collect_dns_values(stdout).await,
            None => Err(DomainError::SourceUnavailable(
                "Child stdout was not captured".to_string(),
            )),
        };

        // Reap the child on every path, including read failures.
        match child.wait().await {
            Ok(status) => debug!(%status, "Network manager command finished"),
            Err(e) => warn!(error = %e, "Failed to wait for network manager command"),
        }

        let values = values?;
        debug!(count = values.len(), "Network manager nameservers scraped");
        Ok(values)
    }
}

use async_trait::async_trait;
use resolver_audit_application::ports::NameserverSource;
use resolver_audit_domain::config::DEFAULT_RESOLV_CONF_PATH;
use resolver_audit_domain::{DomainError, STUB_LISTENER_ADDRESS};
use tokio::fs;
use tracing::debug;

const DIRECTIVE: &str = "nameserver";

/// Extracts the address of a `nameserver` line.
///
/// The directive must open the line exactly (case-sensitive, no indentation).
/// The value is everything after the following run of spaces/tabs, with
/// trailing whitespace removed. Empty values and the stub listener yield None.
pub fn parse_nameserver_line(line: &str) -> Option<String> {
    let rest = line.strip_prefix(DIRECTIVE)?;
    let candidate = rest
        .trim_start_matches(&[' ', '\t'][..])
        .trim_end_matches(&[' ', '\t', '\r', '\n'][..]);

    if candidate.is_empty() || candidate == STUB_LISTENER_ADDRESS {
        return None;
    }

    Some(candidate.to_string())
}

/// Reads nameservers from a resolv.conf style file
pub struct ResolvConfReader {
    path: String,
}

impl ResolvConfReader {
    pub fn new() -> Self {
        Self {
            path: DEFAULT_RESOLV_CONF_PATH.to_string(),
        }
    }

    /// Create a reader for a custom file path (containers, tests)
    pub fn with_path(path: String) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Default for ResolvConfReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameserverSource for ResolvConfReader {
    fn name(&self) -> &'static str {
        "resolv.conf"
    }

    async fn read_nameservers(&self) -> Result<Vec<String>, DomainError> {
        let raw = fs::read(&self.path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to read {}: {}", self.path, e))
        })?;
        let content = String::from_utf8_lossy(&raw);

        let nameservers: Vec<String> = content.lines().filter_map(parse_nameserver_line).collect();

        debug!(path = %self.path, count = nameservers.len(), "resolv.conf parsed");
        Ok(nameservers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_with_any_whitespace_run() {
        for line in [
            "nameserver 1.2.3.4",
            "nameserver   1.2.3.4",
            "nameserver\t1.2.3.4",
            "nameserver \t \t1.2.3.4  \r",
        ] {
            assert_eq!(parse_nameserver_line(line), Some("1.2.3.4".to_string()), "{line:?}");
        }
    }

    #[test]
    fn test_stub_listener_is_dropped() {
        assert_eq!(parse_nameserver_line("nameserver 127.0.0.53"), None);
        assert_eq!(parse_nameserver_line("nameserver 127.0.0.53 \r\n"), None);
        assert_eq!(
            parse_nameserver_line("nameserver 127.0.0.1"),
            Some("127.0.0.1".to_string())
        );
    }

    #[test]
    fn test_directive_without_value() {
        assert_eq!(parse_nameserver_line("nameserver"), None);
        assert_eq!(parse_nameserver_line("nameserver \t  "), None);
    }

    #[test]
    fn test_other_lines_ignored() {
        assert_eq!(parse_nameserver_line("search example.com"), None);
        assert_eq!(parse_nameserver_line("# nameserver 1.1.1.1"), None);
        assert_eq!(parse_nameserver_line("  nameserver 1.1.1.1"), None);
        assert_eq!(parse_nameserver_line("NAMESERVER 1.1.1.1"), None);
        assert_eq!(parse_nameserver_line(""), None);
    }

    #[test]
    fn test_ipv6_and_inner_spaces_kept() {
        assert_eq!(
            parse_nameserver_line("nameserver fe80::1%eth0"),
            Some("fe80::1%eth0".to_string())
        );
        // Only trailing whitespace is trimmed; the rest of the line is the value
        assert_eq!(
            parse_nameserver_line("nameserver 1.1.1.1 # cloudflare"),
            Some("1.1.1.1 # cloudflare".to_string())
        );
    }
}

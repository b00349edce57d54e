use serde::{Deserialize, Serialize};

use crate::AggregationStrategy;

pub const DEFAULT_RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

/// Checks that nmcli exists, then keeps only the IPv4 DNS lines of every device.
pub const DEFAULT_NETWORK_MANAGER_COMMAND: &str =
    "which nmcli >/dev/null 2>&1 && nmcli dev show | grep 'IP4.DNS'";

/// Resolver source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    #[serde(default = "default_resolv_conf_path")]
    pub resolv_conf_path: String,

    /// Shell pipeline whose stdout carries `key: value` DNS lines
    #[serde(default = "default_network_manager_command")]
    pub network_manager_command: String,

    #[serde(default)]
    pub strategy: AggregationStrategy,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            resolv_conf_path: default_resolv_conf_path(),
            network_manager_command: default_network_manager_command(),
            strategy: AggregationStrategy::default(),
        }
    }
}

fn default_resolv_conf_path() -> String {
    DEFAULT_RESOLV_CONF_PATH.to_string()
}

fn default_network_manager_command() -> String {
    DEFAULT_NETWORK_MANAGER_COMMAND.to_string()
}

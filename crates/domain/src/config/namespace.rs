use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NamespaceConfig {
    #[serde(default = "default_nsenter_path")]
    pub nsenter_path: String,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            nsenter_path: default_nsenter_path(),
        }
    }
}

fn default_nsenter_path() -> String {
    "nsenter".to_string()
}

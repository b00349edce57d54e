use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Which aggregation runs for a query.
///
/// `Files` reads resolv.conf and scrapes the network manager; `Library` asks
/// the OS resolver library. The two are never mixed in one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationStrategy {
    #[default]
    Files,
    Library,
}

impl AggregationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationStrategy::Files => "files",
            AggregationStrategy::Library => "library",
        }
    }
}

impl fmt::Display for AggregationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregationStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "files" => Ok(AggregationStrategy::Files),
            "library" => Ok(AggregationStrategy::Library),
            other => Err(DomainError::InvalidStrategy(other.to_string())),
        }
    }
}

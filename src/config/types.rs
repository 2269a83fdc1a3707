//! Configuration type definitions

use crate::geometry::Metric;
use crate::graph::SearchOptions;
use serde::{Deserialize, Serialize};

/// Graph configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Display name of the graph (e.g. "Catalunya")
    #[serde(default = "default_name")]
    pub name: String,

    /// Distance function for edge costs and the search heuristic
    #[serde(default)]
    pub metric: Metric,

    /// Route search settings
    #[serde(default)]
    pub search: SearchConfig,
}

/// Configuration for route search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Give up after finalizing this many nodes (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            max_expansions: self.max_expansions,
        }
    }
}

fn default_name() -> String {
    "AirSpace".to_string()
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            name: default_name(),
            metric: Metric::default(),
            search: SearchConfig::default(),
        }
    }
}

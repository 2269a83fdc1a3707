//! Graph configuration for navgraph
//!
//! Configuration is read from a TOML file such as:
//!
//! ```toml
//! name = "Catalunya"
//! metric = "great-circle"
//!
//! [search]
//! max_expansions = 10000
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{NavError, Result};

pub use types::{GraphConfig, SearchConfig};

impl GraphConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), metric = %config.metric, "loaded graph config");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: GraphConfig = toml::from_str(content)?;
        if config.search.max_expansions == Some(0) {
            bail_invalid!("search.max_expansions", 0);
        }
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

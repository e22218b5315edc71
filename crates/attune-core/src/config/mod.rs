//! Workspace configuration.
//!
//! Scorer weights and suppression thresholds are deliberately NOT
//! configurable: they are fixed constants of the decision model. Config
//! covers the knobs operators may actually turn: memory limits and the
//! near-duplicate heuristic.

pub mod defaults;
mod memory_config;

pub use memory_config::MemoryConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};

/// Top-level config, loadable from TOML. Every field has a default, so an
/// empty document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttuneConfig {
    pub memory: MemoryConfig,
}

impl AttuneConfig {
    /// Parse from a TOML document.
    pub fn from_toml_str(input: &str) -> EngineResult<Self> {
        toml::from_str(input).map_err(|e| EngineError::Config(e.to_string()))
    }
}

//! Budget configuration for bounded rewriting.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Limits enforced by [`crate::fang::transform_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FangConfig {
    /// Maximum input size in bytes
    pub max_input_bytes: usize,
    /// Maximum number of candidate spans collected before resolution
    pub max_candidates: usize,
}

impl Default for FangConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 16 * 1_048_576, // 16 MiB
            max_candidates: 1_000_000,
        }
    }
}

impl FangConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

use crate::utils::error::{PrimerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML overrides for the built-in tour fixtures. Every table and
/// field is optional; anything absent keeps its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub subject: Option<SubjectConfig>,
    pub samples: Option<SamplesConfig>,
    pub scratch: Option<ScratchConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectConfig {
    pub name: Option<String>,
    pub age: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamplesConfig {
    pub numbers: Option<Vec<i64>>,
    pub classify: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScratchConfig {
    pub filename: Option<String>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| PrimerError::ConfigError {
            message: format!("cannot read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config = toml::from_str(raw)?;
        Ok(config)
    }
}

use crate::{BenchviewError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ERROR_MESSAGE: &str = "Error loading details. Please try again.";

pub const ENV_API_BASE: &str = "BENCHVIEW_API_BASE";
pub const ENV_TIMEOUT_MS: &str = "BENCHVIEW_TIMEOUT_MS";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchviewConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub modal: ModalConfig,
}

impl BenchviewConfig {
    /// Read a JSON config file. Missing sections fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| BenchviewError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Apply `BENCHVIEW_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup(ENV_API_BASE) {
            self.api.base_url = base;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let ms = raw.trim().parse::<u64>().map_err(|_| {
                BenchviewError::Config(format!("{} must be milliseconds, got {:?}", ENV_TIMEOUT_MS, raw))
            })?;
            self.api.timeout_ms = Some(ms);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// No timeout unless set.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModalConfig {
    pub modal_id: String,
    pub content_id: String,
    pub error_message: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            modal_id: "detailsModal".to_string(),
            content_id: "detailsContent".to_string(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

impl ModalConfig {
    pub fn targets(&self) -> ModalTargets {
        ModalTargets::new(&self.modal_id, &self.content_id)
    }
}

/// The pair of container ids a presenter writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalTargets {
    pub modal_id: String,
    pub content_id: String,
}

impl ModalTargets {
    pub fn new(modal_id: &str, content_id: &str) -> Self {
        Self {
            modal_id: modal_id.to_string(),
            content_id: content_id.to_string(),
        }
    }
}

impl Default for ModalTargets {
    fn default() -> Self {
        ModalConfig::default().targets()
    }
}

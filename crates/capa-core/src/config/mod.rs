//! Configuration: layered settings files plus environment overrides.

pub mod loader;

use std::path::Path;

use crate::error::Result;
use crate::models::ProviderName;
use crate::settings::ProviderSettings;

pub use loader::{load_file, SettingsDirectories, SettingsLoader};

pub const ENV_API_PROVIDER: &str = "CAPA_API_PROVIDER";
pub const ENV_API_MODEL_ID: &str = "CAPA_API_MODEL_ID";
pub const ENV_OLLAMA_NUM_CTX: &str = "CAPA_OLLAMA_NUM_CTX";

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct CapaConfig {
    pub settings: ProviderSettings,
}

impl CapaConfig {
    /// Load settings files for `cwd`, then apply process environment
    /// overrides (a `.env` file is honored).
    pub fn load(cwd: &Path) -> Result<Self> {
        let _ = dotenvy::dotenv();
        let settings = SettingsLoader::new().load(cwd)?;
        Self::new(settings).apply_env(|key| std::env::var(key).ok())
    }

    /// Like [`CapaConfig::load`] with an explicit home directory and no
    /// `.env` lookup.
    pub fn load_with_home(cwd: &Path, home_dir: Option<&Path>) -> Result<Self> {
        let settings = SettingsLoader::new().load_with_home(cwd, home_dir)?;
        Self::new(settings).apply_env(|key| std::env::var(key).ok())
    }

    pub fn new(settings: ProviderSettings) -> Self {
        Self { settings }
    }

    /// Apply overrides read through `lookup`.
    ///
    /// An unknown provider name is an error. An unparsable context length is
    /// logged and ignored.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = non_empty(lookup(ENV_API_PROVIDER)) {
            self.settings.api_provider = Some(raw.parse::<ProviderName>()?);
        }
        if let Some(model_id) = non_empty(lookup(ENV_API_MODEL_ID)) {
            self.settings.api_model_id = Some(model_id);
        }
        if let Some(raw) = non_empty(lookup(ENV_OLLAMA_NUM_CTX)) {
            match raw.trim().parse::<u32>() {
                Ok(num_ctx) => self.settings.ollama_num_ctx = Some(num_ctx),
                Err(err) => {
                    tracing::warn!(value = %raw, error = %err, "ignoring malformed {ENV_OLLAMA_NUM_CTX}")
                }
            }
        }
        Ok(self)
    }

    pub fn into_settings(self) -> ProviderSettings {
        self.settings
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

//! Layered settings files: global (`~/.capa`) then project (`.capa`).

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{CapaError, Result};
use crate::settings::ProviderSettings;

const SETTINGS_JSON: &str = "settings.json";
const SETTINGS_TOML: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDirectories {
    pub global_dir: PathBuf,
    pub project_dir: PathBuf,
}

impl Default for SettingsDirectories {
    fn default() -> Self {
        Self {
            global_dir: PathBuf::from("~/.capa"),
            project_dir: PathBuf::from(".capa"),
        }
    }
}

impl SettingsDirectories {
    pub fn resolve_with_home(&self, cwd: &Path, home_dir: Option<&Path>) -> Result<Self> {
        Ok(Self {
            global_dir: resolve_path(&self.global_dir.to_string_lossy(), cwd, home_dir)?,
            project_dir: resolve_path(&self.project_dir.to_string_lossy(), cwd, home_dir)?,
        })
    }
}

/// Loads a [`ProviderSettings`] bundle from the global and project scopes.
///
/// Within a scope `settings.json` takes precedence over `settings.toml`.
/// Project values are deep-merged over global values. Missing files are
/// skipped, so an empty environment yields the default bundle.
#[derive(Debug, Clone, Default)]
pub struct SettingsLoader {
    directories: SettingsDirectories,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directories(mut self, directories: SettingsDirectories) -> Self {
        self.directories = directories;
        self
    }

    pub fn directories(&self) -> &SettingsDirectories {
        &self.directories
    }

    pub fn load(&self, cwd: &Path) -> Result<ProviderSettings> {
        self.load_with_home(cwd, default_home_dir().as_deref())
    }

    pub fn load_with_home(&self, cwd: &Path, home_dir: Option<&Path>) -> Result<ProviderSettings> {
        let resolved = self.directories.resolve_with_home(cwd, home_dir)?;

        let mut merged = Value::Object(Default::default());
        for scope in [&resolved.global_dir, &resolved.project_dir] {
            if let Some(value) = load_scope(scope)? {
                deep_merge(&mut merged, value);
            }
        }

        Ok(serde_json::from_value(merged)?)
    }
}

/// Load a single settings file, choosing the format by extension.
pub fn load_file(path: &Path) -> Result<ProviderSettings> {
    let value = read_settings_value(path)?.ok_or_else(|| {
        CapaError::Configuration(format!("Settings file {} does not exist", path.display()))
    })?;
    Ok(serde_json::from_value(value)?)
}

fn default_home_dir() -> Option<PathBuf> {
    directories::UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

fn load_scope(scope_dir: &Path) -> Result<Option<Value>> {
    for name in [SETTINGS_JSON, SETTINGS_TOML] {
        if let Some(value) = read_settings_value(&scope_dir.join(name))? {
            tracing::debug!(path = %scope_dir.join(name).display(), "loaded settings scope");
            return Ok(Some(value));
        }
    }
    Ok(None)
}

fn read_settings_value(path: &Path) -> Result<Option<Value>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(CapaError::Io(err)),
    };

    let value: Value = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&raw)?,
        _ => serde_json::from_str(&raw)?,
    };
    if !value.is_object() {
        return Err(CapaError::Configuration(format!(
            "Settings file {} must contain an object",
            path.display()
        )));
    }
    Ok(Some(value))
}

fn resolve_path(raw: &str, base_dir: &Path, home_dir: Option<&Path>) -> Result<PathBuf> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CapaError::Configuration(
            "Settings directories must not be empty".to_string(),
        ));
    }

    if trimmed == "~" || trimmed.starts_with("~/") {
        let home = home_dir.ok_or_else(|| {
            CapaError::Configuration(format!(
                "Cannot resolve home-relative path '{trimmed}' because no home directory is known",
            ))
        })?;
        return Ok(home.join(trimmed.trim_start_matches('~').trim_start_matches('/')));
    }

    let path = PathBuf::from(trimmed);
    if path.is_absolute() {
        return Ok(path);
    }
    Ok(base_dir.join(path))
}

fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_obj), Value::Object(overlay_obj)) => {
            for (key, overlay_value) in overlay_obj {
                if let Some(base_value) = base_obj.get_mut(&key) {
                    deep_merge(base_value, overlay_value);
                } else {
                    base_obj.insert(key, overlay_value);
                }
            }
        }
        (base_value, overlay_value) => *base_value = overlay_value,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::models::ProviderName;

    #[test]
    fn default_directories_resolve_against_home_and_cwd() {
        let temp = tempdir().expect("temp dir should be created");
        let home = temp.path().join("home");
        let cwd = temp.path().join("workspace");

        let resolved = SettingsDirectories::default()
            .resolve_with_home(&cwd, Some(&home))
            .expect("directories should resolve");

        assert_eq!(resolved.global_dir, home.join(".capa"));
        assert_eq!(resolved.project_dir, cwd.join(".capa"));
    }

    #[test]
    fn project_scope_overrides_global_scope() {
        let temp = tempdir().expect("temp dir should be created");
        let home = temp.path().join("home");
        let cwd = temp.path().join("workspace");
        fs::create_dir_all(home.join(".capa")).unwrap();
        fs::create_dir_all(cwd.join(".capa")).unwrap();

        fs::write(
            home.join(".capa/settings.toml"),
            "apiProvider = \"anthropic\"\napiModelId = \"claude-sonnet-4-5\"\n\n[customModelInfo]\nmaxTokens = 1000\ncontextWindow = 8000\n",
        )
        .unwrap();
        fs::write(
            cwd.join(".capa/settings.json"),
            r#"{ "apiProvider": "deepseek", "customModelInfo": { "maxTokens": 2000 } }"#,
        )
        .unwrap();

        let settings = SettingsLoader::new()
            .load_with_home(&cwd, Some(&home))
            .expect("settings should load");

        assert_eq!(settings.provider(), ProviderName::DeepSeek);
        assert_eq!(settings.api_model_id.as_deref(), Some("claude-sonnet-4-5"));
        let custom = settings.custom_model_info.expect("custom info merged");
        assert_eq!(custom.max_tokens, Some(2000));
        assert_eq!(custom.context_window, 8000);
    }

    #[test]
    fn missing_files_yield_default_settings() {
        let temp = tempdir().expect("temp dir should be created");
        let settings = SettingsLoader::new()
            .load_with_home(temp.path(), Some(temp.path()))
            .expect("empty scopes should load");
        assert_eq!(settings, ProviderSettings::default());
    }

    #[test]
    fn non_object_settings_file_is_rejected() {
        let temp = tempdir().expect("temp dir should be created");
        fs::create_dir_all(temp.path().join(".capa")).unwrap();
        fs::write(temp.path().join(".capa/settings.json"), "[1, 2]").unwrap();

        let err = SettingsLoader::new()
            .load_with_home(temp.path(), Some(&temp.path().join("home")))
            .unwrap_err();
        assert!(matches!(err, CapaError::Configuration(_)), "got {err:?}");
    }

    #[test]
    fn home_relative_directory_without_home_is_an_error() {
        let temp = tempdir().expect("temp dir should be created");
        let loader = SettingsLoader::new().with_directories(SettingsDirectories {
            global_dir: PathBuf::from("~/.capa"),
            project_dir: PathBuf::from(".capa"),
        });
        assert!(loader.load_with_home(temp.path(), None).is_err());
    }

    #[test]
    fn load_file_reads_toml_by_extension() {
        let temp = tempdir().expect("temp dir should be created");
        let path = temp.path().join("bundle.toml");
        fs::write(&path, "apiProvider = \"ollama\"\nollamaModelId = \"qwen3\"\n").unwrap();

        let settings = load_file(&path).expect("file should load");
        assert_eq!(settings.provider(), ProviderName::Ollama);
        assert_eq!(settings.ollama_model_id.as_deref(), Some("qwen3"));
        assert!(load_file(&temp.path().join("missing.json")).is_err());
    }
}

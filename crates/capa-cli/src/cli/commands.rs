//! Subcommand handlers.

use std::fs;
use std::path::Path;

use capa::config::{load_file, CapaConfig};
use capa::error::Result;
use capa::models::ProviderName;
use capa::resolver::strategy_for;
use capa::settings::{ProviderSettings, Region};
use capa::FetchedCatalogs;
use serde::Serialize;

use super::{ProvidersArgs, ResolveArgs, SettingsArgs};

/// Build the settings bundle: file or layered loader, then env, then flags.
pub fn load_settings(args: &SettingsArgs, cwd: &Path) -> Result<ProviderSettings> {
    let config = match &args.settings {
        Some(path) => {
            CapaConfig::new(load_file(path)?).apply_env(|key| std::env::var(key).ok())?
        }
        None => CapaConfig::load(cwd)?,
    };
    let mut settings = config.into_settings();

    if let Some(raw) = &args.provider {
        settings.api_provider = Some(raw.parse::<ProviderName>()?);
    }
    if let Some(model) = &args.model {
        settings.api_model_id = Some(model.clone());
    }
    Ok(settings)
}

pub fn load_catalogs(path: Option<&Path>) -> Result<FetchedCatalogs> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(FetchedCatalogs::default()),
    }
}

pub fn handle_resolve(args: &ResolveArgs, cwd: &Path) -> Result<String> {
    let settings = load_settings(&args.settings, cwd)?;
    let catalogs = load_catalogs(args.catalogs.as_deref())?;
    let resolved = capa::resolve_selected(&settings, &catalogs);
    if !resolved.is_resolved() {
        tracing::warn!(model_id = %resolved.id, "no capability data for selected model");
    }
    Ok(serde_json::to_string_pretty(&resolved)?)
}

pub fn handle_request(args: &SettingsArgs, cwd: &Path) -> Result<String> {
    let settings = load_settings(args, cwd)?;
    let model = capa::request_model(settings.provider(), &settings)?;
    Ok(serde_json::to_string_pretty(&model)?)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProviderRow {
    provider: ProviderName,
    catalog: String,
    default_model_id: &'static str,
}

pub fn handle_providers(args: &ProvidersArgs) -> Result<String> {
    let rows: Vec<ProviderRow> = ProviderName::all()
        .map(|provider| ProviderRow {
            provider,
            catalog: strategy_for(provider).kind().to_string(),
            default_model_id: capa::provider_default_model_id(provider, Region::International),
        })
        .collect();
    if args.json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let width = rows
        .iter()
        .map(|row| row.provider.as_str().len())
        .max()
        .unwrap_or(0);
    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            let default_id = if row.default_model_id.is_empty() {
                "-"
            } else {
                row.default_model_id
            };
            format!(
                "{:<width$}  {:<12}  {}",
                row.provider.as_str(),
                row.catalog,
                default_id
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use capa::error::CapaError;
    use tempfile::tempdir;

    #[test]
    fn resolve_reads_settings_file_and_flags() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "apiProvider": "xai" }"#).unwrap();

        let args = ResolveArgs {
            settings: SettingsArgs {
                settings: Some(path),
                provider: None,
                model: Some("grok-4".to_string()),
            },
            catalogs: None,
        };
        let output = handle_resolve(&args, dir.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["id"], "grok-4");
        assert_eq!(value["info"]["contextWindow"], 256_000);
    }

    #[test]
    fn resolve_uses_catalog_file() {
        let dir = tempdir().unwrap();
        let catalogs = dir.path().join("catalogs.json");
        fs::write(
            &catalogs,
            r#"{ "ollama": { "qwen3": { "maxTokens": 8192, "contextWindow": 40960 } } }"#,
        )
        .unwrap();
        let settings = dir.path().join("settings.toml");
        fs::write(
            &settings,
            "apiProvider = \"ollama\"\nollamaModelId = \"qwen3\"\nollamaNumCtx = 8192\n",
        )
        .unwrap();

        let args = ResolveArgs {
            settings: SettingsArgs {
                settings: Some(settings),
                ..SettingsArgs::default()
            },
            catalogs: Some(catalogs),
        };
        let output = handle_resolve(&args, dir.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["info"]["contextWindow"], 8192);
    }

    #[test]
    fn request_rejects_provider_without_profile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "apiProvider": "ollama" }"#).unwrap();
        let args = SettingsArgs {
            settings: Some(path),
            ..SettingsArgs::default()
        };
        let err = handle_request(&args, dir.path()).unwrap_err();
        assert!(matches!(err, CapaError::UnsupportedProvider { .. }));
    }

    #[test]
    fn unknown_provider_flag_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{}").unwrap();
        let args = SettingsArgs {
            settings: Some(path),
            provider: Some("nowhere".to_string()),
            model: None,
        };
        let err = load_settings(&args, dir.path()).unwrap_err();
        assert!(matches!(err, CapaError::UnknownProvider(_)));
    }

    #[test]
    fn providers_listing_covers_every_provider() {
        let output = handle_providers(&ProvidersArgs::default()).unwrap();
        assert_eq!(output.lines().count(), ProviderName::all().count());
        assert!(output.lines().any(|line| line.starts_with("ollama") && line.ends_with('-')));
    }

    #[test]
    fn providers_listing_as_json() {
        let output = handle_providers(&ProvidersArgs { json: true }).unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
        let openrouter = rows
            .iter()
            .find(|row| row["provider"] == "openrouter")
            .unwrap();
        assert_eq!(openrouter["catalog"], "dynamic");
        assert_eq!(openrouter["defaultModelId"], "anthropic/claude-sonnet-4.5");
    }

    #[test]
    fn missing_catalog_file_is_an_io_error() {
        let err = load_catalogs(Some(Path::new("/nonexistent/catalogs.json"))).unwrap_err();
        assert!(matches!(err, CapaError::Io(_)));
    }
}

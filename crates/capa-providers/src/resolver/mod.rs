//! Capability resolution: provider + settings + fetched catalogs to a
//! [`ResolvedModel`].
//!
//! Resolution is a pure lookup. It never fails: an id that no catalog and no
//! custom descriptor covers resolves with `info: None`.

mod steps;
pub mod strategy;

use std::collections::HashMap;

use capa_core::models::{Catalog, ModelInfo, ProviderName, ResolvedModel};
use capa_core::settings::ProviderSettings;
use serde::{Deserialize, Serialize};

use crate::catalogs::static_catalog;
use crate::defaults::provider_default_model_id;
use steps::{apply_step, Resolution, StepContext};
pub use strategy::{
    strategy_for, CatalogKind, CatalogSource, IdField, LocalList, ModelIdSource, ProviderStrategy,
    Step,
};

/// Catalogs fetched at runtime by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FetchedCatalogs {
    /// Router catalogs keyed by dynamic provider.
    pub router: HashMap<ProviderName, Catalog>,
    /// OpenRouter's per-endpoint descriptors for the selected model.
    pub openrouter_endpoints: Catalog,
    pub ollama: Option<Catalog>,
    pub lmstudio: Option<Catalog>,
}

impl FetchedCatalogs {
    pub fn view(&self) -> CatalogView<'_> {
        CatalogView {
            router: Some(&self.router),
            openrouter_endpoints: Some(&self.openrouter_endpoints),
            ollama: self.ollama.as_ref(),
            lmstudio: self.lmstudio.as_ref(),
        }
    }
}

/// Borrowed view of whatever catalogs are available.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogView<'a> {
    pub router: Option<&'a HashMap<ProviderName, Catalog>>,
    pub openrouter_endpoints: Option<&'a Catalog>,
    pub ollama: Option<&'a Catalog>,
    pub lmstudio: Option<&'a Catalog>,
}

impl<'a> CatalogView<'a> {
    fn router_catalog(&self, provider: ProviderName) -> Option<&'a Catalog> {
        self.router.and_then(|router| router.get(&provider))
    }

    fn local(&self, list: LocalList) -> Option<&'a Catalog> {
        match list {
            LocalList::Ollama => self.ollama,
            LocalList::LmStudio => self.lmstudio,
        }
    }
}

/// Resolve the effective model id and descriptor for `provider`.
pub fn resolve(
    provider: ProviderName,
    settings: &ProviderSettings,
    catalogs: &FetchedCatalogs,
) -> ResolvedModel {
    resolve_with(provider, settings, catalogs.view())
}

/// [`resolve`] over a borrowed catalog view.
pub fn resolve_with(
    provider: ProviderName,
    settings: &ProviderSettings,
    catalogs: CatalogView<'_>,
) -> ResolvedModel {
    let strategy = strategy_for(provider);
    let id = model_id(provider, settings, strategy.model_id);
    let info = base_info(provider, settings, catalogs, strategy.source, &id);

    let ctx = StepContext {
        provider,
        settings,
        catalogs,
    };
    let mut resolution = Resolution::new(id, info);
    for step in strategy.steps {
        if resolution.finalized {
            break;
        }
        apply_step(*step, &ctx, &mut resolution);
    }

    tracing::debug!(
        provider = %provider,
        model_id = %resolution.id,
        resolved = resolution.info.is_some(),
        "resolved model"
    );
    ResolvedModel::new(resolution.id, resolution.info)
}

fn model_id(provider: ProviderName, settings: &ProviderSettings, source: ModelIdSource) -> String {
    let default_id = || provider_default_model_id(provider, settings.region());
    match source {
        ModelIdSource::Validated(field) => field
            .get(settings)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(default_id)
            .to_string(),
        ModelIdSource::Configured(field) => field
            .get(settings)
            .unwrap_or_else(default_id)
            .to_string(),
        ModelIdSource::PassThrough(field, fallback) => {
            field.get(settings).unwrap_or(fallback).to_string()
        }
        ModelIdSource::Selector => match &settings.vs_code_lm_model_selector {
            Some(selector) => format!(
                "{}/{}",
                selector.vendor.as_deref().unwrap_or_default(),
                selector.family.as_deref().unwrap_or_default()
            ),
            None => default_id().to_string(),
        },
    }
}

fn base_info(
    provider: ProviderName,
    settings: &ProviderSettings,
    catalogs: CatalogView<'_>,
    source: CatalogSource,
    id: &str,
) -> Option<ModelInfo> {
    let static_table = || static_catalog(provider, settings.region());
    match source {
        CatalogSource::Static => static_table().and_then(|table| table.get(id)).cloned(),
        CatalogSource::Router => catalogs
            .router_catalog(provider)
            .and_then(|catalog| catalog.get(id))
            .cloned(),
        CatalogSource::RouterThenStatic => catalogs
            .router_catalog(provider)
            .and_then(|catalog| catalog.get(id))
            .or_else(|| static_table().and_then(|table| table.get(id)))
            .cloned(),
        CatalogSource::Family => {
            let family = settings
                .vs_code_lm_model_selector
                .as_ref()
                .and_then(|selector| selector.family.as_deref())
                .unwrap_or_else(|| provider_default_model_id(provider, settings.region()));
            static_table().and_then(|table| table.get(family)).cloned()
        }
        CatalogSource::OpenAiCustom => Some(
            settings
                .open_ai_custom_model_info
                .clone()
                .unwrap_or_else(ModelInfo::sane_defaults),
        ),
        CatalogSource::Fixed(info) => Some(info()),
        CatalogSource::Local(list) => {
            let configured = match list {
                LocalList::Ollama => settings.ollama_model_id.as_deref(),
                LocalList::LmStudio => settings.lm_studio_model_id.as_deref(),
            };
            configured
                .and_then(|id| catalogs.local(list)?.get(id))
                .cloned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validated_id_treats_empty_as_unset() {
        let settings = ProviderSettings {
            glama_model_id: Some(String::new()),
            ..ProviderSettings::default()
        };
        let resolved = resolve(ProviderName::Glama, &settings, &FetchedCatalogs::default());
        assert_eq!(resolved.id, "anthropic/claude-3-7-sonnet");
    }

    #[test]
    fn configured_id_honors_empty_string() {
        let settings = ProviderSettings {
            api_model_id: Some(String::new()),
            ..ProviderSettings::default()
        };
        let resolved = resolve(ProviderName::Xai, &settings, &FetchedCatalogs::default());
        assert_eq!(resolved, ResolvedModel::new("", None));
    }

    #[test]
    fn selector_id_joins_vendor_and_family() {
        let settings = ProviderSettings {
            vs_code_lm_model_selector: Some(capa_core::settings::VsCodeLmSelector {
                vendor: Some("copilot".to_string()),
                family: Some("gpt-4o".to_string()),
            }),
            ..ProviderSettings::default()
        };
        let resolved = resolve(ProviderName::VsCodeLm, &settings, &FetchedCatalogs::default());
        assert_eq!(resolved.id, "copilot/gpt-4o");
        let info = resolved.info.unwrap();
        assert_eq!(info.context_window, 64_000);
        assert_eq!(info.supports_images, Some(false));
    }

    #[test]
    fn router_then_static_falls_back_to_table() {
        let resolved = resolve(
            ProviderName::IoIntelligence,
            &ProviderSettings::default(),
            &FetchedCatalogs::default(),
        );
        assert_eq!(resolved.id, "meta-llama/Llama-4-Maverick-17B-128E-Instruct-FP8");
        assert_eq!(resolved.info.map(|m| m.context_window), Some(430_000));
    }

    #[test]
    fn fetched_catalogs_parse_from_json() {
        let fetched: FetchedCatalogs = serde_json::from_str(
            r#"{
                "router": { "openrouter": { "x/y": { "maxTokens": 10, "contextWindow": 20 } } },
                "ollama": { "qwen3": { "contextWindow": 40960 } }
            }"#,
        )
        .unwrap();
        assert!(fetched.router[&ProviderName::OpenRouter].contains("x/y"));
        assert!(fetched.openrouter_endpoints.is_empty());
        assert!(fetched.lmstudio.is_none());
    }
}

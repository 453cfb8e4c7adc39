//! Readiness-aware model selection.
//!
//! The settings screen resolves the selected model while catalogs are still
//! being fetched. Until every catalog the provider needs has arrived the
//! selection reports the provider default with no descriptor, plus combined
//! loading and error flags.

use std::collections::HashMap;

use capa_core::models::{Catalog, ModelInfo, ProviderName};
use capa_core::settings::{ProviderSettings, Region};
use serde::Serialize;

use crate::defaults::provider_default_model_id;
use crate::resolver::{resolve_with, CatalogView};

/// State of one asynchronously fetched source.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub is_error: bool,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            is_error: false,
        }
    }
}

impl<T> FetchState<T> {
    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn failed() -> Self {
        Self {
            is_error: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogSources {
    pub router: FetchState<HashMap<ProviderName, Catalog>>,
    pub openrouter_endpoints: FetchState<Catalog>,
    pub ollama: FetchState<Catalog>,
    pub lmstudio: FetchState<Catalog>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedModel {
    pub provider: ProviderName,
    pub id: String,
    pub info: Option<ModelInfo>,
    pub is_loading: bool,
    pub is_error: bool,
}

/// Which sources the selected provider waits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Needs {
    router: bool,
    openrouter_endpoints: bool,
    ollama: bool,
    lmstudio: bool,
}

impl Needs {
    fn for_settings(provider: ProviderName, settings: Option<&ProviderSettings>) -> Self {
        Self {
            router: provider.is_dynamic(),
            openrouter_endpoints: provider == ProviderName::OpenRouter,
            ollama: provider == ProviderName::Ollama
                && settings.is_some_and(|s| s.ollama_model_id.is_some()),
            lmstudio: provider == ProviderName::LmStudio
                && settings.is_some_and(|s| s.lm_studio_model_id.is_some()),
        }
    }

    /// `(needed, loading, error)` for every source.
    fn flags(&self, sources: &CatalogSources) -> [(bool, bool, bool); 4] {
        [
            (self.router, sources.router.is_loading, sources.router.is_error),
            (
                self.openrouter_endpoints,
                sources.openrouter_endpoints.is_loading,
                sources.openrouter_endpoints.is_error,
            ),
            (self.ollama, sources.ollama.is_loading, sources.ollama.is_error),
            (self.lmstudio, sources.lmstudio.is_loading, sources.lmstudio.is_error),
        ]
    }
}

/// Select the active model for `settings`, waiting on the sources the
/// provider needs.
pub fn select_model(settings: Option<&ProviderSettings>, sources: &CatalogSources) -> SelectedModel {
    let provider = settings.map(ProviderSettings::provider).unwrap_or_default();
    let needs = Needs::for_settings(provider, settings);

    let router_valid = !needs.router
        || (!sources.router.is_loading
            && sources
                .router
                .data
                .as_ref()
                .is_some_and(|router| router.contains_key(&provider)));
    let is_ready = router_valid
        && (!needs.openrouter_endpoints || sources.openrouter_endpoints.data.is_some())
        && (!needs.ollama || sources.ollama.data.is_some())
        && (!needs.lmstudio || sources.lmstudio.data.is_some());

    let flags = needs.flags(sources);
    let is_loading = flags.iter().any(|&(needed, loading, _)| needed && loading);
    let is_error = flags.iter().any(|&(needed, _, error)| needed && error);

    let (id, info) = match settings {
        Some(settings) if is_ready => {
            let view = CatalogView {
                router: sources.router.data.as_ref(),
                openrouter_endpoints: sources.openrouter_endpoints.data.as_ref(),
                ollama: sources.ollama.data.as_ref(),
                lmstudio: sources.lmstudio.data.as_ref(),
            };
            let resolved = resolve_with(provider, settings, view);
            (resolved.id, resolved.info)
        }
        _ => {
            tracing::debug!(provider = %provider, is_loading, is_error, "model selection not ready");
            (
                provider_default_model_id(provider, Region::International).to_string(),
                None,
            )
        }
    };

    SelectedModel {
        provider,
        id,
        info,
        is_loading,
        is_error,
    }
}

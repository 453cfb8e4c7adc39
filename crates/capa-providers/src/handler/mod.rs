//! Request parameters for providers whose handlers pick their own model.
//!
//! Unlike [`crate::resolver`], these profiles never leave the descriptor
//! empty: an unknown id without custom metadata gets vendor defaults, because
//! a request has to be sent with something.

pub mod usage;

use capa_core::error::{CapaError, Result};
use capa_core::models::{Catalog, ModelInfo, ProviderName, DEFAULT_CONTEXT_WINDOW};
use capa_core::settings::ProviderSettings;
use serde::Serialize;
use strum::{AsRefStr, Display};

use crate::catalogs::{doubao, google, moonshot};

pub use usage::{parse_usage, UsageFormat};

/// Request field carrying the output-token cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MaxTokensField {
    MaxTokens,
    MaxCompletionTokens,
    MaxOutputTokens,
}

/// Model parameters for an outgoing request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestModel {
    pub id: String,
    pub info: ModelInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub max_tokens_field: MaxTokensField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdRule {
    /// Configured id when set, even to `""`.
    Configured,
    /// Configured id when non-empty; an unset id means "the default entry".
    NonEmpty,
}

#[derive(Debug, Clone, Copy)]
struct RequestProfile {
    catalog: fn() -> &'static Catalog,
    default_model_id: &'static str,
    default_base_url: Option<&'static str>,
    fallback_max_tokens: u32,
    fallback_native_tools: bool,
    id_rule: IdRule,
    max_tokens_field: MaxTokensField,
}

impl RequestProfile {
    fn for_provider(provider: ProviderName) -> Option<Self> {
        let profile = match provider {
            ProviderName::Doubao => Self {
                catalog: doubao::models,
                default_model_id: doubao::DEFAULT_MODEL_ID,
                default_base_url: Some(doubao::API_BASE_URL),
                fallback_max_tokens: 4096,
                fallback_native_tools: false,
                id_rule: IdRule::Configured,
                max_tokens_field: MaxTokensField::MaxCompletionTokens,
            },
            ProviderName::Moonshot => Self {
                catalog: moonshot::models,
                default_model_id: moonshot::DEFAULT_MODEL_ID,
                default_base_url: Some(moonshot::API_BASE_URL),
                fallback_max_tokens: 8192,
                fallback_native_tools: false,
                id_rule: IdRule::Configured,
                max_tokens_field: MaxTokensField::MaxTokens,
            },
            ProviderName::Vertex => Self {
                catalog: google::vertex_models,
                default_model_id: google::VERTEX_DEFAULT_MODEL_ID,
                default_base_url: None,
                fallback_max_tokens: 8192,
                fallback_native_tools: true,
                id_rule: IdRule::NonEmpty,
                max_tokens_field: MaxTokensField::MaxOutputTokens,
            },
            _ => return None,
        };
        Some(profile)
    }

    fn fallback_info(&self) -> ModelInfo {
        let info = ModelInfo::new(self.fallback_max_tokens, DEFAULT_CONTEXT_WINDOW)
            .with_prompt_cache(true)
            .with_images(true);
        if self.fallback_native_tools {
            info.with_native_tools(true)
        } else {
            info
        }
    }

    fn base_url(&self, provider: ProviderName, settings: &ProviderSettings) -> Option<String> {
        let configured = match provider {
            ProviderName::Doubao => settings.doubao_base_url.as_deref(),
            ProviderName::Moonshot => settings.moonshot_base_url.as_deref(),
            _ => None,
        };
        configured.or(self.default_base_url).map(str::to_string)
    }
}

/// Custom metadata as sent with a request: an unset context window becomes
/// the default, and prompt caching is assumed unless turned off.
pub fn normalize_custom_info(custom: &ModelInfo) -> ModelInfo {
    ModelInfo {
        context_window: custom.context_window_or_default(),
        supports_prompt_cache: Some(custom.supports_prompt_cache.unwrap_or(true)),
        ..custom.clone()
    }
}

/// Build request parameters for `provider`.
///
/// Only providers with a dedicated request profile are supported; others
/// return [`CapaError::UnsupportedProvider`].
pub fn request_model(provider: ProviderName, settings: &ProviderSettings) -> Result<RequestModel> {
    let profile = RequestProfile::for_provider(provider)
        .ok_or_else(|| CapaError::unsupported(provider.as_str(), "request profiles"))?;
    let catalog = (profile.catalog)();

    let requested = match profile.id_rule {
        IdRule::Configured => Some(
            settings
                .api_model_id
                .as_deref()
                .unwrap_or(profile.default_model_id),
        ),
        IdRule::NonEmpty => settings.api_model_id.as_deref().filter(|id| !id.is_empty()),
    };
    let id = requested.unwrap_or(profile.default_model_id);

    let info = match (requested.and_then(|id| catalog.get(id)), &settings.custom_model_info) {
        (Some(known), _) => known.clone(),
        (None, Some(custom)) => normalize_custom_info(custom),
        (None, None) if requested.is_some() => profile.fallback_info(),
        (None, None) => catalog
            .get(profile.default_model_id)
            .cloned()
            .unwrap_or_else(|| profile.fallback_info()),
    };

    let max_tokens = settings
        .model_max_tokens
        .filter(|&n| n != 0)
        .or(info.max_tokens);
    let id = id.strip_suffix(":thinking").unwrap_or(id).to_string();

    tracing::debug!(
        provider = %provider,
        model_id = %id,
        max_tokens = ?max_tokens,
        field = %profile.max_tokens_field,
        "built request model"
    );

    Ok(RequestModel {
        id,
        base_url: profile.base_url(provider, settings),
        max_tokens,
        max_tokens_field: profile.max_tokens_field,
        info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_doubao_model_uses_table_and_default_url() {
        let model = request_model(ProviderName::Doubao, &ProviderSettings::default()).unwrap();
        assert_eq!(model.id, "doubao-seed-1-6-250615");
        assert_eq!(model.base_url.as_deref(), Some(doubao::API_BASE_URL));
        assert_eq!(model.max_tokens, Some(32_768));
        assert_eq!(model.max_tokens_field.as_ref(), "max_completion_tokens");
    }

    #[test]
    fn unknown_moonshot_model_without_custom_info_gets_vendor_defaults() {
        let settings = ProviderSettings {
            api_model_id: Some("kimi-latest".to_string()),
            moonshot_base_url: Some("https://api.moonshot.cn/v1".to_string()),
            ..ProviderSettings::default()
        };
        let model = request_model(ProviderName::Moonshot, &settings).unwrap();
        assert_eq!(model.id, "kimi-latest");
        assert_eq!(model.info.max_tokens, Some(8192));
        assert_eq!(model.info.context_window, 128_000);
        assert_eq!(model.info.supports_prompt_cache, Some(true));
        assert_eq!(model.base_url.as_deref(), Some("https://api.moonshot.cn/v1"));
        assert_eq!(model.max_tokens_field, MaxTokensField::MaxTokens);
    }

    #[test]
    fn custom_info_is_normalized() {
        let settings = ProviderSettings {
            api_model_id: Some("ep-20250101".to_string()),
            custom_model_info: Some(ModelInfo {
                max_tokens: Some(2048),
                ..ModelInfo::default()
            }),
            ..ProviderSettings::default()
        };
        let model = request_model(ProviderName::Doubao, &settings).unwrap();
        assert_eq!(model.info.context_window, 128_000);
        assert_eq!(model.info.supports_prompt_cache, Some(true));
        assert_eq!(model.max_tokens, Some(2048));
    }

    #[test]
    fn model_max_tokens_overrides_unless_zero() {
        let mut settings = ProviderSettings {
            model_max_tokens: Some(1000),
            ..ProviderSettings::default()
        };
        let model = request_model(ProviderName::Moonshot, &settings).unwrap();
        assert_eq!(model.max_tokens, Some(1000));

        settings.model_max_tokens = Some(0);
        let model = request_model(ProviderName::Moonshot, &settings).unwrap();
        assert_eq!(model.max_tokens, Some(16_384));
    }

    #[test]
    fn vertex_strips_thinking_suffix() {
        let settings = ProviderSettings {
            api_model_id: Some("claude-3-7-sonnet@20250219:thinking".to_string()),
            ..ProviderSettings::default()
        };
        let model = request_model(ProviderName::Vertex, &settings).unwrap();
        assert_eq!(model.id, "claude-3-7-sonnet@20250219");
        assert_eq!(model.info.context_window, 200_000);
        assert_eq!(model.base_url, None);
    }

    #[test]
    fn vertex_unset_id_uses_default_entry() {
        let model = request_model(ProviderName::Vertex, &ProviderSettings::default()).unwrap();
        assert_eq!(model.id, google::VERTEX_DEFAULT_MODEL_ID);
        assert_eq!(model.info.max_tokens, Some(64_000));
    }

    #[test]
    fn vertex_unknown_id_gets_native_tools() {
        let settings = ProviderSettings {
            api_model_id: Some("gemini-exp".to_string()),
            ..ProviderSettings::default()
        };
        let model = request_model(ProviderName::Vertex, &settings).unwrap();
        assert_eq!(model.info.supports_native_tools, Some(true));
        assert_eq!(model.max_tokens_field, MaxTokensField::MaxOutputTokens);
    }

    #[test]
    fn other_providers_are_unsupported() {
        let err = request_model(ProviderName::Ollama, &ProviderSettings::default()).unwrap_err();
        assert!(matches!(err, CapaError::UnsupportedProvider { .. }), "got {err:?}");
    }
}

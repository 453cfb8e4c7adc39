//! Per-provider resolution strategies.
//!
//! Each provider maps to a small record: where the model id comes from,
//! where the descriptor comes from, and the ordered adjustment steps applied
//! afterwards.

use capa_core::models::{ModelInfo, ProviderName};
use capa_core::settings::ProviderSettings;
use strum::Display;

use crate::defaults::HUGGINGFACE_DEFAULT_MODEL_ID;

/// Settings field holding a provider's model id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdField {
    ApiModelId,
    OpenRouter,
    Requesty,
    Glama,
    Unbound,
    LiteLlm,
    DeepInfra,
    IoIntelligence,
    VercelAiGateway,
    HuggingFace,
    OpenAi,
    Ollama,
    LmStudio,
}

impl IdField {
    pub fn get(self, settings: &ProviderSettings) -> Option<&str> {
        let value = match self {
            Self::ApiModelId => &settings.api_model_id,
            Self::OpenRouter => &settings.open_router_model_id,
            Self::Requesty => &settings.requesty_model_id,
            Self::Glama => &settings.glama_model_id,
            Self::Unbound => &settings.unbound_model_id,
            Self::LiteLlm => &settings.litellm_model_id,
            Self::DeepInfra => &settings.deep_infra_model_id,
            Self::IoIntelligence => &settings.io_intelligence_model_id,
            Self::VercelAiGateway => &settings.vercel_ai_gateway_model_id,
            Self::HuggingFace => &settings.hugging_face_model_id,
            Self::OpenAi => &settings.open_ai_model_id,
            Self::Ollama => &settings.ollama_model_id,
            Self::LmStudio => &settings.lm_studio_model_id,
        };
        value.as_deref()
    }
}

/// How the model id is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelIdSource {
    /// Field when non-empty, provider default otherwise.
    Validated(IdField),
    /// Field when set (even to `""`), provider default otherwise.
    Configured(IdField),
    /// Field when set, the given literal otherwise.
    PassThrough(IdField, &'static str),
    /// `vendor/family` from the language-model selector.
    Selector,
}

/// Local daemons reporting their own model list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalList {
    Ollama,
    LmStudio,
}

/// Where the base descriptor comes from.
#[derive(Debug, Clone, Copy)]
pub enum CatalogSource {
    /// Compiled-in table.
    Static,
    /// Fetched router catalog for the provider.
    Router,
    /// Fetched router catalog, then the compiled-in table.
    RouterThenStatic,
    /// Compiled-in table keyed by the selector's model family.
    Family,
    /// The user's OpenAI-compatible descriptor, sane defaults otherwise.
    OpenAiCustom,
    /// A descriptor that never varies.
    Fixed(fn() -> ModelInfo),
    /// Locally fetched list, looked up by the raw configured id.
    Local(LocalList),
}

/// Coarse catalog classification for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum CatalogKind {
    Static,
    Dynamic,
    PassThrough,
}

/// Descriptor adjustments, applied in order after the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Bedrock `custom-arn`: fixed descriptor, later steps skipped.
    Sentinel,
    /// Bedrock 1M-context toggle.
    ExtendedContext,
    /// Anthropic 1M-context beta pricing from the first tier.
    BetaTier,
    /// OpenRouter endpoint-specific descriptor.
    EndpointOverlay,
    /// Ollama `num_ctx`, which only ever shrinks the window.
    ClampContext,
    /// Catalog descriptor, else the user's custom descriptor.
    CustomFallback,
    /// Layer the descriptor over sane defaults. With `fill_missing`, a
    /// missing descriptor becomes the sane defaults themselves.
    SaneDefaultsUnderlay { fill_missing: bool },
    /// Force `supports_images` off.
    DisableImages,
}

#[derive(Debug, Clone, Copy)]
pub struct ProviderStrategy {
    pub source: CatalogSource,
    pub model_id: ModelIdSource,
    pub steps: &'static [Step],
}

impl ProviderStrategy {
    const fn new(source: CatalogSource, model_id: ModelIdSource, steps: &'static [Step]) -> Self {
        Self {
            source,
            model_id,
            steps,
        }
    }

    pub fn kind(&self) -> CatalogKind {
        match self.source {
            CatalogSource::Static | CatalogSource::Family => CatalogKind::Static,
            CatalogSource::Router | CatalogSource::RouterThenStatic => CatalogKind::Dynamic,
            CatalogSource::OpenAiCustom | CatalogSource::Fixed(_) | CatalogSource::Local(_) => {
                CatalogKind::PassThrough
            }
        }
    }
}

const FALLBACK: &[Step] = &[Step::CustomFallback];

/// Fixed descriptor for Hugging Face inference.
pub fn hugging_face_info() -> ModelInfo {
    ModelInfo::new(8192, 131_072)
        .with_images(false)
        .with_prompt_cache(false)
}

/// Strategy record for `provider`.
pub fn strategy_for(provider: ProviderName) -> ProviderStrategy {
    use CatalogSource as C;
    use IdField as F;
    use ModelIdSource as M;
    use ProviderName as P;

    match provider {
        P::OpenRouter => ProviderStrategy::new(
            C::Router,
            M::Validated(F::OpenRouter),
            &[Step::EndpointOverlay, Step::CustomFallback],
        ),
        P::Requesty => ProviderStrategy::new(C::Router, M::Validated(F::Requesty), FALLBACK),
        P::Glama => ProviderStrategy::new(C::Router, M::Validated(F::Glama), FALLBACK),
        P::Unbound => ProviderStrategy::new(C::Router, M::Validated(F::Unbound), FALLBACK),
        P::LiteLlm => ProviderStrategy::new(C::Router, M::Validated(F::LiteLlm), FALLBACK),
        P::DeepInfra => ProviderStrategy::new(C::Router, M::Validated(F::DeepInfra), FALLBACK),
        P::VercelAiGateway => {
            ProviderStrategy::new(C::Router, M::Validated(F::VercelAiGateway), FALLBACK)
        }
        P::Chutes | P::Roo => ProviderStrategy::new(C::Router, M::Validated(F::ApiModelId), FALLBACK),
        P::IoIntelligence => ProviderStrategy::new(
            C::RouterThenStatic,
            M::Validated(F::IoIntelligence),
            FALLBACK,
        ),

        P::Bedrock => ProviderStrategy::new(
            C::Static,
            M::Configured(F::ApiModelId),
            &[Step::Sentinel, Step::ExtendedContext, Step::CustomFallback],
        ),
        P::Anthropic => ProviderStrategy::new(
            C::Static,
            M::Configured(F::ApiModelId),
            &[Step::BetaTier, Step::CustomFallback],
        ),
        P::ClaudeCode => ProviderStrategy::new(
            C::Static,
            M::Configured(F::ApiModelId),
            &[
                Step::CustomFallback,
                Step::SaneDefaultsUnderlay {
                    fill_missing: false,
                },
            ],
        ),
        P::VsCodeLm => ProviderStrategy::new(
            C::Family,
            M::Selector,
            &[
                Step::SaneDefaultsUnderlay { fill_missing: true },
                Step::DisableImages,
            ],
        ),
        P::GeminiCli
        | P::HumanRelay
        | P::FakeAi
        | P::Xai
        | P::Groq
        | P::Baseten
        | P::Vertex
        | P::Gemini
        | P::DeepSeek
        | P::Doubao
        | P::Moonshot
        | P::Minimax
        | P::Zai
        | P::OpenAiNative
        | P::Mistral
        | P::Cerebras
        | P::SambaNova
        | P::Fireworks
        | P::Featherless
        | P::QwenCode => ProviderStrategy::new(C::Static, M::Configured(F::ApiModelId), FALLBACK),

        P::OpenAi => ProviderStrategy::new(C::OpenAiCustom, M::PassThrough(F::OpenAi, ""), &[]),
        P::HuggingFace => ProviderStrategy::new(
            C::Fixed(hugging_face_info),
            M::PassThrough(F::HuggingFace, HUGGINGFACE_DEFAULT_MODEL_ID),
            &[],
        ),
        P::Ollama => ProviderStrategy::new(
            C::Local(LocalList::Ollama),
            M::PassThrough(F::Ollama, ""),
            &[Step::ClampContext],
        ),
        P::LmStudio => ProviderStrategy::new(
            C::Local(LocalList::LmStudio),
            M::PassThrough(F::LmStudio, ""),
            &[],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn router_providers_validate_their_own_field() {
        assert_eq!(
            strategy_for(ProviderName::Glama).model_id,
            ModelIdSource::Validated(IdField::Glama)
        );
        assert_eq!(
            strategy_for(ProviderName::Roo).model_id,
            ModelIdSource::Validated(IdField::ApiModelId)
        );
    }

    #[test]
    fn kinds_match_provider_classification() {
        for provider in ProviderName::all() {
            let kind = strategy_for(provider).kind();
            if provider.is_dynamic() && provider != ProviderName::HuggingFace {
                assert_eq!(kind, CatalogKind::Dynamic, "{provider}");
            } else if provider.is_local() {
                assert_eq!(kind, CatalogKind::PassThrough, "{provider}");
            }
        }
        assert_eq!(strategy_for(ProviderName::Xai).kind(), CatalogKind::Static);
        assert_eq!(CatalogKind::PassThrough.to_string(), "pass-through");
    }

    #[test]
    fn beta_tier_only_for_anthropic() {
        for provider in ProviderName::all() {
            let has_beta = strategy_for(provider).steps.contains(&Step::BetaTier);
            assert_eq!(has_beta, provider == ProviderName::Anthropic, "{provider}");
        }
    }

    #[test]
    fn sentinel_precedes_fallback_for_bedrock() {
        assert_eq!(
            strategy_for(ProviderName::Bedrock).steps,
            &[Step::Sentinel, Step::ExtendedContext, Step::CustomFallback]
        );
    }
}

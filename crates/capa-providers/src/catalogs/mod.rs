//! Compiled-in model catalogs.
//!
//! Each table is built on first access and then shared read-only.

pub mod anthropic;
pub mod bedrock;
pub mod deepseek;
pub mod doubao;
pub mod google;
pub mod groq;
pub mod hosted;
pub mod minimax;
pub mod mistral;
pub mod moonshot;
pub mod openai;
pub mod qwen_code;
pub mod vscode_lm;
pub mod xai;
pub mod zai;

use capa_core::models::{Catalog, ProviderName};
use capa_core::settings::Region;

/// Compiled-in table for `provider`, if it has one.
///
/// Providers without their own list that route to Anthropic models
/// (`gemini-cli`, `human-relay`, `fake-ai`) share the Anthropic table.
/// IO Intelligence returns its fallback table.
pub fn static_catalog(provider: ProviderName, region: Region) -> Option<&'static Catalog> {
    use ProviderName as P;

    let catalog = match provider {
        P::Anthropic | P::GeminiCli | P::HumanRelay | P::FakeAi => anthropic::models(),
        P::ClaudeCode => anthropic::claude_code_models(),
        P::Bedrock => bedrock::models(),
        P::Vertex => google::vertex_models(),
        P::Gemini => google::gemini_models(),
        P::OpenAiNative => openai::models(),
        P::Mistral => mistral::models(),
        P::Xai => xai::models(),
        P::Groq => groq::models(),
        P::DeepSeek => deepseek::models(),
        P::Doubao => doubao::models(),
        P::Moonshot => moonshot::models(),
        P::Minimax => minimax::models(),
        P::Zai => zai::models_for(region),
        P::QwenCode => qwen_code::models(),
        P::VsCodeLm => vscode_lm::models(),
        P::Baseten => hosted::baseten_models(),
        P::Cerebras => hosted::cerebras_models(),
        P::SambaNova => hosted::sambanova_models(),
        P::Fireworks => hosted::fireworks_models(),
        P::Featherless => hosted::featherless_models(),
        P::IoIntelligence => hosted::io_intelligence_models(),
        P::Glama
        | P::OpenRouter
        | P::OpenAi
        | P::Ollama
        | P::LmStudio
        | P::DeepInfra
        | P::Unbound
        | P::Requesty
        | P::Chutes
        | P::LiteLlm
        | P::HuggingFace
        | P::Roo
        | P::VercelAiGateway => return None,
    };
    Some(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::provider_default_model_id;

    #[test]
    fn every_static_default_id_is_in_its_table() {
        for provider in ProviderName::all() {
            for region in [Region::International, Region::Mainland] {
                let Some(catalog) = static_catalog(provider, region) else {
                    continue;
                };
                let default_id = provider_default_model_id(provider, region);
                assert!(
                    catalog.contains(default_id),
                    "{provider} default {default_id} missing from its table"
                );
            }
        }
    }

    #[test]
    fn zai_regions_have_distinct_tables() {
        let intl = static_catalog(ProviderName::Zai, Region::International).unwrap();
        let mainland = static_catalog(ProviderName::Zai, Region::Mainland).unwrap();
        assert_ne!(
            intl.get("glm-4.6").and_then(|m| m.input_price),
            mainland.get("glm-4.6").and_then(|m| m.input_price)
        );
    }

    #[test]
    fn router_providers_have_no_static_table() {
        assert!(static_catalog(ProviderName::OpenRouter, Region::International).is_none());
        assert!(static_catalog(ProviderName::Ollama, Region::International).is_none());
    }
}

//! Default model id per provider.

use capa_core::models::ProviderName;
use capa_core::settings::Region;

use crate::catalogs::{
    anthropic, bedrock, deepseek, doubao, google, groq, hosted, minimax, mistral, moonshot,
    openai, qwen_code, vscode_lm, xai, zai,
};

pub const OPENROUTER_DEFAULT_MODEL_ID: &str = "anthropic/claude-sonnet-4.5";
pub const REQUESTY_DEFAULT_MODEL_ID: &str = "coding/claude-4-sonnet";
pub const GLAMA_DEFAULT_MODEL_ID: &str = "anthropic/claude-3-7-sonnet";
pub const UNBOUND_DEFAULT_MODEL_ID: &str = "anthropic/claude-sonnet-4-5";
pub const LITELLM_DEFAULT_MODEL_ID: &str = "claude-3-7-sonnet-20250219";
pub const DEEPINFRA_DEFAULT_MODEL_ID: &str = "Qwen/Qwen3-Coder-480B-A35B-Instruct-Turbo";
pub const HUGGINGFACE_DEFAULT_MODEL_ID: &str = "meta-llama/Llama-3.3-70B-Instruct";
pub const CHUTES_DEFAULT_MODEL_ID: &str = "deepseek-ai/DeepSeek-R1-0528";
pub const ROO_DEFAULT_MODEL_ID: &str = "xai/grok-code-fast-1";
pub const VERCEL_AI_GATEWAY_DEFAULT_MODEL_ID: &str = "anthropic/claude-sonnet-4";

/// Model id used when the settings name none.
///
/// `region` only matters for Z.ai. Pass-through providers (`openai`,
/// `ollama`, `lmstudio`) have no default and return `""`.
pub fn provider_default_model_id(provider: ProviderName, region: Region) -> &'static str {
    use ProviderName as P;

    match provider {
        P::Anthropic | P::ClaudeCode | P::GeminiCli | P::HumanRelay | P::FakeAi => {
            anthropic::DEFAULT_MODEL_ID
        }
        P::OpenRouter => OPENROUTER_DEFAULT_MODEL_ID,
        P::Requesty => REQUESTY_DEFAULT_MODEL_ID,
        P::Glama => GLAMA_DEFAULT_MODEL_ID,
        P::Unbound => UNBOUND_DEFAULT_MODEL_ID,
        P::LiteLlm => LITELLM_DEFAULT_MODEL_ID,
        P::DeepInfra => DEEPINFRA_DEFAULT_MODEL_ID,
        P::HuggingFace => HUGGINGFACE_DEFAULT_MODEL_ID,
        P::Chutes => CHUTES_DEFAULT_MODEL_ID,
        P::Roo => ROO_DEFAULT_MODEL_ID,
        P::VercelAiGateway => VERCEL_AI_GATEWAY_DEFAULT_MODEL_ID,
        P::Xai => xai::DEFAULT_MODEL_ID,
        P::Groq => groq::DEFAULT_MODEL_ID,
        P::Baseten => hosted::BASETEN_DEFAULT_MODEL_ID,
        P::Bedrock => bedrock::DEFAULT_MODEL_ID,
        P::Vertex => google::VERTEX_DEFAULT_MODEL_ID,
        P::Gemini => google::GEMINI_DEFAULT_MODEL_ID,
        P::DeepSeek => deepseek::DEFAULT_MODEL_ID,
        P::Doubao => doubao::DEFAULT_MODEL_ID,
        P::Moonshot => moonshot::DEFAULT_MODEL_ID,
        P::Minimax => minimax::DEFAULT_MODEL_ID,
        P::Zai => zai::default_model_id(region),
        P::OpenAiNative => openai::DEFAULT_MODEL_ID,
        P::Mistral => mistral::DEFAULT_MODEL_ID,
        P::VsCodeLm => vscode_lm::DEFAULT_MODEL_ID,
        P::Cerebras => hosted::CEREBRAS_DEFAULT_MODEL_ID,
        P::SambaNova => hosted::SAMBANOVA_DEFAULT_MODEL_ID,
        P::Fireworks => hosted::FIREWORKS_DEFAULT_MODEL_ID,
        P::Featherless => hosted::FEATHERLESS_DEFAULT_MODEL_ID,
        P::IoIntelligence => hosted::IO_INTELLIGENCE_DEFAULT_MODEL_ID,
        P::QwenCode => qwen_code::DEFAULT_MODEL_ID,
        P::OpenAi | P::Ollama | P::LmStudio => "",
    }
}

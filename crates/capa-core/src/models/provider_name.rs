//! Typed provider identifiers and alias handling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{EnumIter, IntoEnumIterator};

use crate::error::CapaError;

/// Every provider a settings bundle can select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum ProviderName {
    #[default]
    Anthropic,
    ClaudeCode,
    Glama,
    OpenRouter,
    Bedrock,
    Vertex,
    OpenAi,
    Ollama,
    VsCodeLm,
    LmStudio,
    Gemini,
    GeminiCli,
    OpenAiNative,
    Mistral,
    Moonshot,
    Minimax,
    DeepSeek,
    DeepInfra,
    Doubao,
    QwenCode,
    Unbound,
    Requesty,
    HumanRelay,
    FakeAi,
    Xai,
    Groq,
    Baseten,
    Chutes,
    LiteLlm,
    HuggingFace,
    Cerebras,
    SambaNova,
    Zai,
    Fireworks,
    Featherless,
    IoIntelligence,
    Roo,
    VercelAiGateway,
}

impl ProviderName {
    /// Canonical provider key string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::ClaudeCode => "claude-code",
            Self::Glama => "glama",
            Self::OpenRouter => "openrouter",
            Self::Bedrock => "bedrock",
            Self::Vertex => "vertex",
            Self::OpenAi => "openai",
            Self::Ollama => "ollama",
            Self::VsCodeLm => "vscode-lm",
            Self::LmStudio => "lmstudio",
            Self::Gemini => "gemini",
            Self::GeminiCli => "gemini-cli",
            Self::OpenAiNative => "openai-native",
            Self::Mistral => "mistral",
            Self::Moonshot => "moonshot",
            Self::Minimax => "minimax",
            Self::DeepSeek => "deepseek",
            Self::DeepInfra => "deepinfra",
            Self::Doubao => "doubao",
            Self::QwenCode => "qwen-code",
            Self::Unbound => "unbound",
            Self::Requesty => "requesty",
            Self::HumanRelay => "human-relay",
            Self::FakeAi => "fake-ai",
            Self::Xai => "xai",
            Self::Groq => "groq",
            Self::Baseten => "baseten",
            Self::Chutes => "chutes",
            Self::LiteLlm => "litellm",
            Self::HuggingFace => "huggingface",
            Self::Cerebras => "cerebras",
            Self::SambaNova => "sambanova",
            Self::Zai => "zai",
            Self::Fireworks => "fireworks",
            Self::Featherless => "featherless",
            Self::IoIntelligence => "io-intelligence",
            Self::Roo => "roo",
            Self::VercelAiGateway => "vercel-ai-gateway",
        }
    }

    /// Parse canonical names and user-facing aliases.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        let alias = match normalized.as_str() {
            "claude" => Some(Self::Anthropic),
            "claude_code" => Some(Self::ClaudeCode),
            "open-router" | "open_router" => Some(Self::OpenRouter),
            "aws-bedrock" | "aws_bedrock" => Some(Self::Bedrock),
            "google-vertex" | "vertex-ai" => Some(Self::Vertex),
            "openai-compatible" | "openai_compatible" => Some(Self::OpenAi),
            "vscode" | "vscode_lm" | "copilot" => Some(Self::VsCodeLm),
            "lm-studio" | "lm_studio" => Some(Self::LmStudio),
            "google" => Some(Self::Gemini),
            "openai_native" => Some(Self::OpenAiNative),
            "grok" => Some(Self::Xai),
            "hugging-face" | "hf" => Some(Self::HuggingFace),
            "zhipu" | "z-ai" => Some(Self::Zai),
            "vercel" => Some(Self::VercelAiGateway),
            _ => None,
        };
        alias.or_else(|| Self::iter().find(|p| p.as_str() == normalized))
    }

    /// Providers whose catalog is fetched at runtime by the caller.
    pub const fn is_dynamic(self) -> bool {
        matches!(
            self,
            Self::OpenRouter
                | Self::VercelAiGateway
                | Self::HuggingFace
                | Self::LiteLlm
                | Self::DeepInfra
                | Self::IoIntelligence
                | Self::Requesty
                | Self::Unbound
                | Self::Glama
                | Self::Roo
                | Self::Chutes
        )
    }

    /// Providers backed by a local daemon that reports its own model list.
    pub const fn is_local(self) -> bool {
        matches!(self, Self::Ollama | Self::LmStudio)
    }

    /// All providers in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderName {
    type Err = CapaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CapaError::UnknownProvider(s.to_string()))
    }
}

impl Serialize for ProviderName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProviderName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown provider '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::ProviderName;

    #[test]
    fn canonical_names_round_trip() {
        for provider in ProviderName::all() {
            assert_eq!(ProviderName::parse(provider.as_str()), Some(provider));
        }
    }

    #[test]
    fn parses_aliases() {
        assert_eq!(ProviderName::parse("claude"), Some(ProviderName::Anthropic));
        assert_eq!(ProviderName::parse("grok"), Some(ProviderName::Xai));
        assert_eq!(ProviderName::parse("LM-Studio"), Some(ProviderName::LmStudio));
        assert_eq!(ProviderName::parse("somecloud"), None);
    }

    #[test]
    fn unknown_name_is_an_error_from_str() {
        let err = "somecloud".parse::<ProviderName>().unwrap_err();
        assert!(err.to_string().contains("somecloud"));
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&ProviderName::OpenAiNative).unwrap();
        assert_eq!(json, "\"openai-native\"");
        let parsed: ProviderName = serde_json::from_str("\"vscode-lm\"").unwrap();
        assert_eq!(parsed, ProviderName::VsCodeLm);
    }

    #[test]
    fn local_providers_are_not_dynamic() {
        for provider in [ProviderName::Ollama, ProviderName::LmStudio] {
            assert!(provider.is_local());
            assert!(!provider.is_dynamic());
        }
        assert!(ProviderName::OpenRouter.is_dynamic());
        assert!(!ProviderName::Anthropic.is_dynamic());
    }
}

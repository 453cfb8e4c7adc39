//! The provider settings bundle.
//!
//! A flat record: one selected provider plus per-provider fields. Fields
//! belonging to providers other than the selected one are inert.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{ModelInfo, ProviderName};

/// Vendor + family pair chosen in the editor's language-model picker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VsCodeLmSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

/// API line for the Z.ai provider. Only `ChinaCoding` uses the mainland catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZaiApiLine {
    #[default]
    InternationalCoding,
    InternationalApi,
    ChinaCoding,
    ChinaApi,
}

impl ZaiApiLine {
    pub fn is_mainland_catalog(self) -> bool {
        matches!(self, Self::ChinaCoding)
    }
}

/// Region used when picking a provider's default model id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    International,
    Mainland,
}

/// Settings bundle for the selected provider.
///
/// Serialized with camelCase keys so bundles written by the settings UI parse
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderSettings {
    pub api_provider: Option<ProviderName>,
    /// Shared model id used by static-catalog providers.
    pub api_model_id: Option<String>,

    pub open_router_model_id: Option<String>,
    pub open_router_specific_provider: Option<String>,
    pub requesty_model_id: Option<String>,
    pub glama_model_id: Option<String>,
    pub unbound_model_id: Option<String>,
    pub litellm_model_id: Option<String>,
    pub deep_infra_model_id: Option<String>,
    pub io_intelligence_model_id: Option<String>,
    pub vercel_ai_gateway_model_id: Option<String>,
    pub hugging_face_model_id: Option<String>,
    pub open_ai_model_id: Option<String>,
    pub ollama_model_id: Option<String>,
    pub lm_studio_model_id: Option<String>,
    pub vs_code_lm_model_selector: Option<VsCodeLmSelector>,

    /// User-authored descriptor for ids missing from every catalog.
    pub custom_model_info: Option<ModelInfo>,
    /// Descriptor for the generic OpenAI-compatible provider.
    pub open_ai_custom_model_info: Option<ModelInfo>,

    /// Context length requested from Ollama; only ever shrinks the window.
    pub ollama_num_ctx: Option<u32>,
    #[serde(rename = "awsBedrock1MContext")]
    pub aws_bedrock_1m_context: Option<bool>,
    #[serde(rename = "anthropicBeta1MContext")]
    pub anthropic_beta_1m_context: Option<bool>,
    pub zai_api_line: Option<ZaiApiLine>,

    /// Output-token cap requested by the user; zero means "use the model's".
    pub model_max_tokens: Option<u32>,
    pub doubao_base_url: Option<String>,
    pub moonshot_base_url: Option<String>,
}

impl ProviderSettings {
    /// Selected provider, `anthropic` when unset.
    pub fn provider(&self) -> ProviderName {
        self.api_provider.unwrap_or_default()
    }

    /// Region implied by the settings for region-split providers.
    pub fn region(&self) -> Region {
        if self.zai_api_line.is_some_and(ZaiApiLine::is_mainland_catalog) {
            Region::Mainland
        } else {
            Region::International
        }
    }

    pub fn bedrock_1m_context(&self) -> bool {
        self.aws_bedrock_1m_context.unwrap_or(false)
    }

    pub fn anthropic_1m_context(&self) -> bool {
        self.anthropic_beta_1m_context.unwrap_or(false)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

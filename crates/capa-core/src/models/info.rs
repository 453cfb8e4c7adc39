//! Model capability descriptor.

use serde::{Deserialize, Deserializer, Serialize};

/// Context window assumed when a descriptor leaves it unset.
pub const DEFAULT_CONTEXT_WINDOW: u32 = 128_000;

/// Pricing override that applies above a context-window threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub context_window: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_writes_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_reads_price: Option<f64>,
}

/// Describes what a model can do and what it costs.
///
/// Prices are USD per million tokens. Every field except `context_window` is
/// optional so that partially-known descriptors (fetched catalogs, custom
/// metadata being edited) can be layered with [`crate::merge::overlay`].
/// A `context_window` of zero means "unset".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    #[serde(
        default,
        deserialize_with = "deserialize_token_limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub context_window: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_images: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_prompt_cache: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_native_tools: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_reasoning_budget: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_writes_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_reads_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiers: Option<Vec<PricingTier>>,
}

impl ModelInfo {
    /// Descriptor with only the two mandatory capacity fields set.
    pub fn new(max_tokens: u32, context_window: u32) -> Self {
        Self {
            max_tokens: Some(max_tokens),
            context_window,
            ..Self::default()
        }
    }

    /// Generic descriptor used for OpenAI-compatible endpoints whose
    /// capabilities are unknown.
    pub fn sane_defaults() -> Self {
        Self {
            max_tokens: None,
            context_window: DEFAULT_CONTEXT_WINDOW,
            supports_images: Some(true),
            supports_prompt_cache: Some(false),
            supports_native_tools: Some(true),
            input_price: Some(0.0),
            output_price: Some(0.0),
            ..Self::default()
        }
    }

    pub fn with_images(mut self, supported: bool) -> Self {
        self.supports_images = Some(supported);
        self
    }

    pub fn with_prompt_cache(mut self, supported: bool) -> Self {
        self.supports_prompt_cache = Some(supported);
        self
    }

    pub fn with_prices(mut self, input: f64, output: f64) -> Self {
        self.input_price = Some(input);
        self.output_price = Some(output);
        self
    }

    pub fn with_cache_prices(mut self, writes: f64, reads: f64) -> Self {
        self.cache_writes_price = Some(writes);
        self.cache_reads_price = Some(reads);
        self
    }

    pub fn with_native_tools(mut self, supported: bool) -> Self {
        self.supports_native_tools = Some(supported);
        self
    }

    pub fn with_reasoning_budget(mut self, supported: bool) -> Self {
        self.supports_reasoning_budget = Some(supported);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tiers(mut self, tiers: Vec<PricingTier>) -> Self {
        self.tiers = Some(tiers);
        self
    }

    /// Context window, or [`DEFAULT_CONTEXT_WINDOW`] when unset.
    pub fn context_window_or_default(&self) -> u32 {
        if self.context_window == 0 {
            DEFAULT_CONTEXT_WINDOW
        } else {
            self.context_window
        }
    }

    pub fn accepts_images(&self) -> bool {
        self.supports_images.unwrap_or(false)
    }

    pub fn caches_prompts(&self) -> bool {
        self.supports_prompt_cache.unwrap_or(false)
    }

    /// First pricing tier, if any. Later tiers are never consulted.
    pub fn first_tier(&self) -> Option<&PricingTier> {
        self.tiers.as_deref().and_then(<[PricingTier]>::first)
    }
}

// Fetched catalogs encode "no limit" as -1.
fn deserialize_token_limit<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| u32::try_from(value).ok()))
}

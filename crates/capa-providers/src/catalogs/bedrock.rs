//! Amazon Bedrock models.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo};

pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-sonnet-4-5-20250929-v1:0";

/// Model id that bypasses the catalog for a user-supplied ARN.
pub const CUSTOM_ARN_MODEL_ID: &str = "custom-arn";

/// Ids that can run with a 1M-token context window.
pub const EXTENDED_CONTEXT_MODEL_IDS: [&str; 2] = [
    "anthropic.claude-sonnet-4-20250514-v1:0",
    "anthropic.claude-sonnet-4-5-20250929-v1:0",
];

pub const EXTENDED_CONTEXT_WINDOW: u32 = 1_000_000;

/// Descriptor used for the custom ARN sentinel.
pub fn custom_arn_info() -> ModelInfo {
    ModelInfo::new(5000, 128_000)
        .with_prompt_cache(false)
        .with_images(true)
}

fn claude(max_tokens: u32, input: f64, output: f64) -> ModelInfo {
    ModelInfo::new(max_tokens, 200_000)
        .with_images(true)
        .with_prompt_cache(true)
        .with_native_tools(true)
        .with_reasoning_budget(true)
        .with_prices(input, output)
        .with_cache_prices(input * 1.25, input * 0.1)
}

pub fn models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            ("anthropic.claude-sonnet-4-5-20250929-v1:0", claude(64_000, 3.0, 15.0)),
            ("anthropic.claude-sonnet-4-20250514-v1:0", claude(64_000, 3.0, 15.0)),
            ("anthropic.claude-opus-4-1-20250805-v1:0", claude(32_000, 15.0, 75.0)),
            ("anthropic.claude-haiku-4-5-20251001-v1:0", claude(64_000, 1.0, 5.0)),
            (
                "amazon.nova-pro-v1:0",
                ModelInfo::new(5000, 300_000)
                    .with_images(true)
                    .with_prompt_cache(true)
                    .with_prices(0.8, 3.2)
                    .with_cache_prices(0.0, 0.2),
            ),
            (
                "meta.llama3-3-70b-instruct-v1:0",
                ModelInfo::new(8192, 128_000)
                    .with_images(false)
                    .with_prompt_cache(false)
                    .with_prices(0.72, 0.72),
            ),
        ])
    })
}

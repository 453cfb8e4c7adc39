//! Moonshot (Kimi) models.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo};

pub const DEFAULT_MODEL_ID: &str = "kimi-k2-0905-preview";
pub const API_BASE_URL: &str = "https://api.moonshot.ai/v1";

fn kimi_k2(max_tokens: u32, context_window: u32) -> ModelInfo {
    ModelInfo::new(max_tokens, context_window)
        .with_images(false)
        .with_prompt_cache(true)
        .with_native_tools(true)
        .with_prices(0.6, 2.5)
        .with_cache_prices(0.0, 0.15)
}

pub fn models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            ("kimi-k2-0905-preview", kimi_k2(16_384, 262_144)),
            ("kimi-k2-0711-preview", kimi_k2(32_000, 131_072)),
            (
                "kimi-k2-turbo-preview",
                ModelInfo::new(32_000, 262_144)
                    .with_images(false)
                    .with_prompt_cache(true)
                    .with_native_tools(true)
                    .with_prices(2.4, 10.0)
                    .with_cache_prices(0.0, 0.6),
            ),
            (
                "kimi-k2-thinking",
                ModelInfo::new(16_000, 262_144)
                    .with_images(false)
                    .with_prompt_cache(true)
                    .with_native_tools(true)
                    .with_prices(0.6, 2.5)
                    .with_cache_prices(0.0, 0.15),
            ),
        ])
    })
}

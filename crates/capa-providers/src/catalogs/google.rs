//! Google models: Gemini API and Vertex AI.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo};

pub const GEMINI_DEFAULT_MODEL_ID: &str = "gemini-2.5-pro";
pub const VERTEX_DEFAULT_MODEL_ID: &str = "claude-sonnet-4-5@20250929";

fn gemini_pro() -> ModelInfo {
    ModelInfo::new(64_000, 1_048_576)
        .with_images(true)
        .with_prompt_cache(true)
        .with_native_tools(true)
        .with_reasoning_budget(true)
        .with_prices(2.5, 15.0)
        .with_cache_prices(0.0, 0.625)
}

fn gemini_flash() -> ModelInfo {
    ModelInfo::new(64_000, 1_048_576)
        .with_images(true)
        .with_prompt_cache(true)
        .with_native_tools(true)
        .with_reasoning_budget(true)
        .with_prices(0.3, 2.5)
        .with_cache_prices(0.0, 0.075)
}

fn vertex_claude(max_tokens: u32, input: f64, output: f64) -> ModelInfo {
    ModelInfo::new(max_tokens, 200_000)
        .with_images(true)
        .with_prompt_cache(true)
        .with_native_tools(true)
        .with_reasoning_budget(true)
        .with_prices(input, output)
        .with_cache_prices(input * 1.25, input * 0.1)
}

pub fn gemini_models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            ("gemini-2.5-pro", gemini_pro()),
            ("gemini-2.5-flash", gemini_flash()),
            (
                "gemini-2.0-flash-001",
                ModelInfo::new(8192, 1_048_576)
                    .with_images(true)
                    .with_prompt_cache(true)
                    .with_prices(0.1, 0.4)
                    .with_cache_prices(1.0, 0.025),
            ),
        ])
    })
}

pub fn vertex_models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            ("claude-sonnet-4-5@20250929", vertex_claude(64_000, 3.0, 15.0)),
            ("claude-sonnet-4@20250514", vertex_claude(64_000, 3.0, 15.0)),
            ("claude-opus-4-1@20250805", vertex_claude(32_000, 15.0, 75.0)),
            ("claude-3-7-sonnet@20250219:thinking", vertex_claude(64_000, 3.0, 15.0)),
            ("gemini-2.5-pro", gemini_pro()),
            ("gemini-2.5-flash", gemini_flash()),
        ])
    })
}

//! Groq models.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo};

pub const DEFAULT_MODEL_ID: &str = "moonshotai/kimi-k2-instruct-0905";

pub fn models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            (
                "moonshotai/kimi-k2-instruct-0905",
                ModelInfo::new(16_384, 262_144)
                    .with_images(false)
                    .with_prompt_cache(true)
                    .with_prices(1.0, 3.0)
                    .with_cache_prices(0.0, 0.5),
            ),
            (
                "llama-3.3-70b-versatile",
                ModelInfo::new(8192, 131_072)
                    .with_images(false)
                    .with_prompt_cache(false)
                    .with_prices(0.59, 0.79),
            ),
            (
                "llama-3.1-8b-instant",
                ModelInfo::new(8192, 131_072)
                    .with_images(false)
                    .with_prompt_cache(false)
                    .with_prices(0.05, 0.08),
            ),
            (
                "openai/gpt-oss-120b",
                ModelInfo::new(32_766, 131_072)
                    .with_images(false)
                    .with_prompt_cache(false)
                    .with_prices(0.15, 0.75),
            ),
        ])
    })
}

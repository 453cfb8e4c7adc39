//! xAI Grok models.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo};

pub const DEFAULT_MODEL_ID: &str = "grok-code-fast-1";

pub fn models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            (
                "grok-code-fast-1",
                ModelInfo::new(16_384, 262_144)
                    .with_images(false)
                    .with_prompt_cache(true)
                    .with_native_tools(true)
                    .with_prices(0.2, 1.5)
                    .with_cache_prices(0.0, 0.02),
            ),
            (
                "grok-4",
                ModelInfo::new(8192, 256_000)
                    .with_images(true)
                    .with_prompt_cache(true)
                    .with_native_tools(true)
                    .with_prices(3.0, 15.0)
                    .with_cache_prices(0.0, 0.75),
            ),
            (
                "grok-3-mini",
                ModelInfo::new(8192, 131_072)
                    .with_images(false)
                    .with_prompt_cache(true)
                    .with_prices(0.3, 0.5)
                    .with_cache_prices(0.0, 0.07),
            ),
        ])
    })
}

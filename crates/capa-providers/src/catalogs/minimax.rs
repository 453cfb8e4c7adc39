//! MiniMax models.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo};

pub const DEFAULT_MODEL_ID: &str = "MiniMax-M2";

pub fn models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            (
                "MiniMax-M2",
                ModelInfo::new(16_384, 192_000)
                    .with_images(false)
                    .with_prompt_cache(true)
                    .with_native_tools(true)
                    .with_prices(0.3, 1.2)
                    .with_cache_prices(0.375, 0.03),
            ),
            (
                "MiniMax-M2-Stable",
                ModelInfo::new(16_384, 192_000)
                    .with_images(false)
                    .with_prompt_cache(true)
                    .with_native_tools(true)
                    .with_prices(0.3, 1.2)
                    .with_cache_prices(0.375, 0.03),
            ),
        ])
    })
}

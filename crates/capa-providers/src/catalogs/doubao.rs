//! ByteDance Doubao (Volcengine Ark) models.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo};

pub const DEFAULT_MODEL_ID: &str = "doubao-seed-1-6-250615";
pub const API_BASE_URL: &str = "https://ark.cn-beijing.volces.com/api/v3";

pub fn models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            (
                "doubao-seed-1-6-250615",
                ModelInfo::new(32_768, 128_000)
                    .with_images(true)
                    .with_prompt_cache(true)
                    .with_prices(0.0001, 0.0004)
                    .with_cache_prices(0.0001, 0.00002),
            ),
            (
                "doubao-seed-1-6-thinking-250715",
                ModelInfo::new(32_768, 128_000)
                    .with_images(true)
                    .with_prompt_cache(true)
                    .with_prices(0.0002, 0.0008)
                    .with_cache_prices(0.0002, 0.00004),
            ),
            (
                "doubao-seed-1-6-flash-250715",
                ModelInfo::new(32_768, 128_000)
                    .with_images(true)
                    .with_prompt_cache(true)
                    .with_prices(0.00015, 0.0006)
                    .with_cache_prices(0.00015, 0.00003),
            ),
        ])
    })
}

//! DeepSeek models.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo};

pub const DEFAULT_MODEL_ID: &str = "deepseek-chat";

pub fn models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            (
                "deepseek-chat",
                ModelInfo::new(8192, 128_000)
                    .with_images(false)
                    .with_prompt_cache(true)
                    .with_prices(0.56, 1.68)
                    .with_cache_prices(0.56, 0.07),
            ),
            (
                "deepseek-reasoner",
                ModelInfo::new(65_536, 128_000)
                    .with_images(false)
                    .with_prompt_cache(true)
                    .with_prices(0.56, 1.68)
                    .with_cache_prices(0.56, 0.07),
            ),
        ])
    })
}

//! Mistral models.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo};

pub const DEFAULT_MODEL_ID: &str = "codestral-latest";

pub fn models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            (
                "codestral-latest",
                ModelInfo::new(256_000, 256_000)
                    .with_images(false)
                    .with_prompt_cache(false)
                    .with_prices(0.3, 0.9),
            ),
            (
                "devstral-medium-latest",
                ModelInfo::new(131_000, 131_000)
                    .with_images(true)
                    .with_prompt_cache(false)
                    .with_prices(0.4, 2.0),
            ),
            (
                "mistral-large-latest",
                ModelInfo::new(131_000, 131_000)
                    .with_images(true)
                    .with_prompt_cache(false)
                    .with_prices(2.0, 6.0),
            ),
            (
                "mistral-small-latest",
                ModelInfo::new(32_000, 32_000)
                    .with_images(true)
                    .with_prompt_cache(false)
                    .with_prices(0.2, 0.6),
            ),
        ])
    })
}

//! Qwen Code (OAuth-backed) models.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo};

pub const DEFAULT_MODEL_ID: &str = "qwen3-coder-plus";

pub fn models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            (
                "qwen3-coder-plus",
                ModelInfo::new(65_536, 1_000_000)
                    .with_images(false)
                    .with_prompt_cache(false)
                    .with_prices(0.0, 0.0)
                    .with_description("Qwen3 Coder Plus, free through the Qwen Code OAuth plan"),
            ),
            (
                "qwen3-coder-flash",
                ModelInfo::new(65_536, 1_000_000)
                    .with_images(false)
                    .with_prompt_cache(false)
                    .with_prices(0.0, 0.0),
            ),
        ])
    })
}

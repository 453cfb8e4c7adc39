//! Z.ai GLM models. The mainland coding plan is priced in its own table.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo};
use capa_core::settings::Region;

pub const INTERNATIONAL_DEFAULT_MODEL_ID: &str = "glm-4.6";
pub const MAINLAND_DEFAULT_MODEL_ID: &str = "glm-4.6";

fn glm(max_tokens: u32, context_window: u32, input: f64, output: f64, cache_reads: f64) -> ModelInfo {
    ModelInfo::new(max_tokens, context_window)
        .with_images(false)
        .with_prompt_cache(true)
        .with_native_tools(true)
        .with_prices(input, output)
        .with_cache_prices(0.0, cache_reads)
}

pub fn international_models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            ("glm-4.6", glm(98_304, 200_000, 0.6, 2.2, 0.11)),
            ("glm-4.5", glm(98_304, 131_072, 0.6, 2.2, 0.11)),
            ("glm-4.5-air", glm(98_304, 131_072, 0.2, 1.1, 0.03)),
        ])
    })
}

pub fn mainland_models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            ("glm-4.6", glm(98_304, 204_800, 0.29, 1.14, 0.057)),
            ("glm-4.5", glm(98_304, 131_072, 0.29, 1.14, 0.057)),
            ("glm-4.5-air", glm(98_304, 131_072, 0.1, 0.6, 0.02)),
        ])
    })
}

pub fn models_for(region: Region) -> &'static Catalog {
    match region {
        Region::International => international_models(),
        Region::Mainland => mainland_models(),
    }
}

pub fn default_model_id(region: Region) -> &'static str {
    match region {
        Region::International => INTERNATIONAL_DEFAULT_MODEL_ID,
        Region::Mainland => MAINLAND_DEFAULT_MODEL_ID,
    }
}

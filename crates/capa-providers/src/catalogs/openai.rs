//! OpenAI native models.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo};

pub const DEFAULT_MODEL_ID: &str = "gpt-5.1";

fn gpt5(input: f64, output: f64, cache_reads: f64) -> ModelInfo {
    ModelInfo::new(128_000, 400_000)
        .with_images(true)
        .with_prompt_cache(true)
        .with_native_tools(true)
        .with_prices(input, output)
        .with_cache_prices(0.0, cache_reads)
}

pub fn models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            ("gpt-5.1", gpt5(1.25, 10.0, 0.125)),
            ("gpt-5", gpt5(1.25, 10.0, 0.125)),
            ("gpt-5-mini", gpt5(0.25, 2.0, 0.025)),
            ("gpt-5-nano", gpt5(0.05, 0.4, 0.005)),
            (
                "gpt-4.1",
                ModelInfo::new(32_768, 1_047_576)
                    .with_images(true)
                    .with_prompt_cache(true)
                    .with_native_tools(true)
                    .with_prices(2.0, 8.0)
                    .with_cache_prices(0.0, 0.5),
            ),
            (
                "o3",
                ModelInfo::new(100_000, 200_000)
                    .with_images(true)
                    .with_prompt_cache(true)
                    .with_native_tools(true)
                    .with_prices(2.0, 8.0)
                    .with_cache_prices(0.0, 0.5),
            ),
        ])
    })
}

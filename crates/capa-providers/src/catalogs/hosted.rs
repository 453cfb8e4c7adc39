//! Inference hosts serving open-weight models from fixed lists.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo};

pub const BASETEN_DEFAULT_MODEL_ID: &str = "zai-org/GLM-4.6";
pub const CEREBRAS_DEFAULT_MODEL_ID: &str = "gpt-oss-120b";
pub const SAMBANOVA_DEFAULT_MODEL_ID: &str = "Meta-Llama-3.3-70B-Instruct";
pub const FIREWORKS_DEFAULT_MODEL_ID: &str = "accounts/fireworks/models/kimi-k2-instruct-0905";
pub const FEATHERLESS_DEFAULT_MODEL_ID: &str = "moonshotai/Kimi-K2-Instruct";
pub const IO_INTELLIGENCE_DEFAULT_MODEL_ID: &str =
    "meta-llama/Llama-4-Maverick-17B-128E-Instruct-FP8";

fn text(max_tokens: u32, context_window: u32, input: f64, output: f64) -> ModelInfo {
    ModelInfo::new(max_tokens, context_window)
        .with_images(false)
        .with_prompt_cache(false)
        .with_prices(input, output)
}

pub fn baseten_models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            ("zai-org/GLM-4.6", text(200_000, 200_000, 0.6, 2.2)),
            ("moonshotai/Kimi-K2-Instruct-0905", text(16_384, 262_144, 0.6, 2.5)),
            ("deepseek-ai/DeepSeek-V3.1", text(131_072, 163_840, 0.5, 1.5)),
            ("openai/gpt-oss-120b", text(128_072, 128_072, 0.1, 0.5)),
        ])
    })
}

pub fn cerebras_models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            ("gpt-oss-120b", text(8000, 64_000, 0.0, 0.0)),
            ("qwen-3-coder-480b", text(40_000, 128_000, 0.0, 0.0)),
            ("llama-3.3-70b", text(64_000, 64_000, 0.0, 0.0)),
        ])
    })
}

pub fn sambanova_models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            ("Meta-Llama-3.3-70B-Instruct", text(8192, 131_072, 0.6, 1.2)),
            ("DeepSeek-V3.1", text(8192, 32_768, 3.0, 4.5)),
            ("Qwen3-32B", text(8192, 8192, 0.4, 0.8)),
        ])
    })
}

pub fn fireworks_models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            (
                "accounts/fireworks/models/kimi-k2-instruct-0905",
                text(16_384, 262_144, 0.6, 2.5),
            ),
            (
                "accounts/fireworks/models/qwen3-coder-480b-a35b-instruct",
                text(32_768, 262_144, 0.45, 1.8),
            ),
            ("accounts/fireworks/models/glm-4p6", text(25_344, 198_000, 0.55, 2.19)),
        ])
    })
}

pub fn featherless_models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            ("moonshotai/Kimi-K2-Instruct", text(4096, 32_678, 0.0, 0.0)),
            ("deepseek-ai/DeepSeek-V3-0324", text(4096, 32_678, 0.0, 0.0)),
            ("Qwen/Qwen3-Coder-480B-A35B-Instruct", text(4096, 32_678, 0.0, 0.0)),
        ])
    })
}

/// Compiled-in fallback for IO Intelligence when its fetched list lacks an id.
pub fn io_intelligence_models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            (
                "meta-llama/Llama-4-Maverick-17B-128E-Instruct-FP8",
                ModelInfo::new(8192, 430_000)
                    .with_images(true)
                    .with_prompt_cache(false),
            ),
            (
                "deepseek-ai/DeepSeek-R1-0528",
                ModelInfo::new(8192, 128_000)
                    .with_images(false)
                    .with_prompt_cache(false),
            ),
            (
                "Intel/Qwen3-Coder-480B-A35B-Instruct-int4-mixed-ar",
                ModelInfo::new(8192, 106_000)
                    .with_images(false)
                    .with_prompt_cache(false),
            ),
        ])
    })
}

//! Models exposed by the editor's language-model API, keyed by family.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo};

/// Default family, also used as the default model id.
pub const DEFAULT_MODEL_ID: &str = "claude-3.5-sonnet";

fn family(max_tokens: u32, context_window: u32) -> ModelInfo {
    ModelInfo::new(max_tokens, context_window)
        .with_images(true)
        .with_prompt_cache(false)
        .with_native_tools(true)
        .with_prices(0.0, 0.0)
}

pub fn models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            ("claude-3.5-sonnet", family(15_000, 90_000)),
            ("claude-sonnet-4", family(16_000, 111_836)),
            ("gpt-4o", family(4096, 64_000)),
            ("gpt-4.1", family(16_384, 111_446)),
            ("gpt-5-mini", family(64_000, 127_805)),
            ("gemini-2.5-pro", family(64_000, 108_637)),
        ])
    })
}

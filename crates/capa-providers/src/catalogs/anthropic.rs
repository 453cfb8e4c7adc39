//! Anthropic models, plus the Claude Code lineage derived from them.

use std::sync::OnceLock;

use capa_core::models::{Catalog, ModelInfo, PricingTier};

pub const DEFAULT_MODEL_ID: &str = "claude-sonnet-4-5";

/// Ids that carry a 1M-context beta pricing tier.
pub const BETA_1M_CONTEXT_MODEL_IDS: [&str; 2] = ["claude-sonnet-4-20250514", "claude-sonnet-4-5"];

fn sonnet_1m_tier() -> Vec<PricingTier> {
    vec![PricingTier {
        context_window: 1_000_000,
        input_price: Some(6.0),
        output_price: Some(22.5),
        cache_writes_price: Some(7.5),
        cache_reads_price: Some(0.6),
    }]
}

fn sonnet(description: &str) -> ModelInfo {
    ModelInfo::new(64_000, 200_000)
        .with_images(true)
        .with_prompt_cache(true)
        .with_native_tools(true)
        .with_reasoning_budget(true)
        .with_prices(3.0, 15.0)
        .with_cache_prices(3.75, 0.3)
        .with_tiers(sonnet_1m_tier())
        .with_description(description)
}

pub fn models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        Catalog::from_iter([
            ("claude-sonnet-4-5", sonnet("Claude Sonnet 4.5")),
            ("claude-sonnet-4-20250514", sonnet("Claude Sonnet 4")),
            (
                "claude-opus-4-1-20250805",
                ModelInfo::new(32_000, 200_000)
                    .with_images(true)
                    .with_prompt_cache(true)
                    .with_native_tools(true)
                    .with_reasoning_budget(true)
                    .with_prices(15.0, 75.0)
                    .with_cache_prices(18.75, 1.5),
            ),
            (
                "claude-haiku-4-5-20251001",
                ModelInfo::new(64_000, 200_000)
                    .with_images(true)
                    .with_prompt_cache(true)
                    .with_native_tools(true)
                    .with_reasoning_budget(true)
                    .with_prices(1.0, 5.0)
                    .with_cache_prices(1.25, 0.1),
            ),
            (
                "claude-3-7-sonnet-20250219",
                ModelInfo::new(8192, 200_000)
                    .with_images(true)
                    .with_prompt_cache(true)
                    .with_native_tools(true)
                    .with_prices(3.0, 15.0)
                    .with_cache_prices(3.75, 0.3),
            ),
            (
                "claude-3-5-haiku-20241022",
                ModelInfo::new(8192, 200_000)
                    .with_images(false)
                    .with_prompt_cache(true)
                    .with_native_tools(true)
                    .with_prices(0.8, 4.0)
                    .with_cache_prices(1.0, 0.08),
            ),
        ])
    })
}

/// Claude Code runs Anthropic models through a local CLI that accepts neither
/// images nor cache control, and bills nothing through us.
pub fn claude_code_models() -> &'static Catalog {
    static MODELS: OnceLock<Catalog> = OnceLock::new();
    MODELS.get_or_init(|| {
        models()
            .iter()
            .filter(|(id, _)| !id.starts_with("claude-3-5"))
            .map(|(id, info)| {
                let info = ModelInfo {
                    supports_images: Some(false),
                    supports_prompt_cache: Some(false),
                    supports_reasoning_budget: None,
                    input_price: None,
                    output_price: None,
                    cache_writes_price: None,
                    cache_reads_price: None,
                    tiers: None,
                    ..info.clone()
                };
                (id.to_string(), info)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beta_ids_carry_tiers() {
        for id in BETA_1M_CONTEXT_MODEL_IDS {
            let info = models().get(id).expect("beta id in table");
            assert_eq!(info.first_tier().map(|t| t.context_window), Some(1_000_000));
        }
    }

    #[test]
    fn claude_code_disables_images_and_cache() {
        let info = claude_code_models().get(DEFAULT_MODEL_ID).unwrap();
        assert_eq!(info.supports_images, Some(false));
        assert_eq!(info.supports_prompt_cache, Some(false));
        assert_eq!(info.context_window, 200_000);
        assert!(claude_code_models().get("claude-3-5-haiku-20241022").is_none());
    }
}

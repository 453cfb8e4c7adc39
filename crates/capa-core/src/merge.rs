//! Model-info merge policy.
//!
//! Two operations, deliberately distinct:
//!
//! - [`with_custom_fallback`] is a strict precedence chain: the catalog
//!   descriptor wins outright, then the user's custom descriptor, then nothing.
//!   Fields are never mixed between the two.
//! - [`overlay`] layers a more specific descriptor over a generic one field by
//!   field. Only providers whose capabilities are "sane defaults plus whatever
//!   is known" use it.

use crate::models::{ModelInfo, PricingTier};

/// Catalog descriptor if present, else custom descriptor, else `None`.
pub fn with_custom_fallback(
    catalog_info: Option<ModelInfo>,
    custom_info: Option<&ModelInfo>,
) -> Option<ModelInfo> {
    catalog_info.or_else(|| custom_info.cloned())
}

/// Layer `top` over `base`: every field set in `top` wins.
///
/// A zero context window in `top` counts as unset.
pub fn overlay(base: &ModelInfo, top: &ModelInfo) -> ModelInfo {
    ModelInfo {
        max_tokens: top.max_tokens.or(base.max_tokens),
        context_window: if top.context_window == 0 {
            base.context_window
        } else {
            top.context_window
        },
        supports_images: top.supports_images.or(base.supports_images),
        supports_prompt_cache: top.supports_prompt_cache.or(base.supports_prompt_cache),
        supports_native_tools: top.supports_native_tools.or(base.supports_native_tools),
        supports_reasoning_budget: top
            .supports_reasoning_budget
            .or(base.supports_reasoning_budget),
        input_price: top.input_price.or(base.input_price),
        output_price: top.output_price.or(base.output_price),
        cache_writes_price: top.cache_writes_price.or(base.cache_writes_price),
        cache_reads_price: top.cache_reads_price.or(base.cache_reads_price),
        description: top.description.clone().or_else(|| base.description.clone()),
        tiers: top.tiers.clone().or_else(|| base.tiers.clone()),
    }
}

/// Overlay `top` onto the sane-default descriptor.
pub fn over_sane_defaults(top: &ModelInfo) -> ModelInfo {
    overlay(&ModelInfo::sane_defaults(), top)
}

/// Apply a pricing tier: context window from the tier, each price from the
/// tier when it sets one and from `base` otherwise.
pub fn apply_tier(base: &ModelInfo, tier: &PricingTier) -> ModelInfo {
    ModelInfo {
        context_window: tier.context_window,
        input_price: tier.input_price.or(base.input_price),
        output_price: tier.output_price.or(base.output_price),
        cache_writes_price: tier.cache_writes_price.or(base.cache_writes_price),
        cache_reads_price: tier.cache_reads_price.or(base.cache_reads_price),
        ..base.clone()
    }
}

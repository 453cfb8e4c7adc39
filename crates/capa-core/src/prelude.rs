//! Convenience re-exports for common use.

pub use crate::config::{CapaConfig, SettingsDirectories, SettingsLoader};
pub use crate::custom::{CustomModelEditor, FlagField, NumericField};
pub use crate::error::{CapaError, ErrorCategory, Result};
pub use crate::models::{
    Catalog, ModelInfo, PricingTier, ProviderName, ResolvedModel, DEFAULT_CONTEXT_WINDOW,
};
pub use crate::settings::{ProviderSettings, Region, VsCodeLmSelector, ZaiApiLine};
pub use crate::types::{Cost, Usage};

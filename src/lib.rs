//! Capa -- model and capability resolution for multi-provider coding
//! assistants.
//!
//! Given a provider and a settings bundle, Capa resolves the effective model
//! id and its capability descriptor (context window, pricing, feature flags),
//! applying every fallback and override rule along the way.
//!
//! # Quick Start
//!
//! ```
//! use capa::prelude::*;
//!
//! let settings = ProviderSettings::from_json_str(
//!     r#"{ "apiProvider": "deepseek", "apiModelId": "deepseek-chat" }"#,
//! )?;
//! let resolved = capa::resolve_selected(&settings, &FetchedCatalogs::default());
//! assert_eq!(resolved.id, "deepseek-chat");
//! assert!(resolved.is_resolved());
//! # Ok::<(), capa::error::CapaError>(())
//! ```

pub use capa_core::{config, custom, error, merge, models, settings, types};
pub use capa_providers::{catalogs, defaults, handler, resolver, selection};

pub use capa_providers::{
    parse_usage, provider_default_model_id, request_model, resolve, resolve_with, select_model,
    CatalogSources, CatalogView, FetchState, FetchedCatalogs, MaxTokensField, RequestModel,
    SelectedModel, UsageFormat,
};

pub mod prelude;

use capa_core::models::ResolvedModel;
use capa_core::settings::ProviderSettings;

/// Resolve the model for the provider selected in `settings`.
pub fn resolve_selected(settings: &ProviderSettings, catalogs: &FetchedCatalogs) -> ResolvedModel {
    resolve(settings.provider(), settings, catalogs)
}

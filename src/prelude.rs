//! Convenience re-exports for common use.

pub use capa_core::prelude::*;
pub use capa_providers::{
    request_model, resolve, select_model, CatalogSources, FetchState, FetchedCatalogs,
    RequestModel, SelectedModel, UsageFormat,
};

//! Capa Providers -- built-in catalogs, resolution strategies and request
//! profiles.
//!
//! This crate contains the compiled-in model tables for every static
//! provider, the per-provider resolution strategy table, readiness-aware
//! selection and the request profiles for providers whose handlers choose
//! their own model parameters.
//!
//! Provider-agnostic types live in `capa-core`.

pub mod catalogs;
pub mod defaults;
pub mod handler;
pub mod resolver;
pub mod selection;

pub use defaults::provider_default_model_id;
pub use handler::{parse_usage, request_model, MaxTokensField, RequestModel, UsageFormat};
pub use resolver::{resolve, resolve_with, CatalogView, FetchedCatalogs};
pub use selection::{select_model, CatalogSources, FetchState, SelectedModel};

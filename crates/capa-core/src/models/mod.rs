//! Model descriptors, catalogs and provider identifiers.

pub mod catalog;
pub mod info;
pub mod provider_name;

pub use catalog::Catalog;
pub use info::{ModelInfo, PricingTier, DEFAULT_CONTEXT_WINDOW};
pub use provider_name::ProviderName;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of resolving the selected model.
///
/// `info` is `None` when the id is named but no capability data exists for
/// it. Callers surface that as an invalid selection instead of showing some
/// other model's data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedModel {
    pub id: String,
    pub info: Option<ModelInfo>,
}

impl ResolvedModel {
    pub fn new(id: impl Into<String>, info: Option<ModelInfo>) -> Self {
        Self {
            id: id.into(),
            info,
        }
    }

    /// Whether capability data was found for the id.
    pub fn is_resolved(&self) -> bool {
        self.info.is_some()
    }
}

impl fmt::Display for ResolvedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.info {
            Some(info) => write!(f, "{} ({} ctx)", self.id, info.context_window),
            None => write!(f, "{} (unresolved)", self.id),
        }
    }
}

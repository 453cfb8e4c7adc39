//! Model catalogs: model id -> descriptor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ModelInfo;
use crate::error::Result;

/// Mapping from model identifier to descriptor for a single provider.
///
/// Catalogs are either compiled in or fetched by the caller; either way they
/// are read-only once built. Keys are unique and unordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    models: HashMap<String, ModelInfo>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON object of `{ "<model id>": <descriptor> }`.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn get(&self, model_id: &str) -> Option<&ModelInfo> {
        self.models.get(model_id)
    }

    pub fn contains(&self, model_id: &str) -> bool {
        self.models.contains_key(model_id)
    }

    pub fn insert(&mut self, model_id: impl Into<String>, info: ModelInfo) -> Option<ModelInfo> {
        self.models.insert(model_id.into(), info)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelInfo)> {
        self.models.iter().map(|(id, info)| (id.as_str(), info))
    }
}

impl<S: Into<String>> FromIterator<(S, ModelInfo)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (S, ModelInfo)>>(iter: I) -> Self {
        Self {
            models: iter
                .into_iter()
                .map(|(id, info)| (id.into(), info))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fetched_json_catalog() {
        let catalog = Catalog::from_json_str(
            r#"{
                "anthropic/claude-sonnet-4.5": {"maxTokens": 64000, "contextWindow": 1000000},
                "openai/gpt-5": {"maxTokens": 128000, "contextWindow": 400000, "supportsImages": true}
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("openai/gpt-5").and_then(|m| m.supports_images),
            Some(true)
        );
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn non_object_json_is_an_error() {
        assert!(Catalog::from_json_str("[1, 2, 3]").is_err());
    }
}

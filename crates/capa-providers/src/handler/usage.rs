//! Vendor usage payloads.

use capa_core::error::{CapaError, Result};
use capa_core::models::ProviderName;
use capa_core::types::Usage;
use serde::Deserialize;
use serde_json::Value;

/// Shape of the `usage` object a vendor returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageFormat {
    /// `prompt_tokens_details.cached_tokens` counts cache reads.
    OpenAi,
    /// Cache misses are billed as cache writes.
    Doubao,
    /// Cache reads are reported top-level; there are no cache writes.
    Moonshot,
}

impl UsageFormat {
    pub fn for_provider(provider: ProviderName) -> Self {
        match provider {
            ProviderName::Doubao => Self::Doubao,
            ProviderName::Moonshot => Self::Moonshot,
            _ => Self::OpenAi,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawUsage {
    #[serde(default)]
    prompt_tokens: Option<u64>,
    #[serde(default)]
    completion_tokens: Option<u64>,
    #[serde(default)]
    cached_tokens: Option<u64>,
    #[serde(default)]
    prompt_tokens_details: Option<PromptTokensDetails>,
}

#[derive(Debug, Default, Deserialize)]
struct PromptTokensDetails {
    #[serde(default)]
    cached_tokens: Option<u64>,
    #[serde(default)]
    cache_miss_tokens: Option<u64>,
}

/// Parse a vendor `usage` object. Missing counters count as zero; `null`
/// parses as empty usage.
pub fn parse_usage(format: UsageFormat, payload: &Value) -> Result<Usage> {
    let raw = match payload {
        Value::Null => RawUsage::default(),
        Value::Object(_) => RawUsage::deserialize(payload)?,
        other => {
            return Err(CapaError::Serialization(serde::de::Error::custom(format!(
                "usage payload must be an object, got {other}"
            ))))
        }
    };

    let details = raw.prompt_tokens_details.unwrap_or_default();
    let (cache_write_tokens, cache_read_tokens) = match format {
        UsageFormat::OpenAi => (None, details.cached_tokens),
        UsageFormat::Doubao => (details.cache_miss_tokens, details.cached_tokens),
        UsageFormat::Moonshot => (Some(0), raw.cached_tokens),
    };

    Ok(Usage {
        input_tokens: raw.prompt_tokens.unwrap_or(0),
        output_tokens: raw.completion_tokens.unwrap_or(0),
        cache_write_tokens,
        cache_read_tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn doubao_bills_cache_misses_as_writes() {
        let usage = parse_usage(
            UsageFormat::Doubao,
            &json!({
                "prompt_tokens": 1200,
                "completion_tokens": 300,
                "prompt_tokens_details": { "cached_tokens": 1000, "cache_miss_tokens": 200 }
            }),
        )
        .unwrap();
        assert_eq!(
            usage,
            Usage {
                input_tokens: 1200,
                output_tokens: 300,
                cache_write_tokens: Some(200),
                cache_read_tokens: Some(1000),
            }
        );
    }

    #[test]
    fn moonshot_reads_top_level_cache_counter() {
        let usage = parse_usage(
            UsageFormat::Moonshot,
            &json!({ "prompt_tokens": 10, "completion_tokens": 5, "cached_tokens": 8 }),
        )
        .unwrap();
        assert_eq!(usage.cache_write_tokens, Some(0));
        assert_eq!(usage.cache_read_tokens, Some(8));
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let usage = parse_usage(UsageFormat::OpenAi, &json!({})).unwrap();
        assert_eq!(usage, Usage::default());
        let usage = parse_usage(UsageFormat::OpenAi, &Value::Null).unwrap();
        assert_eq!(usage.total_tokens(), 0);
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = parse_usage(UsageFormat::OpenAi, &json!([1, 2])).unwrap_err();
        assert!(matches!(err, CapaError::Serialization(_)), "got {err:?}");
    }

    #[test]
    fn format_follows_provider() {
        assert_eq!(UsageFormat::for_provider(ProviderName::Doubao), UsageFormat::Doubao);
        assert_eq!(UsageFormat::for_provider(ProviderName::Vertex), UsageFormat::OpenAi);
    }
}

//! Token usage and cost types.

use serde::{Deserialize, Serialize};

use crate::models::ModelInfo;

/// Token usage reported for one request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_write_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_read_tokens: Option<u64>,
}

impl Usage {
    /// Merge another usage into this one (accumulate).
    pub fn merge(&mut self, other: &Usage) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
        if let Some(v) = other.cache_write_tokens {
            *self.cache_write_tokens.get_or_insert(0) += v;
        }
        if let Some(v) = other.cache_read_tokens {
            *self.cache_read_tokens.get_or_insert(0) += v;
        }
    }

    pub fn total_tokens(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// Estimated cost for a request, in USD.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Cost {
    pub input_cost: f64,
    pub output_cost: f64,
    pub cache_write_cost: f64,
    pub cache_read_cost: f64,
    pub total_cost: f64,
}

impl Cost {
    /// Compute cost from usage and a descriptor's per-million prices.
    /// Unset prices count as free.
    pub fn from_usage(usage: &Usage, info: &ModelInfo) -> Self {
        let per_million = |tokens: u64, price: Option<f64>| {
            (tokens as f64 / 1_000_000.0) * price.unwrap_or(0.0)
        };
        let input_cost = per_million(usage.input_tokens, info.input_price);
        let output_cost = per_million(usage.output_tokens, info.output_price);
        let cache_write_cost = per_million(
            usage.cache_write_tokens.unwrap_or(0),
            info.cache_writes_price,
        );
        let cache_read_cost = per_million(
            usage.cache_read_tokens.unwrap_or(0),
            info.cache_reads_price,
        );
        Self {
            input_cost,
            output_cost,
            cache_write_cost,
            cache_read_cost,
            total_cost: input_cost + output_cost + cache_write_cost + cache_read_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_accumulates_optional_counters() {
        let mut total = Usage {
            input_tokens: 10,
            output_tokens: 5,
            ..Usage::default()
        };
        total.merge(&Usage {
            input_tokens: 1,
            output_tokens: 2,
            cache_write_tokens: None,
            cache_read_tokens: Some(7),
        });
        assert_eq!(total.total_tokens(), 18);
        assert_eq!(total.cache_read_tokens, Some(7));
        assert_eq!(total.cache_write_tokens, None);
    }

    #[test]
    fn cost_uses_all_four_prices() {
        let info = ModelInfo::new(8192, 200_000)
            .with_prices(3.0, 15.0)
            .with_cache_prices(3.75, 0.3);
        let usage = Usage {
            input_tokens: 1_000_000,
            output_tokens: 100_000,
            cache_write_tokens: Some(200_000),
            cache_read_tokens: Some(1_000_000),
        };
        let cost = Cost::from_usage(&usage, &info);
        assert!((cost.input_cost - 3.0).abs() < 1e-9);
        assert!((cost.output_cost - 1.5).abs() < 1e-9);
        assert!((cost.cache_write_cost - 0.75).abs() < 1e-9);
        assert!((cost.cache_read_cost - 0.3).abs() < 1e-9);
        assert!((cost.total_cost - 5.55).abs() < 1e-9);
    }

    #[test]
    fn unpriced_model_costs_nothing() {
        let cost = Cost::from_usage(
            &Usage {
                input_tokens: 500,
                output_tokens: 500,
                ..Usage::default()
            },
            &ModelInfo::new(1, 1),
        );
        assert_eq!(cost.total_cost, 0.0);
    }
}

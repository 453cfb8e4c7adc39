//! Error types for Capa.
//!
//! Model resolution itself never fails: a miss degrades to an absent
//! descriptor. Errors only come from the ambient layers (settings loading,
//! catalog and usage parsing, request profiles).

use thiserror::Error;

/// Primary error type for all fallible Capa operations.
#[derive(Error, Debug)]
pub enum CapaError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("provider {provider} does not support {operation}")]
    UnsupportedProvider { provider: String, operation: String },
}

/// Broad error category for routing recovery hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Serialization,
    Provider,
}

impl CapaError {
    /// Shorthand for [`CapaError::UnsupportedProvider`].
    pub fn unsupported(provider: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::UnsupportedProvider {
            provider: provider.into(),
            operation: operation.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Io(_) => ErrorCategory::Io,
            Self::Serialization(_) | Self::Toml(_) => ErrorCategory::Serialization,
            Self::UnknownProvider(_) | Self::UnsupportedProvider { .. } => ErrorCategory::Provider,
        }
    }

    /// Whether editing settings (rather than the environment) fixes this error.
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Configuration | ErrorCategory::Serialization | ErrorCategory::Provider
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CapaError>;

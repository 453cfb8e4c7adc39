//! CLI-specific error formatting for user-facing messages.

use capa::error::CapaError;

/// Map a [`CapaError`] to a user-facing help string with actionable guidance.
pub fn format_error_help(err: &CapaError) -> String {
    match err {
        CapaError::UnknownProvider(name) => {
            format!("Unknown provider '{name}'. Run: capa providers")
        }
        CapaError::UnsupportedProvider {
            provider,
            operation,
        } => {
            format!(
                "{provider} does not support {operation}. Request profiles exist for doubao, moonshot and vertex"
            )
        }
        CapaError::Configuration(msg) => {
            format!("Configuration error: {msg}. Check ~/.capa/settings.json or .capa/settings.json")
        }
        CapaError::Serialization(_) | CapaError::Toml(_) => {
            format!("{err}. Check the file against the settings format")
        }
        other => format!("{other}"),
    }
}

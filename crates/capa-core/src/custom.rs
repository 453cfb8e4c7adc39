//! Editing rules for user-authored custom model metadata.
//!
//! The settings UI hands us raw text for numeric fields. Parsing is lenient
//! (a leading number is accepted, trailing junk ignored) but the fallback is
//! asymmetric: an unparsable context window resets to
//! [`DEFAULT_CONTEXT_WINDOW`], while unparsable token limits and prices
//! become unset.

use crate::models::{ModelInfo, DEFAULT_CONTEXT_WINDOW};
use crate::settings::ProviderSettings;

/// Text-entry fields of the custom model form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    MaxTokens,
    ContextWindow,
    InputPrice,
    OutputPrice,
}

/// Checkbox fields of the custom model form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagField {
    Images,
    PromptCache,
    ReasoningBudget,
}

/// Applies form edits to the custom descriptor held in a settings bundle.
#[derive(Debug)]
pub struct CustomModelEditor<'a> {
    settings: &'a mut ProviderSettings,
}

impl<'a> CustomModelEditor<'a> {
    pub fn new(settings: &'a mut ProviderSettings) -> Self {
        Self { settings }
    }

    /// Current custom descriptor, empty when none has been entered.
    pub fn current(&self) -> ModelInfo {
        self.settings.custom_model_info.clone().unwrap_or_default()
    }

    /// Parse `text` into `field` and store the updated descriptor.
    pub fn set_text(&mut self, field: NumericField, text: &str) -> &ModelInfo {
        let mut info = self.current();
        match field {
            NumericField::MaxTokens => info.max_tokens = parse_int(text),
            NumericField::ContextWindow => {
                info.context_window = parse_int(text).unwrap_or(DEFAULT_CONTEXT_WINDOW)
            }
            NumericField::InputPrice => info.input_price = parse_float(text),
            NumericField::OutputPrice => info.output_price = parse_float(text),
        }
        self.store(info)
    }

    pub fn set_flag(&mut self, field: FlagField, value: bool) -> &ModelInfo {
        let mut info = self.current();
        match field {
            FlagField::Images => info.supports_images = Some(value),
            FlagField::PromptCache => info.supports_prompt_cache = Some(value),
            FlagField::ReasoningBudget => info.supports_reasoning_budget = Some(value),
        }
        self.store(info)
    }

    /// Drop stored custom metadata once a predefined model is selected.
    /// Returns whether anything was cleared.
    pub fn sync_selection(&mut self, is_custom_model: bool) -> bool {
        if is_custom_model || self.settings.custom_model_info.is_none() {
            return false;
        }
        tracing::debug!("clearing custom model info for predefined model");
        self.settings.custom_model_info = None;
        true
    }

    fn store(&mut self, info: ModelInfo) -> &ModelInfo {
        self.settings.custom_model_info.insert(info)
    }
}

/// Text shown in the form for a numeric field; empty when unset.
pub fn display_text(info: &ModelInfo, field: NumericField) -> String {
    match field {
        NumericField::MaxTokens => info.max_tokens.map(|v| v.to_string()),
        NumericField::ContextWindow => {
            (info.context_window != 0).then(|| info.context_window.to_string())
        }
        NumericField::InputPrice => info.input_price.map(|v| v.to_string()),
        NumericField::OutputPrice => info.output_price.map(|v| v.to_string()),
    }
    .unwrap_or_default()
}

/// Leading-integer parse. Negative or absent numbers yield `None`.
fn parse_int(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: &str = {
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        &unsigned[..end]
    };
    digits.parse().ok()
}

/// Leading-decimal parse: the longest numeric prefix wins.
fn parse_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let candidate_len = trimmed
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(trimmed.len());
    (1..=candidate_len)
        .rev()
        .find_map(|end| trimmed[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn non_numeric_context_window_resets_to_default() {
        let mut settings = ProviderSettings::default();
        let info = CustomModelEditor::new(&mut settings)
            .set_text(NumericField::ContextWindow, "lots")
            .clone();
        assert_eq!(info.context_window, 128_000);
    }

    #[test]
    fn non_numeric_max_tokens_is_unset() {
        let mut settings = ProviderSettings {
            custom_model_info: Some(ModelInfo::new(4096, 64_000)),
            ..ProviderSettings::default()
        };
        let info = CustomModelEditor::new(&mut settings)
            .set_text(NumericField::MaxTokens, "abc")
            .clone();
        assert_eq!(info.max_tokens, None);
        assert_eq!(info.context_window, 64_000);
    }

    #[test]
    fn non_numeric_price_is_unset() {
        let mut settings = ProviderSettings::default();
        let mut editor = CustomModelEditor::new(&mut settings);
        editor.set_text(NumericField::InputPrice, "2.5");
        let info = editor.set_text(NumericField::InputPrice, "free").clone();
        assert_eq!(info.input_price, None);
    }

    #[test]
    fn leading_numbers_are_accepted() {
        assert_eq!(parse_int(" 16384 tokens"), Some(16_384));
        assert_eq!(parse_int("12.9"), Some(12));
        assert_eq!(parse_int("-5"), None);
        assert_eq!(parse_float("3.75/M"), Some(3.75));
        assert_eq!(parse_float("1e2"), Some(100.0));
        assert_eq!(parse_float("."), None);
    }

    #[test]
    fn edits_preserve_other_fields() {
        let mut settings = ProviderSettings::default();
        let mut editor = CustomModelEditor::new(&mut settings);
        editor.set_text(NumericField::MaxTokens, "16384");
        editor.set_text(NumericField::ContextWindow, "256000");
        editor.set_flag(FlagField::Images, true);
        let info = editor.set_flag(FlagField::PromptCache, true).clone();

        assert_eq!(info.max_tokens, Some(16_384));
        assert_eq!(info.context_window, 256_000);
        assert_eq!(info.supports_images, Some(true));
        assert_eq!(info.supports_prompt_cache, Some(true));
        assert_eq!(display_text(&info, NumericField::MaxTokens), "16384");
        assert_eq!(display_text(&info, NumericField::OutputPrice), "");
    }

    #[test]
    fn switching_to_predefined_model_clears_custom_info() {
        let mut settings = ProviderSettings {
            custom_model_info: Some(ModelInfo::new(16_384, 256_000)),
            ..ProviderSettings::default()
        };
        assert!(!CustomModelEditor::new(&mut settings).sync_selection(true));
        assert!(settings.custom_model_info.is_some());

        assert!(CustomModelEditor::new(&mut settings).sync_selection(false));
        assert_eq!(settings.custom_model_info, None);
        assert!(!CustomModelEditor::new(&mut settings).sync_selection(false));
    }
}

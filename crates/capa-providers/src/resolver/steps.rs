//! Descriptor adjustment steps.

use capa_core::merge::{apply_tier, over_sane_defaults, overlay, with_custom_fallback};
use capa_core::models::{ModelInfo, ProviderName};
use capa_core::settings::ProviderSettings;

use super::strategy::Step;
use super::CatalogView;
use crate::catalogs::{anthropic, bedrock};

pub(super) struct StepContext<'a> {
    pub provider: ProviderName,
    pub settings: &'a ProviderSettings,
    pub catalogs: CatalogView<'a>,
}

/// Working state threaded through the steps. Once `finalized` is set the
/// remaining steps are skipped.
#[derive(Debug)]
pub(super) struct Resolution {
    pub id: String,
    pub info: Option<ModelInfo>,
    pub finalized: bool,
}

impl Resolution {
    pub fn new(id: String, info: Option<ModelInfo>) -> Self {
        Self {
            id,
            info,
            finalized: false,
        }
    }

    fn replace(&mut self, step: Step, info: Option<ModelInfo>) {
        if self.info != info {
            tracing::debug!(?step, model_id = %self.id, "adjusted model info");
        }
        self.info = info;
    }

    fn finalize(&mut self, step: Step, info: ModelInfo) {
        self.replace(step, Some(info));
        self.finalized = true;
    }
}

pub(super) fn apply_step(step: Step, ctx: &StepContext<'_>, res: &mut Resolution) {
    match step {
        Step::Sentinel => {
            if res.id == bedrock::CUSTOM_ARN_MODEL_ID {
                res.finalize(step, bedrock::custom_arn_info());
            }
        }
        Step::ExtendedContext => {
            if !bedrock::EXTENDED_CONTEXT_MODEL_IDS.contains(&res.id.as_str())
                || !ctx.settings.bedrock_1m_context()
            {
                return;
            }
            if let Some(base) = &res.info {
                let info = ModelInfo {
                    context_window: bedrock::EXTENDED_CONTEXT_WINDOW,
                    ..base.clone()
                };
                res.finalize(step, info);
            }
        }
        Step::BetaTier => {
            if ctx.provider != ProviderName::Anthropic
                || !anthropic::BETA_1M_CONTEXT_MODEL_IDS.contains(&res.id.as_str())
                || !ctx.settings.anthropic_1m_context()
            {
                return;
            }
            let tiered = res
                .info
                .as_ref()
                .and_then(|base| base.first_tier().map(|tier| apply_tier(base, tier)));
            if let Some(info) = tiered {
                res.finalize(step, info);
            }
        }
        Step::EndpointOverlay => {
            let endpoint = ctx
                .settings
                .open_router_specific_provider
                .as_deref()
                .filter(|name| !name.is_empty())
                .and_then(|name| ctx.catalogs.openrouter_endpoints?.get(name));
            if let Some(endpoint) = endpoint {
                let info = match &res.info {
                    Some(base) => overlay(base, endpoint),
                    None => endpoint.clone(),
                };
                res.replace(step, Some(info));
            }
        }
        Step::ClampContext => {
            let Some(num_ctx) = ctx.settings.ollama_num_ctx.filter(|&n| n != 0) else {
                return;
            };
            let clamped = res
                .info
                .as_ref()
                .filter(|info| info.context_window != 0 && num_ctx < info.context_window)
                .map(|info| ModelInfo {
                    context_window: num_ctx,
                    ..info.clone()
                });
            if clamped.is_some() {
                res.replace(step, clamped);
            }
        }
        Step::CustomFallback => {
            let info = with_custom_fallback(
                res.info.take(),
                ctx.settings.custom_model_info.as_ref(),
            );
            res.replace(step, info);
        }
        Step::SaneDefaultsUnderlay { fill_missing } => {
            let info = match &res.info {
                Some(info) => Some(over_sane_defaults(info)),
                None if fill_missing => Some(ModelInfo::sane_defaults()),
                None => None,
            };
            res.replace(step, info);
        }
        Step::DisableImages => {
            if let Some(info) = &res.info {
                let info = ModelInfo {
                    supports_images: Some(false),
                    ..info.clone()
                };
                res.replace(step, Some(info));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capa_core::models::Catalog;
    use pretty_assertions::assert_eq;

    fn run(step: Step, settings: &ProviderSettings, id: &str, info: Option<ModelInfo>) -> Resolution {
        let ctx = StepContext {
            provider: ProviderName::Anthropic,
            settings,
            catalogs: CatalogView::default(),
        };
        let mut res = Resolution::new(id.to_string(), info);
        apply_step(step, &ctx, &mut res);
        res
    }

    #[test]
    fn clamp_never_enlarges() {
        let settings = ProviderSettings {
            ollama_num_ctx: Some(256_000),
            ..ProviderSettings::default()
        };
        let res = run(
            Step::ClampContext,
            &settings,
            "qwen3",
            Some(ModelInfo::new(4096, 128_000)),
        );
        assert_eq!(res.info.unwrap().context_window, 128_000);
    }

    #[test]
    fn clamp_zero_is_ignored() {
        let settings = ProviderSettings {
            ollama_num_ctx: Some(0),
            ..ProviderSettings::default()
        };
        let res = run(
            Step::ClampContext,
            &settings,
            "qwen3",
            Some(ModelInfo::new(4096, 128_000)),
        );
        assert_eq!(res.info.unwrap().context_window, 128_000);
    }

    #[test]
    fn sentinel_finalizes() {
        let res = run(Step::Sentinel, &ProviderSettings::default(), "custom-arn", None);
        assert!(res.finalized);
        assert_eq!(res.info, Some(bedrock::custom_arn_info()));
    }

    #[test]
    fn extended_context_requires_base_descriptor() {
        let settings = ProviderSettings {
            aws_bedrock_1m_context: Some(true),
            ..ProviderSettings::default()
        };
        let res = run(
            Step::ExtendedContext,
            &settings,
            "anthropic.claude-sonnet-4-20250514-v1:0",
            None,
        );
        assert!(!res.finalized);
        assert_eq!(res.info, None);
    }

    #[test]
    fn endpoint_overlay_uses_endpoint_alone_without_base() {
        let endpoints: Catalog = [("Together", ModelInfo::new(2048, 32_000))]
            .into_iter()
            .collect();
        let settings = ProviderSettings {
            open_router_specific_provider: Some("Together".to_string()),
            ..ProviderSettings::default()
        };
        let ctx = StepContext {
            provider: ProviderName::OpenRouter,
            settings: &settings,
            catalogs: CatalogView {
                openrouter_endpoints: Some(&endpoints),
                ..CatalogView::default()
            },
        };
        let mut res = Resolution::new("x/y".to_string(), None);
        apply_step(Step::EndpointOverlay, &ctx, &mut res);
        assert_eq!(res.info, Some(ModelInfo::new(2048, 32_000)));
    }

    #[test]
    fn underlay_without_fill_keeps_missing() {
        let res = run(
            Step::SaneDefaultsUnderlay {
                fill_missing: false,
            },
            &ProviderSettings::default(),
            "x",
            None,
        );
        assert_eq!(res.info, None);
    }
}

//! CLI argument definitions for Capa.

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Capa model resolution CLI
#[derive(Parser, Debug)]
#[command(name = "capa", version, about = "Capa - resolve models and capabilities per provider")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the selected model and print its descriptor
    Resolve(ResolveArgs),
    /// List providers with their catalog kind and default model
    Providers(ProvidersArgs),
    /// Print request parameters for a provider with a request profile
    Request(SettingsArgs),
}

/// Where settings come from, plus ad-hoc overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Settings file (JSON or TOML); defaults to ~/.capa and .capa layering
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Provider override (e.g. anthropic, openrouter, ollama)
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Model id override (applies to the shared model id field)
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Arguments for `capa providers`.
#[derive(Args, Debug, Clone, Default)]
pub struct ProvidersArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `capa resolve`.
#[derive(Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// JSON file with fetched catalogs (router, openrouterEndpoints, ollama, lmstudio)
    #[arg(short, long, value_name = "FILE")]
    pub catalogs: Option<PathBuf>,
}

//! Capa CLI binary entry point.

mod cli;
mod errors;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{commands, Cli, Commands};

const LOG_ENV: &str = "CAPA_LOG";

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("Error: cannot read current directory: {e}");
            std::process::exit(1);
        }
    };

    let result = match &cli.command {
        Commands::Resolve(args) => commands::handle_resolve(args, &cwd),
        Commands::Providers(args) => commands::handle_providers(args),
        Commands::Request(args) => commands::handle_request(args, &cwd),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {}", errors::format_error_help(&e));
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

//! shieldgen - trpc-shield permission scaffold generator
//!
//! Invoked by the code generation host once per run; see `shieldgen --help`.

use clap::{Parser, Subcommand};
use shieldgen_cli::{generate, render};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when `RUST_LOG` is unset: the two library crates at info.
const DEFAULT_LOG_FILTER: &str = "shieldgen_core=info,shieldgen_cli=info";

#[derive(Parser)]
#[command(
    name = "shieldgen",
    version,
    about = "Generates trpc-shield permission scaffolds"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shield.ts for a host request
    Generate(generate::GenerateArgs),
    /// Print a shield module for the given operation names
    Render(render::RenderArgs),
}

fn main() {
    // Logs go to stderr so `--stdout` output stays a clean module.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Render(args) => render::run(args),
    };
    std::process::exit(code);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_default_log_filter_parses() {
        let filter = EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("shieldgen_core=info"));
        assert!(rendered.contains("shieldgen_cli=info"));
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}

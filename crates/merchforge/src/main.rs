//! Merchforge CLI - generative merch mockup studio.
//!
//! Merchforge composites a logo onto a product mockup (optionally worn by a
//! catalog model), edits images, or generates images from text via a remote
//! generation service, then runs every result through a local export
//! pipeline (format conversion and bounded resampling) before saving.
//!
//! # Usage
//!
//! ```bash
//! # Composite a logo onto a teal t-shirt worn by a model
//! merchforge mockup --logo logo.png --product tshirt --color teal --model model-3
//!
//! # Generate an image from text and save it as a medium WebP
//! merchforge generate --prompt "An astronaut riding a horse on Mars" --format webp --size medium
//!
//! # Re-encode an existing file without any service call
//! merchforge export result.png --format jpeg --size small --title "My Cool Shirt"
//!
//! # View configuration
//! merchforge config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Merchforge - generative merch mockup studio with a configurable export pipeline.
#[derive(Parser, Debug)]
#[command(name = "merchforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Composite a logo onto a product, optionally worn by a model
    Mockup(cli::mockup::MockupArgs),

    /// Apply an edit instruction to an image
    Edit(cli::edit::EditArgs),

    /// Generate an image from a text prompt
    Generate(cli::generate::GenerateArgs),

    /// Re-encode and resize a local image without a generation call
    Export(cli::export::ExportArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match merchforge_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `merchforge config path`."
            );
            merchforge_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Merchforge v{}", merchforge_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Mockup(args) => cli::mockup::execute(args, &config).await,
        Commands::Edit(args) => cli::edit::execute(args, &config).await,
        Commands::Generate(args) => cli::generate::execute(args, &config).await,
        Commands::Export(args) => cli::export::execute(args, &config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}

//! The `merchforge generate` command: text-to-image.

use clap::Args;
use merchforge_core::{Config, Merchforge};

use super::common::{export_and_save, spinner, ExportFlags};

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Description of the image to generate
    #[arg(long, required = true)]
    pub prompt: String,

    #[command(flatten)]
    pub export: ExportFlags,
}

/// Execute the generate command.
pub async fn execute(args: GenerateArgs, config: &Config) -> anyhow::Result<()> {
    let client = Merchforge::new(config.clone())?.generation_client()?;

    let bar = spinner("Generating your masterpiece...");
    let result = client.generate_image(&args.prompt).await;
    bar.finish_and_clear();
    let image = result?;

    // Title defaults to the leading slice of the prompt, like the result
    // panel caption
    let default_title: String = args.prompt.chars().take(30).collect();
    export_and_save(config, image, &args.export, &default_title).await?;
    Ok(())
}

//! The `merchforge edit` command: apply an instruction to an uploaded image.

use clap::Args;
use merchforge_core::{Config, Merchforge};
use std::path::PathBuf;

use super::common::{export_and_save, load_image, spinner, ExportFlags};

/// Arguments for the `edit` command.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Image file to edit
    #[arg(required = true)]
    pub input: PathBuf,

    /// Edit instruction
    #[arg(long, default_value = "Add a retro, vintage filter to the image.")]
    pub prompt: String,

    #[command(flatten)]
    pub export: ExportFlags,
}

/// Execute the edit command.
pub async fn execute(args: EditArgs, config: &Config) -> anyhow::Result<()> {
    let client = Merchforge::new(config.clone())?.generation_client()?;
    let image = load_image(&args.input)?;

    let bar = spinner("Editing image...");
    let result = client.edit_image(&image, &args.prompt).await;
    bar.finish_and_clear();
    let edited = result?;

    export_and_save(config, edited, &args.export, "Image Edit").await?;
    Ok(())
}

//! The `merchforge export` command: run the export pipeline on a local file
//! without calling the generation service.

use clap::Args;
use merchforge_core::Config;
use std::path::PathBuf;

use super::common::{export_and_save, load_image, ExportFlags};

/// Arguments for the `export` command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Image file to re-encode
    #[arg(required = true)]
    pub input: PathBuf,

    #[command(flatten)]
    pub export: ExportFlags,
}

/// Execute the export command.
pub async fn execute(args: ExportArgs, config: &Config) -> anyhow::Result<()> {
    let image = load_image(&args.input)?;
    let default_title = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("result")
        .to_string();

    export_and_save(config, image, &args.export, &default_title).await?;
    Ok(())
}

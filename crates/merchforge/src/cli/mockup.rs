//! The `merchforge mockup` command: composite a logo onto a product,
//! optionally worn by a catalog model.

use anyhow::Context;
use clap::Args;
use merchforge_core::catalog::{self, PLACEMENT_PROMPTS};
use merchforge_core::{Config, Merchforge, MockupPrompt};
use std::path::PathBuf;

use super::common::{export_and_save, fetch_reference, load_image, spinner, ExportFlags};
use super::types::QualityArg;

/// Arguments for the `mockup` command.
#[derive(Args, Debug)]
pub struct MockupArgs {
    /// Logo image file
    #[arg(long, required = true)]
    pub logo: PathBuf,

    /// Product id (see `PRODUCTS` in the catalog, e.g. "tshirt", "mug")
    #[arg(long, default_value = "tshirt")]
    pub product: String,

    /// Product photo to composite onto (defaults to the catalog reference)
    #[arg(long)]
    pub product_image: Option<PathBuf>,

    /// Product color name (t-shirt only; defaults to the first catalog color)
    #[arg(long)]
    pub color: Option<String>,

    /// Catalog model id to wear the product (e.g. "model-3")
    #[arg(long)]
    pub model: Option<String>,

    /// Free-form placement instruction
    #[arg(long)]
    pub prompt: Option<String>,

    /// Use one of the canned placement instructions (1-based index)
    #[arg(long, conflicts_with = "prompt")]
    pub placement: Option<usize>,

    /// Keep the logo background instead of removing it first
    #[arg(long)]
    pub keep_background: bool,

    /// Output quality tier
    #[arg(long, value_enum, default_value = "standard")]
    pub quality: QualityArg,

    #[command(flatten)]
    pub export: ExportFlags,
}

impl MockupArgs {
    fn placement_text(&self) -> anyhow::Result<String> {
        if let Some(prompt) = &self.prompt {
            return Ok(prompt.clone());
        }
        let index = self.placement.unwrap_or(1);
        PLACEMENT_PROMPTS
            .get(index.wrapping_sub(1))
            .map(|p| p.to_string())
            .with_context(|| {
                format!(
                    "--placement must be between 1 and {}",
                    PLACEMENT_PROMPTS.len()
                )
            })
    }
}

/// Execute the mockup command.
pub async fn execute(args: MockupArgs, config: &Config) -> anyhow::Result<()> {
    let product = catalog::product(&args.product)
        .with_context(|| format!("unknown product id \"{}\"", args.product))?;

    let color = match &args.color {
        Some(name) => Some(product.color(name).with_context(|| {
            format!("product \"{}\" has no color \"{name}\"", product.id)
        })?),
        None => product.default_color(),
    };

    let model = match &args.model {
        Some(id) => {
            Some(catalog::model(id).with_context(|| format!("unknown model id \"{id}\""))?)
        }
        None => None,
    };

    let client = Merchforge::new(config.clone())?.generation_client()?;

    let mut logo = load_image(&args.logo)?;
    if !args.keep_background {
        let bar = spinner("Removing logo background...");
        let result = client.remove_logo_background(&logo).await;
        bar.finish_and_clear();
        logo = result?;
    }

    let product_image = match &args.product_image {
        Some(path) => load_image(path)?,
        None => fetch_reference(product.image_url).await?,
    };
    let model_image = match model {
        Some(m) => Some(fetch_reference(m.image_url).await?),
        None => None,
    };

    let mut prompt = MockupPrompt::new(product.name, args.placement_text()?)
        .with_model(model.is_some())
        .quality(args.quality.into());
    if let Some(color) = color {
        prompt = prompt.color(color.name);
    }
    let instruction = prompt.build();

    let bar = spinner("Generating mockup...");
    let result = client
        .generate_mockup(&product_image, &logo, &instruction, model_image.as_ref())
        .await;
    bar.finish_and_clear();
    let mockup = result?;

    export_and_save(config, mockup, &args.export, product.name).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> MockupArgs {
        MockupArgs {
            logo: PathBuf::from("logo.png"),
            product: "tshirt".to_string(),
            product_image: None,
            color: None,
            model: None,
            prompt: None,
            placement: None,
            keep_background: false,
            quality: QualityArg::Standard,
            export: super::super::common::ExportFlags {
                format: None,
                size: None,
                title: None,
                output: None,
            },
        }
    }

    #[test]
    fn test_placement_defaults_to_first_canned_prompt() {
        let text = base_args().placement_text().unwrap();
        assert_eq!(text, PLACEMENT_PROMPTS[0]);
    }

    #[test]
    fn test_placement_index_is_one_based() {
        let mut args = base_args();
        args.placement = Some(3);
        assert_eq!(args.placement_text().unwrap(), PLACEMENT_PROMPTS[2]);
    }

    #[test]
    fn test_placement_out_of_range_errors() {
        let mut args = base_args();
        args.placement = Some(99);
        assert!(args.placement_text().is_err());
        args.placement = Some(0);
        assert!(args.placement_text().is_err());
    }

    #[test]
    fn test_free_form_prompt_wins() {
        let mut args = base_args();
        args.prompt = Some("On the sleeve.".to_string());
        assert_eq!(args.placement_text().unwrap(), "On the sleeve.");
    }
}

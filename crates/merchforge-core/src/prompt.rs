//! Mockup prompt assembly.
//!
//! The generation service receives one flattened instruction string built
//! from the user's selections. Wording changes with the number of reference
//! images (two without a model photo, three with one), and the high quality
//! tier appends a fixed emphasis block.

use serde::{Deserialize, Serialize};

/// Output quality tier for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Standard,
    High,
}

const HIGH_QUALITY_SUFFIX: &str = "\n\nIMPORTANT: Generate the image at the highest possible \
     photorealistic quality. Pay close attention to fabric textures, realistic lighting, and \
     subtle shadows. The final result should be indistinguishable from a professional product \
     photoshoot.";

/// Fixed instruction for the background-removal preprocessing pass.
pub const REMOVE_BACKGROUND_PROMPT: &str = "Remove the background from this logo image. Output \
     the logo on a fully transparent background, preserving the logo's colors and edges exactly. \
     Do not alter, crop, or restyle the logo itself.";

/// Builder for the mockup instruction string.
#[derive(Debug, Clone)]
pub struct MockupPrompt {
    product_name: String,
    color: Option<String>,
    with_model: bool,
    placement: String,
    quality: Quality,
}

impl MockupPrompt {
    pub fn new(product_name: impl Into<String>, placement: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            color: None,
            with_model: false,
            placement: placement.into(),
            quality: Quality::Standard,
        }
    }

    /// Prefix the product name with a color (e.g. "Teal T-Shirt").
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Switch to the three-image wording (person + product + logo).
    pub fn with_model(mut self, with_model: bool) -> Self {
        self.with_model = with_model;
        self
    }

    pub fn quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    /// Assemble the final instruction string.
    pub fn build(&self) -> String {
        let product = match &self.color {
            Some(color) => format!("{} {}", color, self.product_name),
            None => self.product_name.clone(),
        };

        let mut prompt = if self.with_model {
            format!(
                "You are provided with three images: a person (model), a product ({product}), \
                 and a logo. Your task is to create a photorealistic mockup.\n\
                 1. Place the logo onto the product. The product should be the color specified \
                 in the product name.\n\
                 2. Then, place the product (with the logo on it) onto the model, making it look \
                 like they are wearing/using it naturally.\n\
                 3. Ensure the final image has realistic lighting, shadows, and perspective \
                 consistent with the model's original photo. The lighting on the product and \
                 logo should seamlessly match the ambient lighting of the model's environment. \
                 Create natural-looking shadows cast by the product on the model.\n\
                 The user-provided instruction for placement is: \"{placement}\"",
                placement = self.placement
            )
        } else {
            format!(
                "You are provided with two images: a product ({product}) and a logo. Your task \
                 is to create a photorealistic mockup.\n\
                 1. Place the logo onto the product. The product should be the color specified \
                 in the product name.\n\
                 2. The final image should be a high-quality product shot.\n\
                 3. Generate realistic lighting and shadows that match the product's material \
                 and shape. The lighting should look natural and create a sense of depth. If \
                 the product is on a surface, it should cast a subtle, realistic shadow.\n\
                 The user-provided instruction for placement is: \"{placement}\"",
                placement = self.placement
            )
        };

        if self.quality == Quality::High {
            prompt.push_str(HIGH_QUALITY_SUFFIX);
        }
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_image_wording_without_model() {
        let prompt = MockupPrompt::new("Coffee Mug", "Center the logo.").build();
        assert!(prompt.starts_with("You are provided with two images"));
        assert!(prompt.contains("a product (Coffee Mug)"));
        assert!(prompt.contains("\"Center the logo.\""));
    }

    #[test]
    fn test_three_image_wording_with_model() {
        let prompt = MockupPrompt::new("T-Shirt", "Left chest.")
            .with_model(true)
            .build();
        assert!(prompt.starts_with("You are provided with three images"));
        assert!(prompt.contains("wearing/using it naturally"));
    }

    #[test]
    fn test_color_prefixes_product_name() {
        let prompt = MockupPrompt::new("T-Shirt", "Center.")
            .color("Teal")
            .build();
        assert!(prompt.contains("a product (Teal T-Shirt)"));
    }

    #[test]
    fn test_high_quality_appends_suffix() {
        let standard = MockupPrompt::new("Hat", "Front.").build();
        let high = MockupPrompt::new("Hat", "Front.")
            .quality(Quality::High)
            .build();
        assert!(!standard.contains("IMPORTANT:"));
        assert!(high.contains("IMPORTANT: Generate the image at the highest possible"));
        assert!(high.starts_with(&standard));
    }
}

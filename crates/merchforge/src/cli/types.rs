//! CLI enum types mapping flag values onto core export/generation options.

use clap::ValueEnum;
use merchforge_core::{ImageFormat, Quality, SizeClass};

/// Download format choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Lossless PNG
    Png,
    /// JPEG at fixed 90% quality
    Jpeg,
    /// WebP at fixed 90% quality
    Webp,
}

impl From<FormatArg> for ImageFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Png => ImageFormat::Png,
            FormatArg::Jpeg => ImageFormat::Jpeg,
            FormatArg::Webp => ImageFormat::WebP,
        }
    }
}

/// Download size choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SizeArg {
    /// Keep intrinsic resolution
    Original,
    /// Bound the longer side to 1920px
    Large,
    /// Bound the longer side to 1280px
    Medium,
    /// Bound the longer side to 800px
    Small,
}

impl From<SizeArg> for SizeClass {
    fn from(value: SizeArg) -> Self {
        match value {
            SizeArg::Original => SizeClass::Original,
            SizeArg::Large => SizeClass::Large,
            SizeArg::Medium => SizeClass::Medium,
            SizeArg::Small => SizeClass::Small,
        }
    }
}

/// Generation quality tier.
#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum QualityArg {
    /// Standard output (default)
    #[default]
    Standard,
    /// Emphasize photorealistic detail (may take longer to generate)
    High,
}

impl From<QualityArg> for Quality {
    fn from(value: QualityArg) -> Self {
        match value {
            QualityArg::Standard => Quality::Standard,
            QualityArg::High => Quality::High,
        }
    }
}

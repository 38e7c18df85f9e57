//! Export configuration enums and the target-dimension policy.
//!
//! Formats and size classes are closed sets so the whole format x size
//! configuration space is checkable at compile time; nothing here is an
//! open string field.

use serde::{Deserialize, Serialize};

/// Fixed quality factor for lossy formats (not user-configurable).
pub const LOSSY_QUALITY: u8 = 90;

/// Output encoding for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossless baseline
    Png,
    /// Lossy at fixed quality 90, alpha flattened
    Jpeg,
    /// Lossy at fixed quality 90
    WebP,
}

impl ImageFormat {
    /// Parse a format identifier (case-insensitive). Accepts the common
    /// `jpg` spelling for JPEG.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpeg" | "jpg" => Some(Self::Jpeg),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Encoder MIME type.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
        }
    }

    /// File extension. Note JPEG exports use the full `jpeg` extension,
    /// matching the format identifier.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::WebP => "webp",
        }
    }

    /// Whether the encoder discards information.
    pub fn is_lossy(&self) -> bool {
        !matches!(self, Self::Png)
    }

    /// Identifier as used in config files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        self.extension()
    }
}

/// Output resolution class bounding the longer image dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    /// No resampling; intrinsic dimensions pass through
    Original,
    /// Longer side bounded to 1920px
    Large,
    /// Longer side bounded to 1280px
    Medium,
    /// Longer side bounded to 800px
    Small,
}

impl SizeClass {
    /// Parse a size identifier (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "original" => Some(Self::Original),
            "large" => Some(Self::Large),
            "medium" => Some(Self::Medium),
            "small" => Some(Self::Small),
            _ => None,
        }
    }

    /// Maximum longer-side dimension, or `None` for `Original`.
    pub fn max_dimension(&self) -> Option<u32> {
        match self {
            Self::Original => None,
            Self::Large => Some(1920),
            Self::Medium => Some(1280),
            Self::Small => Some(800),
        }
    }

    /// Identifier as used in config files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Large => "large",
            Self::Medium => "medium",
            Self::Small => "small",
        }
    }

    /// Resolve output dimensions for an image of the given intrinsic size.
    ///
    /// Downscale-only: when both intrinsic dimensions already fit the bound
    /// the image passes through unchanged. Otherwise the longer side is
    /// clamped to the bound and the shorter side scales proportionally, so
    /// aspect ratio is preserved exactly (within integral rounding). Results
    /// are never zero.
    pub fn target_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        let Some(max_dim) = self.max_dimension() else {
            return (width, height);
        };
        if width <= max_dim && height <= max_dim {
            return (width, height);
        }

        let (tw, th) = if width >= height {
            let scaled = (height as f64 * (max_dim as f64 / width as f64)).round();
            (max_dim, scaled as u32)
        } else {
            let scaled = (width as f64 * (max_dim as f64 / height as f64)).round();
            (scaled as u32, max_dim)
        };
        (tw.max(1), th.max(1))
    }
}

/// Derive a filesystem-safe download slug from a display title.
///
/// Lower-cases the title and collapses whitespace runs into single hyphens;
/// a blank title falls back to `"result"`.
pub fn slug(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return "result".to_string();
    }
    trimmed
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

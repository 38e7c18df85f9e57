//! Merchforge Core - mockup generation and image export library.
//!
//! Merchforge composites logos onto product mockups, edits uploaded images,
//! and generates images from text by delegating pixel synthesis to a remote
//! generation service, then runs results through a local export pipeline
//! (decode, bounded resample, re-encode, name).
//!
//! # Architecture
//!
//! ```text
//! Selections → Prompt → Generation service → ImageHandle
//!                                               │
//!              ExportRequest (format, size, title)
//!                                               ▼
//!            Decode → Resolve dimensions → Resample → Encode → Artifact
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use merchforge_core::{ExportRequest, ImageFormat, ImageHandle, Merchforge, SizeClass};
//!
//! #[tokio::main]
//! async fn main() -> merchforge_core::Result<()> {
//!     let forge = Merchforge::with_defaults()?;
//!
//!     let image = ImageHandle::from_bytes(std::fs::read("./result.png")?);
//!     let request = ExportRequest::new(image, ImageFormat::WebP, SizeClass::Medium, "My Cool Shirt");
//!     let artifact = forge.exporter().export(request).await?;
//!     std::fs::write(&artifact.file_name, &artifact.bytes)?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod generation;
pub mod handle;
pub mod prompt;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, ExportError, ExportResult, MerchforgeError, Result, UpstreamError};
pub use export::{ExportArtifact, ExportRequest, Exporter, ImageFormat, SizeClass};
pub use generation::{GenerationClient, GenerationProvider, GenerationProviderFactory};
pub use handle::ImageHandle;
pub use prompt::{MockupPrompt, Quality};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Merchforge studio - the main entry point.
///
/// Holds the loaded configuration and hands out the export and generation
/// entry points built from it.
pub struct Merchforge {
    config: Config,
}

impl Merchforge {
    /// Create a studio from an already-loaded configuration.
    pub fn new(config: Config) -> Result<Self> {
        tracing::debug!("Initializing Merchforge v{}", VERSION);
        Ok(Self { config })
    }

    /// Create a studio with configuration loaded from the default path.
    pub fn with_defaults() -> Result<Self> {
        let config = Config::load()?;
        Self::new(config)
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build an exporter under the configured limits.
    pub fn exporter(&self) -> Exporter {
        Exporter::new(self.config.limits.clone())
    }

    /// Build a generation client for the configured provider.
    pub fn generation_client(&self) -> Result<GenerationClient> {
        let provider =
            GenerationProviderFactory::create(&self.config.generation, &self.config.limits)?;
        Ok(GenerationClient::new(provider))
    }
}

//! Generation provider trait and request types.
//!
//! Defines the interface a generation backend implements, plus the factory
//! that creates the right provider from config.

use crate::config::{GenConfig, LimitsConfig};
use crate::error::UpstreamError;
use crate::handle::ImageHandle;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::time::Duration;

/// A base64-encoded reference image ready to send to the service.
#[derive(Debug, Clone)]
pub struct ImagePart {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type (e.g. "image/png")
    pub mime_type: String,
}

impl ImagePart {
    /// Create a part from raw bytes and a MIME type.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            data: BASE64.encode(bytes),
            mime_type: mime_type.into(),
        }
    }

    /// Create a part from an image handle, carrying its MIME hint.
    pub fn from_handle(handle: &ImageHandle) -> Self {
        Self::from_bytes(handle.bytes(), handle.mime_type())
    }
}

/// A request to synthesize one image.
///
/// Reference images are ordered; the mockup flow sends product, logo, and
/// optionally a model photo, in that order.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Instruction text
    pub prompt: String,
    /// Ordered reference images (may be empty for text-to-image)
    pub images: Vec<ImagePart>,
}

impl GenerationRequest {
    /// Text-to-image request with no references.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            images: Vec::new(),
        }
    }

    /// Request with reference images.
    pub fn with_images(prompt: impl Into<String>, images: Vec<ImagePart>) -> Self {
        Self {
            prompt: prompt.into(),
            images,
        }
    }
}

/// Trait a generation backend implements.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (we need `Box<dyn GenerationProvider>` for dynamic dispatch).
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Provider name for logging (e.g. "gemini").
    fn name(&self) -> &str;

    /// Whether the provider has credentials configured.
    async fn is_available(&self) -> bool;

    /// Synthesize one image for the given request.
    async fn generate(&self, request: &GenerationRequest) -> Result<ImageHandle, UpstreamError>;

    /// Per-request timeout for this provider.
    fn timeout(&self) -> Duration;
}

impl std::fmt::Debug for dyn GenerationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationProvider")
            .field("name", &self.name())
            .finish()
    }
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok()
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Factory that creates the configured provider.
pub struct GenerationProviderFactory;

impl GenerationProviderFactory {
    /// Create a provider from the generation config section.
    ///
    /// The per-request timeout comes from `limits.generate_timeout_ms`.
    pub fn create(
        config: &GenConfig,
        limits: &LimitsConfig,
    ) -> Result<Box<dyn GenerationProvider>, UpstreamError> {
        match config.provider.as_str() {
            "gemini" => {
                let cfg = config.gemini.clone().unwrap_or_default();
                let api_key =
                    resolve_env_var(&cfg.api_key).ok_or_else(|| UpstreamError::Unconfigured {
                        message: "Gemini API key not set. Set GEMINI_API_KEY env var.".to_string(),
                    })?;
                Ok(Box::new(super::gemini::GeminiProvider::new(
                    &cfg.endpoint,
                    &api_key,
                    &cfg.model,
                    Duration::from_millis(limits.generate_timeout_ms),
                )))
            }
            other => Err(UpstreamError::Unconfigured {
                message: format!("Unknown generation provider: {other}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenConfig;

    #[test]
    fn test_image_part_from_bytes() {
        let part = ImagePart::from_bytes(&[1, 2, 3], "image/png");
        assert_eq!(part.mime_type, "image/png");
        assert!(!part.data.is_empty());
    }

    #[test]
    fn test_image_part_from_handle_carries_mime_hint() {
        let handle = ImageHandle::with_mime_type(vec![0xFF, 0xD8], "image/jpeg");
        let part = ImagePart::from_handle(&handle);
        assert_eq!(part.mime_type, "image/jpeg");
    }

    #[test]
    fn test_resolve_env_var() {
        // Non-env-var strings pass through
        assert_eq!(resolve_env_var("plain-key"), Some("plain-key".to_string()));
        // Empty returns None
        assert_eq!(resolve_env_var(""), None);
        // Unset env var returns None
        assert_eq!(resolve_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), None);
    }

    #[test]
    fn test_factory_rejects_unknown_provider() {
        let config = GenConfig {
            provider: "dalle".to_string(),
            gemini: None,
        };
        let err =
            GenerationProviderFactory::create(&config, &LimitsConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Unknown generation provider"));
    }

    #[test]
    fn test_factory_applies_configured_timeout() {
        let config = GenConfig {
            provider: "gemini".to_string(),
            gemini: Some(crate::config::GeminiConfig {
                api_key: "test-key".to_string(),
                ..Default::default()
            }),
        };
        let limits = LimitsConfig {
            generate_timeout_ms: 5000,
            ..Default::default()
        };
        let provider = GenerationProviderFactory::create(&config, &limits).unwrap();
        assert_eq!(provider.timeout(), Duration::from_millis(5000));
    }
}

//! Sub-configuration structs with defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory where exported artifacts are saved
    pub output_dir: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("~/merchforge"),
        }
    }
}

/// Resource limits to protect against problematic inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum input size in megabytes
    pub max_file_size_mb: u64,

    /// Maximum intrinsic image dimension (width or height)
    pub max_image_dimension: u32,

    /// Time budget for one export (decode + resample + encode) in milliseconds
    pub export_timeout_ms: u64,

    /// Generation service call timeout in milliseconds
    pub generate_timeout_ms: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 100,
            max_image_dimension: 10000,
            export_timeout_ms: 15000,
            generate_timeout_ms: 120000,
        }
    }
}

/// Default export preferences, overridable per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Default output format identifier ("png", "jpeg", "webp")
    pub format: String,

    /// Default size class identifier ("original", "large", "medium", "small")
    pub size: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: "png".to_string(),
            size: "original".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Generation service provider configurations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Active provider identifier
    pub provider: String,

    /// Gemini configuration
    pub gemini: Option<GeminiConfig>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            gemini: Some(GeminiConfig::default()),
        }
    }
}

/// Gemini image generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Model name
    pub model: String,

    /// API endpoint base
    pub endpoint: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: "${GEMINI_API_KEY}".to_string(),
            model: "gemini-2.5-flash-image-preview".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}

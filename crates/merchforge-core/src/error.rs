//! Error types for the Merchforge pipeline.
//!
//! Errors are organized by stage so the caller can tell apart a bad input
//! image, a failed re-encode, and a failed generation-service call. All of
//! them are recoverable at the point of the user action.

use thiserror::Error;

/// Top-level error type for Merchforge operations.
#[derive(Error, Debug)]
pub enum MerchforgeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Export pipeline errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Generation service errors
    #[error("Generation error: {0}")]
    Upstream(#[from] UpstreamError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Export pipeline errors, organized by stage.
///
/// `Decode` and `Encode` map to a user-visible "failed to prepare image for
/// download" message at the shell; neither produces a partial artifact.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Image decoding failed (malformed or unloadable resource)
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// Re-encoding into the target format failed
    #[error("Encode error for {format}: {message}")]
    Encode { format: String, message: String },

    /// Decode/render exceeded the configured time budget
    #[error("Timeout in {stage} stage after {timeout_ms}ms")]
    Timeout { stage: String, timeout_ms: u64 },

    /// Input exceeds the byte-size limit
    #[error("Image too large: {size_mb}MB > {max_mb}MB")]
    FileTooLarge { size_mb: u64, max_mb: u64 },

    /// Input dimensions exceed the limit
    #[error("Image too large: {width}x{height} > {max_dim}")]
    ImageTooLarge {
        width: u32,
        height: u32,
        max_dim: u32,
    },
}

/// Generation service errors.
///
/// Service messages are surfaced verbatim to the user; none of these are
/// fatal to the process.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The request never produced an HTTP response
    #[error("Generation request failed: {message}")]
    Request { message: String },

    /// The service answered with a non-success status
    #[error("Generation service HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The response contained no image payload
    #[error("Generation service returned no image data")]
    NoImage,

    /// Provider is missing credentials or is unknown
    #[error("{message}")]
    Unconfigured { message: String },
}

/// Convenience type alias for Merchforge results.
pub type Result<T> = std::result::Result<T, MerchforgeError>;

/// Convenience type alias for export pipeline results.
pub type ExportResult<T> = std::result::Result<T, ExportError>;

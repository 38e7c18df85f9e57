//! In-memory handle to a decodable raster image.
//!
//! The generation service traffics in base64 data URLs; the export pipeline
//! and the CLI traffic in raw bytes. `ImageHandle` is the boundary type both
//! sides share. It is immutable once produced — intrinsic dimensions are
//! only knowable after decode and are never assumed beforehand.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::ExportError;

/// A generated or uploaded image held in memory for the lifetime of the
/// current result.
#[derive(Debug, Clone)]
pub struct ImageHandle {
    bytes: Vec<u8>,
    /// MIME type hint from the producer, if one was given. Decode never
    /// trusts it — format is detected from content.
    mime_type: Option<String>,
}

impl ImageHandle {
    /// Wrap raw encoded image bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime_type: None,
        }
    }

    /// Wrap raw encoded image bytes with a MIME type hint.
    pub fn with_mime_type(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: Some(mime_type.into()),
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` URL into a handle.
    pub fn from_data_url(url: &str) -> Result<Self, ExportError> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| ExportError::Decode {
                message: "not a data URL".to_string(),
            })?;
        let (header, payload) = rest.split_once(',').ok_or_else(|| ExportError::Decode {
            message: "data URL has no payload separator".to_string(),
        })?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| ExportError::Decode {
                message: "data URL is not base64-encoded".to_string(),
            })?;

        let bytes = BASE64.decode(payload).map_err(|e| ExportError::Decode {
            message: format!("invalid base64 payload: {e}"),
        })?;

        Ok(Self {
            bytes,
            mime_type: (!mime_type.is_empty()).then(|| mime_type.to_string()),
        })
    }

    /// Raw encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the handle, returning the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Byte length of the encoded image.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the handle holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// MIME type hint, defaulting to `image/png` when the producer gave none.
    pub fn mime_type(&self) -> &str {
        self.mime_type.as_deref().unwrap_or("image/png")
    }

    /// Render the handle as a base64 data URL.
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type(),
            BASE64.encode(&self.bytes)
        )
    }
}

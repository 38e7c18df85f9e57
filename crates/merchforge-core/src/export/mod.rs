//! The export pipeline: decode, resolve target dimensions, resample,
//! re-encode, name.
//!
//! This is the path behind every download action. Each export owns its own
//! decode buffer and rendering surface for the duration of one call and
//! drops them unconditionally; nothing here is shared between requests, so
//! two exports can never race on the same buffer.

mod decode;
mod encode;
mod options;

pub use decode::{decode_handle, DecodedImage};
pub use options::{slug, ImageFormat, SizeClass, LOSSY_QUALITY};

use image::imageops::FilterType;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::LimitsConfig;
use crate::error::ExportError;
use crate::handle::ImageHandle;

/// One export intent, constructed fresh per download action.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// The generated result to export
    pub image: ImageHandle,
    /// Output encoding
    pub format: ImageFormat,
    /// Output resolution class
    pub size: SizeClass,
    /// Display title used to derive the filename
    pub title: String,
}

impl ExportRequest {
    pub fn new(
        image: ImageHandle,
        format: ImageFormat,
        size: SizeClass,
        title: impl Into<String>,
    ) -> Self {
        Self {
            image,
            format,
            size,
            title: title.into(),
        }
    }
}

/// The output of the pipeline: re-encoded bytes plus everything the caller
/// needs to trigger a save.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// Re-encoded image bytes
    pub bytes: Vec<u8>,
    /// Encoder MIME type
    pub mime_type: &'static str,
    /// File extension matching the chosen format
    pub extension: &'static str,
    /// Derived filename (`slug(title) + "." + extension`)
    pub file_name: String,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

impl ExportArtifact {
    /// Render the artifact as a base64 data URL.
    pub fn data_url(&self) -> String {
        ImageHandle::with_mime_type(self.bytes.clone(), self.mime_type).data_url()
    }
}

/// Runs export requests under the configured input limits and time budget.
pub struct Exporter {
    limits: LimitsConfig,
}

impl Exporter {
    /// Create an exporter with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Run the full pipeline for one request.
    ///
    /// Decode and resample are the blocking stages, so the whole synchronous
    /// body runs on a blocking worker under `export_timeout_ms` — the caller
    /// awaits without stalling other work. On any failure no artifact is
    /// produced; the request is safe to retry.
    pub async fn export(&self, request: ExportRequest) -> Result<ExportArtifact, ExportError> {
        let limits = self.limits.clone();
        let timeout_ms = limits.export_timeout_ms;

        let result = timeout(Duration::from_millis(timeout_ms), async {
            tokio::task::spawn_blocking(move || export_sync(&request, &limits)).await
        })
        .await;

        match result {
            Ok(Ok(inner)) => inner,
            Ok(Err(e)) => Err(ExportError::Decode {
                message: format!("export task join error: {e}"),
            }),
            Err(_) => Err(ExportError::Timeout {
                stage: "export".to_string(),
                timeout_ms,
            }),
        }
    }
}

/// Synchronous pipeline body (runs in `spawn_blocking`).
fn export_sync(
    request: &ExportRequest,
    limits: &LimitsConfig,
) -> Result<ExportArtifact, ExportError> {
    let decoded = decode_handle(&request.image, limits)?;

    let (target_width, target_height) = request
        .size
        .target_dimensions(decoded.width, decoded.height);

    // Original bypasses the resample step entirely; everything else gets a
    // single full-frame blit into a freshly allocated buffer.
    let rendered = if (target_width, target_height) == (decoded.width, decoded.height) {
        decoded.image
    } else {
        tracing::debug!(
            from = %format!("{}x{}", decoded.width, decoded.height),
            to = %format!("{target_width}x{target_height}"),
            size = request.size.as_str(),
            "resampling for export"
        );
        decoded
            .image
            .resize_exact(target_width, target_height, FilterType::Lanczos3)
    };

    let bytes = encode::encode(&rendered, request.format)?;
    let file_name = format!("{}.{}", slug(&request.title), request.format.extension());

    tracing::debug!(
        file = %file_name,
        bytes = bytes.len(),
        format = request.format.as_str(),
        "export complete"
    );

    Ok(ExportArtifact {
        bytes,
        mime_type: request.format.mime_type(),
        extension: request.format.extension(),
        file_name,
        width: target_width,
        height: target_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn handle_of(width: u32, height: u32) -> ImageHandle {
        let img = image::DynamicImage::new_rgb8(width, height);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        ImageHandle::from_bytes(buf.into_inner())
    }

    fn exporter() -> Exporter {
        Exporter::new(LimitsConfig::default())
    }

    fn decoded_dims(bytes: &[u8]) -> (u32, u32) {
        let img = image::load_from_memory(bytes).unwrap();
        (img.width(), img.height())
    }

    #[tokio::test]
    async fn test_large_clamps_longer_side() {
        let request = ExportRequest::new(
            handle_of(3000, 1500),
            ImageFormat::Png,
            SizeClass::Large,
            "Wide Banner",
        );
        let artifact = exporter().export(request).await.unwrap();
        assert_eq!((artifact.width, artifact.height), (1920, 960));
        assert_eq!(decoded_dims(&artifact.bytes), (1920, 960));
    }

    #[tokio::test]
    async fn test_small_never_upscales() {
        let request = ExportRequest::new(
            handle_of(500, 500),
            ImageFormat::Png,
            SizeClass::Small,
            "Square Logo",
        );
        let artifact = exporter().export(request).await.unwrap();
        assert_eq!((artifact.width, artifact.height), (500, 500));
        assert_eq!(decoded_dims(&artifact.bytes), (500, 500));
    }

    #[tokio::test]
    async fn test_medium_concrete_case() {
        let request = ExportRequest::new(
            handle_of(1600, 900),
            ImageFormat::Jpeg,
            SizeClass::Medium,
            "HD Frame",
        );
        let artifact = exporter().export(request).await.unwrap();
        assert_eq!((artifact.width, artifact.height), (1280, 720));
        assert_eq!(decoded_dims(&artifact.bytes), (1280, 720));
    }

    #[tokio::test]
    async fn test_original_is_identity_reencode() {
        for format in [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP] {
            let request = ExportRequest::new(
                handle_of(777, 333),
                format,
                SizeClass::Original,
                "As Is",
            );
            let artifact = exporter().export(request).await.unwrap();
            assert_eq!((artifact.width, artifact.height), (777, 333));
        }
    }

    #[tokio::test]
    async fn test_filename_derivation() {
        let request = ExportRequest::new(
            handle_of(10, 10),
            ImageFormat::Jpeg,
            SizeClass::Original,
            "My Cool Shirt",
        );
        let artifact = exporter().export(request).await.unwrap();
        assert_eq!(artifact.file_name, "my-cool-shirt.jpeg");
        assert_eq!(artifact.mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_empty_title_defaults_to_result() {
        let request =
            ExportRequest::new(handle_of(10, 10), ImageFormat::Png, SizeClass::Original, "");
        let artifact = exporter().export(request).await.unwrap();
        assert_eq!(artifact.file_name, "result.png");
    }

    #[tokio::test]
    async fn test_corrupt_input_yields_decode_error_and_no_artifact() {
        let request = ExportRequest::new(
            ImageHandle::from_bytes(b"definitely not an image".to_vec()),
            ImageFormat::Png,
            SizeClass::Small,
            "Broken",
        );
        let err = exporter().export(request).await.unwrap_err();
        assert!(matches!(err, ExportError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_artifact_data_url() {
        let request =
            ExportRequest::new(handle_of(4, 4), ImageFormat::WebP, SizeClass::Original, "x");
        let artifact = exporter().export(request).await.unwrap();
        assert!(artifact.data_url().starts_with("data:image/webp;base64,"));
    }
}

//! Image decoding with content-based format detection and input limits.

use image::{DynamicImage, GenericImageView, ImageFormat as DetectedFormat};
use std::io::Cursor;

use crate::config::LimitsConfig;
use crate::error::ExportError;
use crate::handle::ImageHandle;

/// Result of decoding an image handle.
#[derive(Debug)]
pub struct DecodedImage {
    /// The decoded pixel data
    pub image: DynamicImage,
    /// Format detected from content (not from the producer's MIME hint)
    pub format: Option<DetectedFormat>,
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
}

/// Decode a handle into an addressable pixel source, enforcing the
/// configured byte-size and dimension limits.
///
/// Synchronous; the exporter runs it inside `spawn_blocking` so a large
/// decode never stalls the async runtime.
pub fn decode_handle(handle: &ImageHandle, limits: &LimitsConfig) -> Result<DecodedImage, ExportError> {
    let max_bytes = limits.max_file_size_mb * 1024 * 1024;
    if handle.len() as u64 > max_bytes {
        return Err(ExportError::FileTooLarge {
            size_mb: handle.len() as u64 / (1024 * 1024),
            max_mb: limits.max_file_size_mb,
        });
    }

    let cursor = Cursor::new(handle.bytes());
    let reader = image::ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| ExportError::Decode {
            message: format!("cannot detect image format: {e}"),
        })?;
    let format = reader.format();
    let image = reader.decode().map_err(|e| ExportError::Decode {
        message: e.to_string(),
    })?;

    let (width, height) = image.dimensions();
    if width > limits.max_image_dimension || height > limits.max_image_dimension {
        return Err(ExportError::ImageTooLarge {
            width,
            height,
            max_dim: limits.max_image_dimension,
        });
    }

    Ok(DecodedImage {
        image,
        format,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_handle(width: u32, height: u32) -> ImageHandle {
        let img = DynamicImage::new_rgb8(width, height);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, DetectedFormat::Png).unwrap();
        ImageHandle::from_bytes(buf.into_inner())
    }

    #[test]
    fn test_decode_reports_intrinsic_dimensions() {
        let decoded = decode_handle(&png_handle(320, 200), &LimitsConfig::default()).unwrap();
        assert_eq!((decoded.width, decoded.height), (320, 200));
        assert_eq!(decoded.format, Some(DetectedFormat::Png));
    }

    #[test]
    fn test_decode_ignores_mime_hint() {
        // PNG bytes under a jpeg MIME hint still decode as PNG
        let handle = ImageHandle::with_mime_type(png_handle(10, 10).into_bytes(), "image/jpeg");
        let decoded = decode_handle(&handle, &LimitsConfig::default()).unwrap();
        assert_eq!(decoded.format, Some(DetectedFormat::Png));
    }

    #[test]
    fn test_decode_corrupt_input_fails() {
        let handle = ImageHandle::from_bytes(vec![0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01]);
        let err = decode_handle(&handle, &LimitsConfig::default()).unwrap_err();
        assert!(matches!(err, ExportError::Decode { .. }));
    }

    #[test]
    fn test_decode_enforces_size_limit_at_byte_granularity() {
        let limits = LimitsConfig {
            max_file_size_mb: 1,
            ..LimitsConfig::default()
        };
        // One byte over the limit must already be rejected
        let handle = ImageHandle::from_bytes(vec![0; 1024 * 1024 + 1]);
        let err = decode_handle(&handle, &limits).unwrap_err();
        assert!(matches!(err, ExportError::FileTooLarge { .. }));
    }

    #[test]
    fn test_decode_enforces_dimension_limit() {
        let limits = LimitsConfig {
            max_image_dimension: 100,
            ..LimitsConfig::default()
        };
        let err = decode_handle(&png_handle(200, 50), &limits).unwrap_err();
        assert!(matches!(err, ExportError::ImageTooLarge { .. }));
    }
}

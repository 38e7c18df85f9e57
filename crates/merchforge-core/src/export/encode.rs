//! Re-encoding a pixel buffer into one of the export formats.

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::io::Cursor;

use super::options::{ImageFormat, LOSSY_QUALITY};
use crate::error::ExportError;

/// Encode the image into the requested format.
///
/// PNG is lossless and ignores the quality setting. JPEG and WebP encode at
/// the fixed quality factor; JPEG additionally flattens alpha since its
/// encoder assumes an opaque background.
pub fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, ExportError> {
    match format {
        ImageFormat::Png => {
            let mut buffer = Cursor::new(Vec::new());
            image
                .write_to(&mut buffer, image::ImageFormat::Png)
                .map_err(|e| encode_err(format, e))?;
            Ok(buffer.into_inner())
        }
        ImageFormat::Jpeg => {
            let rgb = image.to_rgb8();
            let mut buffer = Cursor::new(Vec::new());
            let encoder = JpegEncoder::new_with_quality(&mut buffer, LOSSY_QUALITY);
            rgb.write_with_encoder(encoder)
                .map_err(|e| encode_err(format, e))?;
            Ok(buffer.into_inner())
        }
        ImageFormat::WebP => {
            // The `image` crate only writes lossless WebP; the `webp` crate
            // gives us the lossy path at the fixed quality factor.
            let rgba = image.to_rgba8();
            let encoder = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height());
            let memory = encoder.encode(LOSSY_QUALITY as f32);
            Ok(memory.to_vec())
        }
    }
}

fn encode_err(format: ImageFormat, e: impl std::fmt::Display) -> ExportError {
    ExportError::Encode {
        format: format.as_str().to_string(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_container_signature() {
        let img = DynamicImage::new_rgba8(12, 8);
        let bytes = encode(&img, ImageFormat::Png).unwrap();
        assert_eq!(&bytes[0..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_jpeg_container_signature() {
        let img = DynamicImage::new_rgb8(12, 8);
        let bytes = encode(&img, ImageFormat::Jpeg).unwrap();
        // JPEG streams start with the SOI marker
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_jpeg_accepts_alpha_input() {
        // RGBA input must flatten, not error
        let img = DynamicImage::new_rgba8(16, 16);
        assert!(encode(&img, ImageFormat::Jpeg).is_ok());
    }

    #[test]
    fn test_webp_container_signature() {
        let img = DynamicImage::new_rgb8(12, 8);
        let bytes = encode(&img, ImageFormat::WebP).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }

    #[test]
    fn test_png_round_trip_preserves_dimensions() {
        let img = DynamicImage::new_rgb8(33, 21);
        let bytes = encode(&img, ImageFormat::Png).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (33, 21));
    }
}

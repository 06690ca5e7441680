//! Image format values, validation, and content sniffing.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const FORMAT_JPG: &str = "jpg";

pub const FORMAT_JPEG: &str = "jpeg";

/// Formats an image record may be saved with.
pub const VALID_FORMATS: &[&str] = &[FORMAT_JPG, FORMAT_JPEG];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Whether `candidate` is one of [`VALID_FORMATS`].
pub fn is_valid_format(candidate: &str) -> bool {
    VALID_FORMATS.contains(&candidate)
}

/// Validate that `format` may be persisted on an image record.
pub fn validate_format(format: &str) -> Result<(), CoreError> {
    if is_valid_format(format) {
        Ok(())
    } else {
        Err(CoreError::WrongData(format!(
            "Invalid image format '{format}'. Must be one of: {VALID_FORMATS:?}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// An uploaded payload that decoded successfully.
#[derive(Debug)]
pub struct DecodedImage {
    pub image: DynamicImage,
    /// The container the payload was encoded in.
    pub container: ImageFormat,
    /// Lowercase format name used as file extension and record format
    /// (e.g. `"jpeg"`, `"png"`).
    pub format: String,
}

/// Sniff the format of `bytes` from its content and decode it.
///
/// Any payload that is not a recognisable, decodable image is wrong data.
/// The returned format is not checked against [`VALID_FORMATS`]; callers
/// run [`validate_format`] before persisting anything.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, CoreError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CoreError::WrongData(format!("Unreadable image payload: {e}")))?;

    let container = reader
        .format()
        .ok_or_else(|| CoreError::WrongData("Unrecognised image format".into()))?;

    let image = reader
        .decode()
        .map_err(|e| CoreError::WrongData(format!("Image cannot be decoded: {e}")))?;

    Ok(DecodedImage {
        image,
        container,
        format: format_name(container),
    })
}

/// Lowercase name of a container format.
fn format_name(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => FORMAT_JPEG.to_string(),
        other => other
            .extensions_str()
            .first()
            .map(|ext| ext.to_string())
            .unwrap_or_else(|| format!("{other:?}").to_lowercase()),
    }
}


#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn jpg_and_jpeg_are_valid() {
        assert!(is_valid_format("jpg"));
        assert!(is_valid_format("jpeg"));
    }

    #[test]
    fn other_formats_are_invalid() {
        assert!(!is_valid_format("png"));
        assert!(!is_valid_format("JPEG"));
        assert!(!is_valid_format(""));
        assert_matches!(validate_format("gif"), Err(CoreError::WrongData(_)));
    }

    #[test]
    fn decode_jpeg_reports_jpeg_format() {
        let decoded = decode_image(&fixtures::encoded(ImageFormat::Jpeg)).unwrap();
        assert_eq!(decoded.format, "jpeg");
        assert_eq!(decoded.container, ImageFormat::Jpeg);
        assert_eq!(decoded.image.width(), 8);
    }

    #[test]
    fn decode_png_reports_png_format() {
        let decoded = decode_image(&fixtures::encoded(ImageFormat::Png)).unwrap();
        assert_eq!(decoded.format, "png");
        assert!(validate_format(&decoded.format).is_err());
    }

    #[test]
    fn decode_garbage_is_wrong_data() {
        assert_matches!(
            decode_image(b"definitely not an image"),
            Err(CoreError::WrongData(_))
        );
    }

    #[test]
    fn decode_truncated_jpeg_is_wrong_data() {
        let bytes = fixtures::encoded(ImageFormat::Jpeg);
        assert_matches!(decode_image(&bytes[..16]), Err(CoreError::WrongData(_)));
    }
}

//! Image format sniffing and decode validation for downloaded bytes.

use anyhow::{Context, Result};

/// Validate that `bytes` decode as an image and return their MIME type.
///
/// Remote URLs cannot be trusted to carry a meaningful extension or
/// Content-Type header, so the format is sniffed from the bytes themselves
/// and the body is decoded once to reject truncated or disguised payloads.
pub fn sniff_image(bytes: &[u8]) -> Result<&'static str> {
    let format = image::guess_format(bytes).context("unrecognized image format")?;
    image::load_from_memory(bytes).context("image data failed to decode")?;
    Ok(format.to_mime_type())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;
    use std::io::Cursor;

    fn encoded(format: ImageFormat) -> Vec<u8> {
        let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(2, 2));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, format).unwrap();
        out.into_inner()
    }

    #[test]
    fn sniffs_png() {
        assert_eq!(sniff_image(&encoded(ImageFormat::Png)).unwrap(), "image/png");
    }

    #[test]
    fn sniffs_jpeg() {
        assert_eq!(sniff_image(&encoded(ImageFormat::Jpeg)).unwrap(), "image/jpeg");
    }

    #[test]
    fn rejects_non_image_bytes() {
        assert!(sniff_image(b"<html>not found</html>").is_err());
    }

    #[test]
    fn rejects_empty_body() {
        assert!(sniff_image(&[]).is_err());
    }

    #[test]
    fn rejects_truncated_image() {
        let mut png = encoded(ImageFormat::Png);
        png.truncate(16); // magic bytes survive, the decode must not
        assert!(sniff_image(&png).is_err());
    }
}

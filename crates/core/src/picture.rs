//! Uploaded picture handling: extension allow-list, random storage names,
//! and profile-picture downscaling.

use std::io::Cursor;

use rand::Rng;

use crate::error::CoreError;

/// Profile pictures are downscaled to fit inside this square.
pub const AVATAR_MAX_DIMENSION: u32 = 125;

/// File extensions accepted for picture uploads, normalized to lowercase.
const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Extract and check the extension of an uploaded filename.
///
/// Returns the normalized lowercase extension, or `None` when the file has
/// no extension or an extension outside the allow-list.
pub fn allowed_extension(filename: &str) -> Option<String> {
    let ext = filename.rsplit('.').next()?;
    if ext.len() == filename.len() {
        // No dot at all.
        return None;
    }
    let ext = ext.to_ascii_lowercase();
    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Some(ext)
    } else {
        None
    }
}

/// Random 16-hex-character stem for stored files, so uploads never collide
/// with each other or leak the original filename.
pub fn random_stem() -> String {
    let value: u64 = rand::rng().random();
    format!("{value:016x}")
}

/// Decode an uploaded profile picture, downscale it to fit
/// [`AVATAR_MAX_DIMENSION`] on both axes (aspect ratio preserved), and
/// re-encode as PNG.
///
/// Re-encoding also strips any metadata the original carried.
pub fn process_avatar(bytes: &[u8]) -> Result<Vec<u8>, CoreError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| CoreError::Validation(format!("Unreadable image: {e}")))?;

    let thumb = img.thumbnail(AVATAR_MAX_DIMENSION, AVATAR_MAX_DIMENSION);

    let mut out = Vec::new();
    thumb
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| CoreError::Internal(format!("Failed to encode avatar: {e}")))?;
    Ok(out)
}

/// Validate that receipt bytes decode as an image. Receipts are stored
/// as-is (no downscaling -- they must stay legible), so decoding is the
/// only check.
pub fn validate_receipt(bytes: &[u8]) -> Result<(), CoreError> {
    image::load_from_memory(bytes)
        .map(|_| ())
        .map_err(|e| CoreError::Validation(format!("Unreadable image: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_allow_list() {
        assert_eq!(allowed_extension("me.jpg").as_deref(), Some("jpg"));
        assert_eq!(allowed_extension("me.JPEG").as_deref(), Some("jpeg"));
        assert_eq!(allowed_extension("dir.name/me.PNG").as_deref(), Some("png"));
        assert_eq!(allowed_extension("script.exe"), None);
        assert_eq!(allowed_extension("no_extension"), None);
        assert_eq!(allowed_extension("archive.tar.gz"), None);
    }

    #[test]
    fn test_random_stems_are_distinct() {
        let a = random_stem();
        let b = random_stem();
        assert_eq!(a.len(), 16);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    /// Build a small in-memory PNG for the processing tests.
    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::new_rgb8(width, height);
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn test_avatar_is_downscaled() {
        let big = sample_png(600, 400);
        let processed = process_avatar(&big).unwrap();

        let reloaded = image::load_from_memory(&processed).unwrap();
        assert!(reloaded.width() <= AVATAR_MAX_DIMENSION);
        assert!(reloaded.height() <= AVATAR_MAX_DIMENSION);
    }

    #[test]
    fn test_small_avatar_keeps_dimensions() {
        let small = sample_png(40, 60);
        let processed = process_avatar(&small).unwrap();

        let reloaded = image::load_from_memory(&processed).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (40, 60));
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let err = process_avatar(b"definitely not an image").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(validate_receipt(b"also not an image").is_err());
    }

    #[test]
    fn test_valid_receipt_accepted() {
        let png = sample_png(800, 1200);
        assert!(validate_receipt(&png).is_ok());
    }
}

//! I/O helpers for blend inputs, outputs and JSON reports.
//!
//! - `load_linear_rgb`: read a PNG/JPEG/etc. into an `ImageRgbF32`, applying the
//!   forward gamma per channel. Alpha is dropped.
//! - `save_rgba_u8`: write the blend output buffer to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageRgbF32, ImageRgbaU8, Rgb};
use crate::gamma::Gamma;
use image::{ImageBuffer, Rgba};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk into linear RGB using `gamma`.
pub fn load_linear_rgb(path: &Path, gamma: Gamma) -> Result<ImageRgbF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let raw = img.into_raw();
    linear_rgb_from_rgba8(width, height, &raw, gamma)
        .ok_or_else(|| format!("Decoded buffer for {} has unexpected size", path.display()))
}

/// Convert packed RGBA8 bytes into a linear-RGB image.
///
/// Returns `None` if `bytes.len() != width * height * 4`.
pub fn linear_rgb_from_rgba8(
    width: usize,
    height: usize,
    bytes: &[u8],
    gamma: Gamma,
) -> Option<ImageRgbF32> {
    if bytes.len() != width * height * ImageRgbaU8::CHANNELS {
        return None;
    }
    let pixels = bytes
        .chunks_exact(ImageRgbaU8::CHANNELS)
        .map(|px| {
            Rgb::new(
                gamma.decode_u8(px[0]),
                gamma.decode_u8(px[1]),
                gamma.decode_u8(px[2]),
            )
        })
        .collect();
    ImageRgbF32::from_pixels(width, height, pixels)
}

/// Save an RGBA buffer; the format follows the file extension.
pub fn save_rgba_u8(buffer: &ImageRgbaU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.w as u32, buffer.h as u32, buffer.as_bytes().to_vec())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba8_conversion_applies_forward_gamma_and_drops_alpha() {
        let gamma = Gamma::new(2.0).unwrap();
        let bytes = [255, 0, 64, 7, 0, 255, 255, 200];
        let img = linear_rgb_from_rgba8(2, 1, &bytes, gamma).expect("valid size");
        let px = img.get(0, 0);
        assert_eq!(px.r(), 1.0);
        assert_eq!(px.g(), 0.0);
        assert!((px.b() - (64.0f32 / 255.0).sqrt()).abs() < 1e-6);
        assert_eq!(img.get(1, 0), Rgb::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn rgba8_conversion_rejects_bad_length() {
        assert!(linear_rgb_from_rgba8(2, 2, &[0; 12], Gamma::default()).is_none());
    }

    #[test]
    fn png_round_trip_through_disk() {
        let dir = std::env::temp_dir().join(format!("poisson_blend_io_{}", std::process::id()));
        let path = dir.join("nested").join("out.png");
        let mut buffer = ImageRgbaU8::new(3, 2);
        buffer.set_rgb(2, 1, [255, 128, 0]);
        save_rgba_u8(&buffer, &path).expect("save png");

        let gamma = Gamma::new(1.0).unwrap();
        let loaded = load_linear_rgb(&path, gamma).expect("load png");
        assert_eq!((loaded.w, loaded.h), (3, 2));
        let px = loaded.get(2, 1);
        assert_eq!(px.r(), 1.0);
        assert!((px.g() - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(px.b(), 0.0);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_linear_rgb(Path::new("/nonexistent/mask.png"), Gamma::default())
            .expect_err("missing file");
        assert!(err.contains("/nonexistent/mask.png"), "{err}");
    }
}

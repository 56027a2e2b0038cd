use poisson_blend::image::{ImageRgbF32, Rgb};

/// Smooth linear-RGB ramp with a different slope per channel, values in [0.1, 0.9].
pub fn gradient_rgb(width: usize, height: usize) -> ImageRgbF32 {
    assert!(width > 1 && height > 1, "gradient needs at least 2x2 pixels");
    ImageRgbF32::from_fn(width, height, |x, y| {
        let u = x as f32 / (width - 1) as f32;
        let v = y as f32 / (height - 1) as f32;
        Rgb::new(0.1 + 0.8 * u, 0.1 + 0.8 * v, 0.1 + 0.4 * (u + v))
    })
}

/// Disc mask of radius `radius` centered in a `size x size` image. Pixels
/// inside the disc are white, everything else black.
pub fn disc_mask(size: usize, radius: f32) -> ImageRgbF32 {
    let c = (size as f32 - 1.0) * 0.5;
    ImageRgbF32::from_fn(size, size, |x, y| {
        let dx = x as f32 - c;
        let dy = y as f32 - c;
        if dx * dx + dy * dy <= radius * radius {
            Rgb::splat(1.0)
        } else {
            Rgb::splat(0.0)
        }
    })
}

/// Copy the `w x h` window of `image` starting at `(x0, y0)`.
pub fn crop(image: &ImageRgbF32, x0: usize, y0: usize, w: usize, h: usize) -> ImageRgbF32 {
    assert!(x0 + w <= image.w && y0 + h <= image.h, "crop outside image");
    ImageRgbF32::from_fn(w, h, |x, y| image.get(x0 + x, y0 + y))
}

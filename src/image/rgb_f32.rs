//! Owned linear-RGB image in row-major layout (stride == width).
//!
//! This is the form every blend input takes: mask, source and target are all
//! `ImageRgbF32` buffers produced by the I/O layer (or built in memory).
use super::rgb::Rgb;
use super::traits::{ImageView, ImageViewMut};
use crate::types::Channel;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageRgbF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` pixels
    data: Vec<Rgb>,
}

impl ImageRgbF32 {
    /// Construct a black image of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, Rgb::default())
    }

    /// Construct an image where every pixel is `px`.
    pub fn filled(w: usize, h: usize, px: Rgb) -> Self {
        Self {
            w,
            h,
            data: vec![px; w * h],
        }
    }

    /// Wrap an existing pixel vector. Returns `None` when the length does not
    /// match `w * h`.
    pub fn from_pixels(w: usize, h: usize, data: Vec<Rgb>) -> Option<Self> {
        (data.len() == w * h).then_some(Self { w, h, data })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(w: usize, h: usize, f: impl FnMut(usize, usize) -> Rgb) -> Self {
        let mut img = Self::new(w, h);
        img.fill_with(f);
        img
    }

    #[inline]
    /// Convert (x, y) to a linear index into the pixel storage.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Get the pixel at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: usize, y: usize, px: Rgb) {
        let i = self.idx(x, y);
        self.data[i] = px;
    }

    #[inline]
    /// Single channel value at (x, y).
    pub fn channel(&self, x: usize, y: usize, channel: Channel) -> f32 {
        self.get(x, y)[channel]
    }

    /// Sample with signed coordinates, clamping to the nearest edge pixel.
    ///
    /// Returns `None` only for an empty image.
    pub fn get_clamped(&self, x: isize, y: isize) -> Option<Rgb> {
        if self.is_empty() {
            return None;
        }
        let cx = x.clamp(0, self.w as isize - 1) as usize;
        let cy = y.clamp(0, self.h as isize - 1) as usize;
        Some(self.get(cx, cy))
    }
}

impl ImageView for ImageRgbF32 {
    type Pixel = Rgb;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for ImageRgbF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgb] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

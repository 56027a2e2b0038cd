/// Owned 8-bit RGBA buffer, row-major, 4 bytes per pixel.
///
/// This is the blend output handed to the encoder as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgbaU8 {
    pub w: usize,
    pub h: usize,
    data: Vec<u8>, // w * h * 4 bytes
}

impl ImageRgbaU8 {
    pub const CHANNELS: usize = 4;

    /// Opaque black buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        let mut data = vec![0u8; w * h * Self::CHANNELS];
        for px in data.chunks_exact_mut(Self::CHANNELS) {
            px[3] = u8::MAX;
        }
        Self { w, h, data }
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * Self::CHANNELS
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let o = self.offset(x, y);
        [self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3]]
    }

    /// Overwrite the color bytes at (x, y), leaving alpha untouched.
    #[inline]
    pub fn set_rgb(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let o = self.offset(x, y);
        self.data[o..o + 3].copy_from_slice(&rgb);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let o = self.offset(x, y);
        self.data[o..o + 4].copy_from_slice(&rgba);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_opaque() {
        let img = ImageRgbaU8::new(3, 2);
        assert_eq!(img.as_bytes().len(), 3 * 2 * 4);
        assert!(img.as_bytes().chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn set_rgb_keeps_alpha() {
        let mut img = ImageRgbaU8::new(2, 2);
        img.set_pixel(1, 1, [1, 2, 3, 40]);
        img.set_rgb(1, 1, [9, 8, 7]);
        assert_eq!(img.pixel(1, 1), [9, 8, 7, 40]);
        assert_eq!(img.pixel(0, 1), [0, 0, 0, 255]);
    }
}

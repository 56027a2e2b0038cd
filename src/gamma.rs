//! Power-law gamma shared by the image loader and the compositor.
//!
//! The loader maps an encoded value `e` in [0, 1] to `e^(1/γ)`; the compositor
//! maps a working value `v` back with `v^γ`. Both sides must use the same `γ`
//! for the round trip to be the identity.

/// Gamma used when none is configured.
pub const DEFAULT_GAMMA: f32 = 2.2;

/// Validated gamma exponent (finite and strictly positive).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gamma(f32);

impl Gamma {
    pub fn new(value: f32) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Loader direction: `encoded^(1/γ)`.
    #[inline]
    pub fn decode(self, encoded: f32) -> f32 {
        encoded.powf(1.0 / self.0)
    }

    /// Decode an 8-bit sample.
    #[inline]
    pub fn decode_u8(self, byte: u8) -> f32 {
        self.decode(byte as f32 / 255.0)
    }

    /// Compositor direction: `v^γ`.
    #[inline]
    pub fn encode(self, v: f32) -> f32 {
        v.powf(self.0)
    }

    /// `v^γ · 255` truncated to a byte. The cast saturates, and NaN (from a
    /// negative base) maps to 0.
    #[inline]
    pub fn encode_u8(self, v: f32) -> u8 {
        (self.encode(v) * 255.0) as u8
    }

    /// Clamp to [0, 1] first, then [`encode_u8`](Self::encode_u8).
    #[inline]
    pub fn encode_clamped_u8(self, v: f32) -> u8 {
        self.encode_u8(v.clamp(0.0, 1.0))
    }
}

impl Default for Gamma {
    fn default() -> Self {
        Self(DEFAULT_GAMMA)
    }
}

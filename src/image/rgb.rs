//! Linear-RGB pixel triple.
//!
//! Components are stored as a fixed `[f32; 3]`; access goes through
//! [`Channel`] or a plain index, both bounds-checked by the array.
use crate::types::Channel;
use std::ops::Index;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    /// Same value in every channel.
    pub const fn splat(v: f32) -> Self {
        Self([v, v, v])
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.0[2]
    }
}

impl Index<Channel> for Rgb {
    type Output = f32;

    #[inline]
    fn index(&self, channel: Channel) -> &f32 {
        &self.0[channel.index()]
    }
}

impl Index<usize> for Rgb {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

//! Mask interior detection and the unknown-variable index.
//!
//! Every interior mask pixel becomes one unknown of the linear system. A
//! row-major scan (y outer, x inner) assigns indices 0, 1, 2, … so the row
//! order of the system is reproducible. Lookups go through a hash map keyed by
//! the flattened mask-local coordinate; `pixels` keeps the scan order.
use crate::image::ImageRgbF32;
use std::collections::HashMap;

/// The four neighbors of the 5-point stencil, in the order rows are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Neighbor {
    Up,
    Right,
    Down,
    Left,
}

impl Neighbor {
    pub const ALL: [Neighbor; 4] = [Neighbor::Up, Neighbor::Right, Neighbor::Down, Neighbor::Left];

    /// Grid step `(dx, dy)` towards this neighbor.
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Neighbor::Up => (0, -1),
            Neighbor::Right => (1, 0),
            Neighbor::Down => (0, 1),
            Neighbor::Left => (-1, 0),
        }
    }

    /// Signed coordinate of this neighbor of `(x, y)`.
    #[inline]
    pub fn of(self, x: usize, y: usize) -> (isize, isize) {
        let (dx, dy) = self.offset();
        (x as isize + dx, y as isize + dy)
    }
}

/// Bijection between interior mask pixels and unknown indices `[0, N)`.
#[derive(Clone, Debug)]
pub struct MaskIndex {
    width: usize,
    height: usize,
    slots: HashMap<usize, usize>,
    pixels: Vec<(usize, usize)>,
}

impl MaskIndex {
    /// Scan `mask` and index every pixel whose red channel exceeds `threshold`.
    pub fn build(mask: &ImageRgbF32, threshold: f32) -> Self {
        let mut slots = HashMap::new();
        let mut pixels = Vec::new();
        for y in 0..mask.h {
            for x in 0..mask.w {
                if mask.get(x, y).r() > threshold {
                    slots.insert(y * mask.w + x, pixels.len());
                    pixels.push((x, y));
                }
            }
        }
        Self {
            width: mask.w,
            height: mask.h,
            slots,
            pixels,
        }
    }

    /// Number of unknowns `N`.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    fn flatten(&self, x: isize, y: isize) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Unknown index of the mask pixel at `(x, y)`, if it is interior.
    /// Coordinates outside the mask's bounding box are never interior.
    #[inline]
    pub fn index_of(&self, x: isize, y: isize) -> Option<usize> {
        self.flatten(x, y).and_then(|key| self.slots.get(&key).copied())
    }

    #[inline]
    pub fn is_interior(&self, x: isize, y: isize) -> bool {
        self.index_of(x, y).is_some()
    }

    /// Interior pixels in index order (`pixels()[i]` is unknown `i`).
    pub fn pixels(&self) -> &[(usize, usize)] {
        &self.pixels
    }

    /// Number of (pixel, neighbor) pairs whose neighbor lies outside the mask
    /// interior, i.e. the Dirichlet terms each right-hand side receives.
    pub fn boundary_terms(&self) -> usize {
        self.pixels
            .iter()
            .map(|&(x, y)| {
                Neighbor::ALL
                    .iter()
                    .filter(|n| {
                        let (nx, ny) = n.of(x, y);
                        !self.is_interior(nx, ny)
                    })
                    .count()
            })
            .sum()
    }
}

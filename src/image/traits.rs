//! Row access shared by the blend buffers. Every buffer here is tightly
//! packed, so a row is always `width` pixels.

pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    #[inline]
    fn dims(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    /// `(x, y, pixel)` in row-major order.
    fn enumerate_pixels(&self) -> impl Iterator<Item = (usize, usize, Self::Pixel)> + '_
    where
        Self: Sized,
    {
        self.rows()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &px)| (x, y, px)))
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];

    /// Overwrite every pixel with `f(x, y)`.
    fn fill_with(&mut self, mut f: impl FnMut(usize, usize) -> Self::Pixel)
    where
        Self: Sized,
    {
        for y in 0..self.height() {
            for (x, px) in self.row_mut(y).iter_mut().enumerate() {
                *px = f(x, y);
            }
        }
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let row = self.image.row(self.y);
        self.y += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.image.height().saturating_sub(self.y);
        (left, Some(left))
    }
}

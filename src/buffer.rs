use crate::{math::Normalizer, rasterizer::Blitter, texture::Target};
use alloc::vec::Vec;
use vek::Vec2;

/// An append-only sequence of normalized points, ready to be handed to a renderer in a single draw call.
///
/// The buffer grows as needed, so no worst-case sizing is required of the caller. Lattice points emitted into it by a
/// rasterizer are normalized on the way in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointBuffer {
    normalizer: Normalizer,
    points: Vec<Vec2<f32>>,
}

impl PointBuffer {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            points: Vec::new(),
        }
    }

    /// Create a buffer with room for at least `capacity` points before reallocating.
    pub fn with_capacity(normalizer: Normalizer, capacity: usize) -> Self {
        Self {
            normalizer,
            points: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Append a point that is already in device coordinates.
    #[inline]
    pub fn push(&mut self, p: Vec2<f32>) {
        self.points.push(p);
    }

    /// Remove all points, keeping the allocation for the next frame.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// View this buffer as a slice of points.
    #[inline]
    pub fn raw(&self) -> &[Vec2<f32>] {
        &self.points
    }

    /// Iterate over the interleaved `x, y` coordinates of every point, the layout most vertex buffers expect.
    pub fn coords(&self) -> impl Iterator<Item = f32> + '_ {
        self.points.iter().flat_map(|p| [p.x, p.y])
    }
}

impl Blitter for PointBuffer {
    #[inline(always)]
    fn emit(&mut self, p: Vec2<i32>) {
        let p = self.normalizer.point(p);
        self.points.push(p);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        self.points.reserve(additional);
    }
}

/// A generic 2-dimensional buffer that may be used as a plotting target.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Buffer2d<T> {
    size: [usize; 2],
    items: Vec<T>,
}

impl<T> Buffer2d<T> {
    /// Create a new buffer with the given size, filled with duplicates of the given element.
    pub fn fill(size: [usize; 2], item: T) -> Self
    where
        T: Clone,
    {
        Self {
            size,
            items: alloc::vec![item; size[0] * size[1]],
        }
    }

    /// Convert the given index into a linear index that can be used to index into the raw data of this buffer.
    #[inline]
    pub fn linear_index(&self, [x, y]: [usize; 2]) -> usize {
        y * self.size[0] + x
    }

    /// View this buffer as a linear slice of elements.
    #[inline]
    pub fn raw(&self) -> &[T] {
        &self.items
    }

    /// Get a reference to the item at the given index.
    ///
    /// # Panics
    ///
    /// This function will panic if the index is not within bounds.
    pub fn get(&self, index: [usize; 2]) -> &T {
        let idx = self.linear_index(index);
        match self.items.get(idx) {
            Some(item) if index[0] < self.size[0] => item,
            _ => panic!(
                "Attempted to read buffer of size {:?} at out-of-bounds location {:?}",
                self.size, index
            ),
        }
    }
}

impl<T: Clone> Target for Buffer2d<T> {
    type Texel = T;

    #[inline]
    fn size(&self) -> [usize; 2] {
        self.size
    }

    #[inline]
    fn write(&mut self, index: [usize; 2], texel: Self::Texel) {
        let idx = self.linear_index(index);
        self.items[idx] = texel;
    }

    fn clear(&mut self, texel: Self::Texel) {
        self.items.iter_mut().for_each(|item| *item = texel.clone());
    }
}

pub mod circles;
pub mod lines;
pub mod triangles;

pub use self::{circles::Octant, lines::LineSteps, triangles::Fill};

use alloc::vec::Vec;
use vek::Vec2;

/// The largest capacity hint a rasterizer passes to [`Blitter::reserve`]. Primitives spanning most of the lattice emit
/// billions of points, so sinks are left to grow past this on their own.
pub const MAX_RESERVE: usize = 1 << 16;

/// A sink for the lattice points produced by a rasterizer.
pub trait Blitter {
    fn emit(&mut self, p: Vec2<i32>);

    /// Hint that roughly `additional` more points are about to be emitted.
    #[inline]
    fn reserve(&mut self, _additional: usize) {}
}

impl Blitter for Vec<Vec2<i32>> {
    #[inline(always)]
    fn emit(&mut self, p: Vec2<i32>) {
        self.push(p);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }
}

/// A primitive that can be turned into a sequence of lattice points.
///
/// Rasterizers are pure: they know nothing about how or where their output is drawn, and the same primitive always
/// emits the same points in the same order.
pub trait Rasterizer {
    fn rasterize<B: Blitter + ?Sized>(&self, blitter: &mut B);

    /// Collect the emitted lattice points into a new vector.
    fn points(&self) -> Vec<Vec2<i32>> {
        let mut out = Vec::new();
        self.rasterize(&mut out);
        out
    }
}

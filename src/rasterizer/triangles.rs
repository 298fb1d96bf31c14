use super::*;
use crate::primitives::Triangle;

/// A triangle rasterizes as its outline: the three edges, each emitted half-open so that every vertex appears once.
impl Rasterizer for Triangle {
    fn rasterize<B: Blitter + ?Sized>(&self, blitter: &mut B) {
        self.edges().iter().for_each(|edge| edge.rasterize(blitter));
    }
}

/// The interior of a triangle, found by testing every lattice point of its bounding box against the three edge
/// functions.
///
/// Only points strictly inside the bounding box are tested, so points on the box boundary are never emitted even
/// when they lie on an edge. Degenerate triangles emit nothing or almost nothing. Points are emitted column by
/// column (x outer, y inner).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Fill(pub Triangle);

impl Rasterizer for Fill {
    fn rasterize<B: Blitter + ?Sized>(&self, blitter: &mut B) {
        let (min, max) = self.0.bounds();
        let edges = self.0.edge_functions();

        for x in min.x.saturating_add(1)..max.x {
            for y in min.y.saturating_add(1)..max.y {
                let p = Vec2::new(x, y);
                // Is the point inside the triangle?
                if edges.iter().all(|e| e.eval(p) >= 0) {
                    blitter.emit(p);
                }
            }
        }
    }
}

use crate::math::WeightedSum;
use alloc::vec::Vec;
use vek::Vec2;

/// The index list that splits a handle quad (as produced by [`handle_quad`]) into two triangles.
pub const HANDLE_INDICES: [u32; 6] = [0, 1, 2, 1, 2, 3];

/// The four corners of the square handle drawn around a point: top-right, bottom-right, top-left, bottom-left.
pub fn handle_quad(center: Vec2<f32>, half_size: f32) -> [Vec2<f32>; 4] {
    [
        center + Vec2::new(half_size, half_size),
        center + Vec2::new(half_size, -half_size),
        center + Vec2::new(-half_size, half_size),
        center + Vec2::new(-half_size, -half_size),
    ]
}

/// The de Casteljau construction of a Bézier curve at a single parameter `t`.
///
/// Level 0 is the control polygon itself. Each following level has one point fewer, every point lying `t` of the way
/// along the corresponding edge of the level before. The final level holds the single point on the curve at `t`.
/// Polygons of fewer than two points have no construction at all.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Construction {
    t: f32,
    levels: Vec<Vec<Vec2<f32>>>,
}

impl Construction {
    pub fn new(points: &[Vec2<f32>], t: f32) -> Self {
        if points.len() < 2 {
            return Self {
                t,
                levels: Vec::new(),
            };
        }

        let mut levels = Vec::with_capacity(points.len());
        levels.push(points.to_vec());
        while let Some(prev) = levels.last().filter(|l| l.len() > 1) {
            let next = prev
                .windows(2)
                .map(|w| Vec2::weighted_sum2(w[0], w[1], 1.0 - t, t))
                .collect::<Vec<_>>();
            levels.push(next);
        }

        Self { t, levels }
    }

    #[inline]
    pub fn t(&self) -> f32 {
        self.t
    }

    /// All levels, starting with the control polygon.
    #[inline]
    pub fn levels(&self) -> &[Vec<Vec2<f32>>] {
        &self.levels
    }

    #[inline]
    pub fn level(&self, index: usize) -> Option<&[Vec2<f32>]> {
        self.levels.get(index).map(|l| l.as_slice())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The point on the curve at `t`.
    pub fn point(&self) -> Option<Vec2<f32>> {
        self.levels.last().and_then(|l| l.first()).copied()
    }

    /// The edges joining consecutive points within each level, level by level.
    pub fn segments(&self) -> impl Iterator<Item = [Vec2<f32>; 2]> + '_ {
        self.levels
            .iter()
            .flat_map(|l| l.windows(2).map(|w| [w[0], w[1]]))
    }

    /// A square handle around every point of every level.
    pub fn handles(&self, half_size: f32) -> impl Iterator<Item = [Vec2<f32>; 4]> + '_ {
        self.levels
            .iter()
            .flatten()
            .map(move |p| handle_quad(*p, half_size))
    }
}

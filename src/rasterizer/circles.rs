use super::*;
use crate::primitives::Circle;

/// The second-octant offsets `(i, r)` of a Bresenham circle, from `(0, radius)` to the diagonal.
///
/// Offsets and the decision variable are held in `i64`, so every `u32` radius is stepped without overflow.
#[derive(Clone, Debug)]
pub struct Octant {
    i: i64,
    r: i64,
    decision: i64,
}

impl Octant {
    pub fn new(radius: u32) -> Self {
        let r = i64::from(radius);
        Self {
            i: 0,
            r,
            decision: 3 - 2 * r,
        }
    }
}

impl Iterator for Octant {
    type Item = Vec2<i64>;

    fn next(&mut self) -> Option<Vec2<i64>> {
        if self.i > self.r {
            return None;
        }
        let offset = Vec2::new(self.i, self.r);

        if self.decision < 0 {
            self.decision += 4 * self.i + 6;
        } else {
            self.decision += 4 * (self.i - self.r) + 10;
            self.r -= 1;
        }
        self.i += 1;

        Some(offset)
    }
}

impl Circle {
    #[inline]
    pub fn octant(&self) -> Octant {
        Octant::new(self.radius)
    }
}

/// Bresenham (midpoint) circle rasterization.
///
/// Walks the second octant from `(0, r)` towards the diagonal and emits all eight reflections of every step, so each
/// step produces exactly eight points. Points on the axes and diagonal are repeated, and a radius of zero emits the
/// centre eight times.
///
/// Reflections that fall outside the `i32` lattice are skipped.
impl Rasterizer for Circle {
    fn rasterize<B: Blitter + ?Sized>(&self, blitter: &mut B) {
        let c = self.center.map(i64::from);

        let steps = usize::try_from(self.radius).unwrap_or(usize::MAX).saturating_add(1);
        blitter.reserve(steps.saturating_mul(8).min(MAX_RESERVE));

        for Vec2 { x: i, y: r } in self.octant() {
            for offset in [
                Vec2::new(i, r),
                Vec2::new(-i, -r),
                Vec2::new(i, -r),
                Vec2::new(-i, r),
                Vec2::new(r, i),
                Vec2::new(-r, -i),
                Vec2::new(r, -i),
                Vec2::new(-r, i),
            ] {
                let p = c + offset;
                if let (Ok(x), Ok(y)) = (i32::try_from(p.x), i32::try_from(p.y)) {
                    blitter.emit(Vec2::new(x, y));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn point_set(circle: Circle) -> BTreeSet<(i32, i32)> {
        circle.points().into_iter().map(|p| p.into_tuple()).collect()
    }

    #[test]
    fn zero_radius() {
        let points = Circle::new((3, -4), 0).points();
        assert_eq!(points.len(), 8);
        assert!(points.iter().all(|p| *p == Vec2::new(3, -4)));
    }

    #[test]
    fn radius_one() {
        let expected = [(0, 1), (0, -1), (1, 0), (-1, 0)].into_iter().collect();
        assert_eq!(point_set(Circle::new((0, 0), 1)), expected);
    }

    #[test]
    fn radius_three() {
        let expected = [
            (0, 3), (0, -3), (3, 0), (-3, 0),
            (1, 3), (-1, 3), (1, -3), (-1, -3),
            (3, 1), (-3, 1), (3, -1), (-3, -1),
            (2, 2), (-2, 2), (2, -2), (-2, -2),
        ]
        .into_iter()
        .collect();
        assert_eq!(point_set(Circle::new((0, 0), 3)), expected);
    }

    #[test]
    fn eight_points_per_step() {
        for radius in 0..40 {
            assert_eq!(Circle::new((0, 0), radius).points().len() % 8, 0);
        }
    }

    #[test]
    fn offset_center() {
        let centered = point_set(Circle::new((0, 0), 10));
        let moved = point_set(Circle::new((7, -2), 10));
        let shifted = centered.iter().map(|(x, y)| (x + 7, y - 2)).collect::<BTreeSet<_>>();
        assert_eq!(moved, shifted);
    }

    #[test]
    fn points_lie_near_the_circle() {
        let radius = 25;
        for p in Circle::new((0, 0), radius).points() {
            let dist = ((p.x * p.x + p.y * p.y) as f32).sqrt();
            assert!((dist - radius as f32).abs() < 1.0, "{:?} is {} from the centre", p, dist);
        }
    }

    #[test]
    fn largest_radius_does_not_overflow() {
        let radius = i64::from(u32::MAX);
        let first = Circle::new((0, 0), u32::MAX).octant().take(3).collect::<Vec<_>>();
        assert_eq!(first, vec![Vec2::new(0, radius), Vec2::new(1, radius), Vec2::new(2, radius)]);

        let radius = (1 << 30) | 5;
        let first = Circle::new((0, 0), radius).octant().take(2).collect::<Vec<_>>();
        assert_eq!(first, vec![Vec2::new(0, i64::from(radius)), Vec2::new(1, i64::from(radius))]);
    }

    #[test]
    fn octant_ends_at_the_diagonal() {
        let octant = Circle::new((0, 0), 10).octant().collect::<Vec<_>>();
        assert_eq!(octant.first(), Some(&Vec2::new(0, 10)));
        assert!(octant.iter().all(|o| o.x <= o.y));
        assert_eq!(Circle::new((0, 0), 10).points().len(), 8 * octant.len());
    }

    #[test]
    fn points_off_the_lattice_are_skipped() {
        let center = (i32::MAX - 2, i32::MIN + 1);
        let clipped = Circle::new(center, 5).points();

        let expected = Circle::new((0, 0), 5)
            .points()
            .into_iter()
            .map(|p| (i64::from(p.x) + i64::from(center.0), i64::from(p.y) + i64::from(center.1)))
            .filter(|(x, y)| i32::try_from(*x).is_ok() && i32::try_from(*y).is_ok())
            .map(|(x, y)| Vec2::new(x as i32, y as i32))
            .collect::<Vec<_>>();

        assert!(!clipped.is_empty());
        assert!(clipped.len() < Circle::new((0, 0), 5).points().len());
        assert_eq!(clipped, expected);
    }
}

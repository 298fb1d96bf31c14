//! Direct evaluation of Bézier curves as a Bernstein-weighted sum of their control points.

use crate::math::{log_binomial_row, WeightedSum};
use alloc::vec::Vec;
use vek::Vec2;

/// Evaluates the curve defined by a control polygon at arbitrary parameters.
///
/// The logarithms of the binomial coefficients of the polygon's degree are computed once on construction. Each weight
/// `C(n, j) u^j (1 - u)^(n - j)` is formed as the exponential of a sum of logarithms in `f64`, so no intermediate
/// term overflows or underflows to a `0 * inf` for any polygon size. Weights are narrowed only when the point is
/// summed.
#[derive(Clone, Debug)]
pub struct Bernstein<'a> {
    points: &'a [Vec2<f32>],
    log_binomials: Vec<f64>,
    weights: Vec<f32>,
}

impl<'a> Bernstein<'a> {
    /// Returns `None` for polygons of fewer than two points, which do not define a curve.
    pub fn new(points: &'a [Vec2<f32>]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(Self {
            points,
            log_binomials: log_binomial_row(points.len() - 1),
            weights: Vec::with_capacity(points.len()),
        })
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// Evaluate the curve at `u`, clamped into `[0, 1]`.
    pub fn eval(&mut self, u: f32) -> Vec2<f32> {
        let u = (u as f64).clamp(0.0, 1.0);
        // ln(0) would turn the endpoint weights into 0 * -inf
        if u == 0.0 {
            return self.points[0];
        } else if u == 1.0 {
            return self.points[self.degree()];
        }

        let n = self.degree() as f64;
        let (ln_u, ln_v) = (u.ln(), (1.0 - u).ln());

        self.weights.clear();
        self.weights.extend(
            self.log_binomials
                .iter()
                .enumerate()
                .map(|(j, ln_c)| (ln_c + j as f64 * ln_u + (n - j as f64) * ln_v).exp() as f32),
        );

        Vec2::weighted_sum(self.points, &self.weights)
    }

    /// Replace the contents of `out` with `count` samples at `u = k / count` for `k` in `0..count`.
    ///
    /// The first sample is exactly the first control point; the last approaches, but does not reach, the last control
    /// point.
    pub fn sample_into(&mut self, count: usize, out: &mut Vec<Vec2<f32>>) {
        out.clear();
        out.reserve(count);
        for k in 0..count {
            let u = k as f32 / count as f32;
            let p = self.eval(u);
            out.push(p);
        }
    }
}

/// Sample the curve defined by `points` at `count` evenly spaced parameters.
///
/// Polygons of fewer than two points produce no samples.
pub fn sample(points: &[Vec2<f32>], count: usize) -> Vec<Vec2<f32>> {
    let mut out = Vec::new();
    if let Some(mut curve) = Bernstein::new(points) {
        curve.sample_into(count, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2<f32>, b: Vec2<f32>, eps: f32) -> bool {
        (a - b).map(f32::abs).reduce_partial_max() <= eps
    }

    #[test]
    fn degenerate_polygons() {
        assert!(Bernstein::new(&[]).is_none());
        assert!(Bernstein::new(&[Vec2::new(0.3, 0.3)]).is_none());
        assert!(sample(&[], 1000).is_empty());
        assert!(sample(&[Vec2::one()], 1000).is_empty());
    }

    #[test]
    fn linear_curve_is_a_lerp() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(2.0, -4.0)];
        let mut curve = Bernstein::new(&points).unwrap();
        assert_eq!(curve.eval(0.5), Vec2::new(1.0, -2.0));
        assert_eq!(curve.eval(0.25), Vec2::new(0.5, -1.0));
    }

    #[test]
    fn quadratic_midpoint() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0)];
        let mut curve = Bernstein::new(&points).unwrap();
        assert!(approx(curve.eval(0.5), Vec2::new(1.0, 1.0), 1e-6));
    }

    #[test]
    fn endpoints_are_interpolated() {
        let points = [
            Vec2::new(-0.8, -0.2),
            Vec2::new(-0.3, 0.9),
            Vec2::new(0.4, -0.7),
            Vec2::new(0.9, 0.5),
        ];
        let samples = sample(&points, 1000);
        assert_eq!(samples.len(), 1000);
        assert_eq!(samples[0], points[0]);
        assert!(approx(samples[999], points[3], 1e-2));
        assert!(approx(Bernstein::new(&points).unwrap().eval(1.0), points[3], 1e-6));
    }

    #[test]
    fn high_degree_stays_finite() {
        let points = (0..50)
            .map(|i| Vec2::new(i as f32 / 25.0 - 1.0, if i % 2 == 0 { 0.5 } else { -0.5 }))
            .collect::<Vec<_>>();
        let samples = sample(&points, 1000);
        assert!(samples.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        // The curve lies in the convex hull of its control points
        assert!(samples.iter().all(|p| p.x >= -1.0 - 1e-4 && p.x <= 1.0 && p.y.abs() <= 0.5 + 1e-4));
        assert!(approx(samples[0], points[0], 1e-6));
    }

    #[test]
    fn several_hundred_points() {
        let points = (0..400)
            .map(|i| Vec2::new((i as f32 * 0.1).sin(), (i as f32 * 0.1).cos()))
            .collect::<Vec<_>>();
        let samples = sample(&points, 100);
        assert!(samples.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn binomials_past_f64_range_stay_finite() {
        // C(n, n / 2) overflows f64 from about 1030 control points
        let points = (0..1200)
            .map(|i| Vec2::new((i as f32 * 0.05).sin(), (i as f32 * 0.05).cos()))
            .collect::<Vec<_>>();
        let samples = sample(&points, 1000);
        assert_eq!(samples.len(), 1000);
        assert!(samples.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        assert_eq!(samples[0], points[0]);
        // Every control point lies on the unit circle, so the curve stays inside it
        assert!(samples.iter().all(|p| p.magnitude() <= 1.0 + 1e-3));

        let mut curve = Bernstein::new(&points).unwrap();
        assert_eq!(curve.eval(1.0), points[1199]);
        assert!(curve.eval(0.5).magnitude() <= 1.0 + 1e-3);
    }

    #[test]
    fn parameter_is_clamped() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0)];
        let mut curve = Bernstein::new(&points).unwrap();
        assert_eq!(curve.eval(-0.5), points[0]);
        assert_eq!(curve.eval(3.0), points[2]);
    }
}

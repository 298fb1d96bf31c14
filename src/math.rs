use crate::Error;
use vek::Vec2;

/// The default number of lattice units per unit of device space.
pub const DEFAULT_SCALE: f32 = 200.0;

/// Maps lattice coordinates into device coordinates by dividing by a fixed scale.
///
/// With the default scale of 200, a lattice span of ±100 lands inside ±0.5 of the device range. No clamping is
/// performed: keeping inputs within a sensible visual range is the caller's business.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Normalizer {
    scale: f32,
}

impl Normalizer {
    /// Create a normalizer with the given scale.
    ///
    /// The scale must be finite and non-zero.
    pub fn new(scale: f32) -> Result<Self, Error> {
        if scale.is_finite() && scale != 0.0 {
            Ok(Self { scale })
        } else {
            Err(Error::InvalidScale(scale))
        }
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Normalize a single lattice coordinate.
    #[inline(always)]
    pub fn normalize(&self, coord: i32) -> f32 {
        coord as f32 / self.scale
    }

    /// Normalize a lattice point.
    #[inline(always)]
    pub fn point(&self, p: Vec2<i32>) -> Vec2<f32> {
        p.map(|e| self.normalize(e))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

/// A trait used to produce linear combinations of values, such as interpolated positions along a curve.
pub trait WeightedSum: Sized {
    fn weighted_sum(values: &[Self], weights: &[f32]) -> Self;

    fn weighted_sum2(v0: Self, v1: Self, w0: f32, w1: f32) -> Self;
}

impl WeightedSum for f32 {
    #[inline(always)]
    fn weighted_sum(values: &[Self], weights: &[f32]) -> Self {
        values.iter().zip(weights).map(|(v, w)| v * w).sum()
    }

    #[inline(always)]
    fn weighted_sum2(v0: Self, v1: Self, w0: f32, w1: f32) -> Self {
        v0 * w0 + v1 * w1
    }
}

impl WeightedSum for Vec2<f32> {
    #[inline(always)]
    fn weighted_sum(values: &[Self], weights: &[f32]) -> Self {
        values
            .iter()
            .zip(weights)
            .fold(Vec2::zero(), |acc, (v, w)| acc + *v * *w)
    }

    #[inline(always)]
    fn weighted_sum2(v0: Self, v1: Self, w0: f32, w1: f32) -> Self {
        v0 * w0 + v1 * w1
    }
}

/// The natural logarithms of row `n` of Pascal's triangle, i.e: `ln C(n, 0) ..= ln C(n, n)`.
///
/// Each entry is derived from its neighbour by adding `ln(n - j + 1) - ln(j)`, so neither a factorial nor a
/// coefficient itself is ever formed. `C(1030, 515)` already exceeds `f64::MAX`; its logarithm is about 710.
pub fn log_binomial_row(n: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(n + 1);
    let mut c = 0.0f64;
    row.push(c);
    for j in 1..=n {
        c += ((n - j + 1) as f64).ln() - (j as f64).ln();
        row.push(c);
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_divides_by_scale() {
        let n = Normalizer::default();
        assert_eq!(n.normalize(100), 0.5);
        assert_eq!(n.normalize(-200), -1.0);
        assert_eq!(n.point(Vec2::new(0, 50)), Vec2::new(0.0, 0.25));
    }

    #[test]
    fn normalize_is_injective_over_ui_range() {
        let n = Normalizer::default();
        let values = (-99..=99).map(|i| n.normalize(i)).collect::<Vec<_>>();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rejects_degenerate_scale() {
        assert!(Normalizer::new(0.0).is_err());
        assert!(Normalizer::new(f32::NAN).is_err());
        assert!(Normalizer::new(f32::INFINITY).is_err());
        assert_eq!(Normalizer::new(-10.0).unwrap().normalize(5), -0.5);
    }

    fn binomials(n: usize) -> Vec<f64> {
        log_binomial_row(n).into_iter().map(f64::exp).collect()
    }

    #[test]
    fn small_binomial_rows() {
        assert_eq!(log_binomial_row(0), vec![0.0]);
        for (row, expected) in [
            (binomials(4), vec![1.0, 4.0, 6.0, 4.0, 1.0]),
            (binomials(5), vec![1.0, 5.0, 10.0, 10.0, 5.0, 1.0]),
        ] {
            assert_eq!(row.len(), expected.len());
            assert!(row.iter().zip(&expected).all(|(c, e)| (c - e).abs() < 1e-9));
        }
    }

    #[test]
    fn binomial_row_beyond_integer_factorials() {
        // 13! no longer fits in an i32
        assert!((binomials(20)[10] - 184_756.0).abs() < 1e-6);

        let row = log_binomial_row(500);
        assert!(row.iter().all(|c| c.is_finite() && *c > -1e-9));
        assert!(row[500].abs() < 1e-6);
    }

    #[test]
    fn binomial_row_past_f64_range() {
        let row = log_binomial_row(2000);
        assert_eq!(row.len(), 2001);
        assert!(row.iter().all(|c| c.is_finite()));
        // The middle coefficient itself would be infinite
        assert!(row[1000].exp().is_infinite());
        assert!(row[2000].abs() < 1e-6);
    }

    #[test]
    fn weighted_sums() {
        let a = Vec2::new(0.0, 2.0);
        let b = Vec2::new(4.0, 0.0);
        assert_eq!(Vec2::weighted_sum2(a, b, 0.5, 0.5), Vec2::new(2.0, 1.0));
        assert_eq!(Vec2::weighted_sum(&[a, b], &[0.25, 0.75]), Vec2::new(3.0, 0.5));
        assert_eq!(f32::weighted_sum(&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0]), 6.0);
    }
}

use super::*;
use crate::primitives::Segment;

/// The lattice points of a [`Segment`], produced lazily. See [`Segment::steps`].
///
/// Deltas and the decision variable are held in `i64`, so any pair of `i32` endpoints can be stepped without
/// overflow. Every emitted point lies between the endpoints and is therefore representable as `i32`.
#[derive(Clone, Debug)]
pub struct LineSteps {
    current: Vec2<i64>,
    major_step: Vec2<i64>,
    minor_step: Vec2<i64>,
    major: i64,
    minor: i64,
    decision: i64,
    remaining: u64,
    started: bool,
}

impl LineSteps {
    pub fn new(segment: &Segment) -> Self {
        let from = segment.from.map(i64::from);
        let delta = segment.to.map(i64::from) - from;
        let step = delta.map(i64::signum);
        let extent = delta.map(i64::abs);

        // Diagonals (|dx| == |dy|) go down the x-major branch
        let (major, minor, major_step, minor_step) = if extent.y > extent.x {
            (extent.y, extent.x, Vec2::new(0, step.y), Vec2::new(step.x, 0))
        } else {
            (extent.x, extent.y, Vec2::new(step.x, 0), Vec2::new(0, step.y))
        };

        Self {
            current: from,
            major_step,
            minor_step,
            major,
            minor,
            decision: 2 * minor - major,
            remaining: major.max(1) as u64,
            started: false,
        }
    }
}

impl Iterator for LineSteps {
    type Item = Vec2<i32>;

    fn next(&mut self) -> Option<Vec2<i32>> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        if self.started {
            if self.decision > 0 {
                self.current += self.minor_step;
                self.decision += 2 * self.minor - 2 * self.major;
            } else {
                self.decision += 2 * self.minor;
            }
            self.current += self.major_step;
        } else {
            self.started = true;
        }

        Some(self.current.map(|e| e as i32))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineSteps {}

impl Segment {
    /// Iterate over the points this segment rasterizes to, in order.
    #[inline]
    pub fn steps(&self) -> LineSteps {
        LineSteps::new(self)
    }
}

/// Bresenham line rasterization over all eight octants.
///
/// Emits the half-open range `[from, to)`: the start point is always emitted, followed by one point per unit step
/// along the major axis, stopping one step short of `to`. Chained segments (such as a triangle outline) therefore
/// visit every shared vertex exactly once. A segment whose endpoints coincide emits only its start point.
///
/// The decision variable is kept in integers, scaled by the major-axis extent, so no division is ever performed.
/// Vertical segments fall into the y-major branch without special treatment.
impl Rasterizer for Segment {
    fn rasterize<B: Blitter + ?Sized>(&self, blitter: &mut B) {
        let steps = self.steps();
        blitter.reserve(steps.len().min(MAX_RESERVE));
        steps.for_each(|p| blitter.emit(p));
    }
}

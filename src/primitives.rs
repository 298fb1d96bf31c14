use vek::Vec2;

/// A directed line segment between two lattice points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub from: Vec2<i32>,
    pub to: Vec2<i32>,
}

impl Segment {
    pub fn new(from: impl Into<Vec2<i32>>, to: impl Into<Vec2<i32>>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The same segment, traversed in the opposite direction.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

/// A circle on the lattice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Vec2<i32>,
    pub radius: u32,
}

impl Circle {
    pub fn new(center: impl Into<Vec2<i32>>, radius: u32) -> Self {
        Self {
            center: center.into(),
            radius,
        }
    }
}

/// Three lattice points. No particular winding is assumed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    pub vertices: [Vec2<i32>; 3],
}

impl Triangle {
    pub fn new(
        a: impl Into<Vec2<i32>>,
        b: impl Into<Vec2<i32>>,
        c: impl Into<Vec2<i32>>,
    ) -> Self {
        Self {
            vertices: [a.into(), b.into(), c.into()],
        }
    }

    /// The outline edges `v0 -> v1`, `v1 -> v2` and `v2 -> v0`.
    pub fn edges(&self) -> [Segment; 3] {
        let [a, b, c] = self.vertices;
        [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
    }

    /// Edge functions for each edge, each oriented so that the opposite vertex lies on its non-negative side.
    pub fn edge_functions(&self) -> [EdgeFunction; 3] {
        let [a, b, c] = self.vertices;
        [
            EdgeFunction::new(a, b, c),
            EdgeFunction::new(b, c, a),
            EdgeFunction::new(c, a, b),
        ]
    }

    /// The smallest and largest corners of the axis-aligned bounding box.
    pub fn bounds(&self) -> (Vec2<i32>, Vec2<i32>) {
        let [a, b, c] = self.vertices;
        (
            Vec2::min(Vec2::min(a, b), c),
            Vec2::max(Vec2::max(a, b), c),
        )
    }

    /// Whether `p` lies on the non-negative side of all three edges.
    pub fn contains(&self, p: Vec2<i32>) -> bool {
        self.edge_functions().iter().all(|e| e.eval(p) >= 0)
    }
}

/// The implicit line `a*x + b*y + c` through two points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeFunction {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl EdgeFunction {
    /// Build the line through `from` and `to`, negated if necessary so that `reference` evaluates non-negative.
    pub fn new(from: Vec2<i32>, to: Vec2<i32>, reference: Vec2<i32>) -> Self {
        let (x0, y0) = (from.x as i64, from.y as i64);
        let (x1, y1) = (to.x as i64, to.y as i64);
        let line = Self {
            a: y1 - y0,
            b: x0 - x1,
            c: x1 * y0 - x0 * y1,
        };
        if line.eval(reference) < 0 {
            Self {
                a: -line.a,
                b: -line.b,
                c: -line.c,
            }
        } else {
            line
        }
    }

    #[inline(always)]
    pub fn eval(&self, p: Vec2<i32>) -> i64 {
        self.a * p.x as i64 + self.b * p.y as i64 + self.c
    }
}
